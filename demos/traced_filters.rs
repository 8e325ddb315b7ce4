//! Traced predicate evaluation
//!
//! Shows the `tracing` feature: wrapping predicates with `.traced(name)`
//! so every evaluation emits an event with the tested value and outcome.
//!
//! Run with: cargo run --example traced_filters --features tracing

use riddle::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu", "Messi"];

    let c_name = starts_with("C").traced("starts_with_c");
    println!("all start with C: {}", all_match(&players, &c_name));

    let is_messi = is_equal("Messi").traced("is_messi");
    println!("any is Messi: {}", any_match(&players, &is_messi));

    let keepers: Vec<&str> = filtered(&players, &is_messi.negate()).copied().collect();
    println!("without Messi: {keepers:?}");
}
