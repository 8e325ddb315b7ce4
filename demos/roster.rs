//! Predicate tour
//!
//! Walks through the three ways to build a predicate, the logical
//! combinators, and the sequence operations, using a football roster as
//! demonstration data.
//!
//! Run with: cargo run --example roster

use riddle::prelude::*;

fn main() {
    println!("=== Predicate Tour ===\n");

    construction_styles();
    logical_combinators();
    conditional_removal();
    quantifiers_and_filter();
    two_argument_predicates();
}

/// A named type implementing the trait directly.
struct StartsWithM;

impl Predicate<str> for StartsWithM {
    fn test(&self, value: &str) -> bool {
        value.starts_with('M')
    }
}

/// Demonstrates the three interchangeable construction styles
fn construction_styles() {
    println!("--- Construction Styles ---\n");

    // A closure
    let starts_with_m = |s: &str| s.starts_with('M');

    // A reference to an existing function
    let empty: fn(&str) -> bool = str::is_empty;

    println!("named type:         StartsWithM.test(\"Messi\") = {}", StartsWithM.test("Messi"));
    println!("closure:            starts_with_m.test(\"Messi\") = {}", starts_with_m.test("Messi"));
    println!("function reference: str::is_empty.test(\"\") = {}", empty.test(""));
    println!();
}

/// Demonstrates and / or / negate / is_equal
fn logical_combinators() {
    println!("--- Logical Combinators ---\n");

    let longer_than_5 = len_gt(5);
    println!(
        "starts with M and longer than 5, \"Messi Lionel\": {}",
        starts_with("M").and(longer_than_5).test("Messi Lionel")
    );

    println!(
        "is_equal(\"Messi\") on \"Messi\": {}",
        is_equal("Messi").test(&"Messi")
    );

    let doesnt_start_with_m = starts_with("M").negate();
    println!(
        "negated starts-with-M, \"Cristiano Ronaldo\": {}",
        doesnt_start_with_m.test("Cristiano Ronaldo")
    );

    println!(
        "starts with M or C, \"Cristiano Ronaldo\": {}",
        starts_with("M").or(starts_with("C")).test("Cristiano Ronaldo")
    );
    println!();
}

/// Demonstrates in-place removal with a predicate
fn conditional_removal() {
    println!("--- Conditional Removal ---\n");

    let mut players = vec!["Cristiano", "David Beckham", "Lionel Messi", "Carlitos Tevez"];
    println!("before removing players starting with C: {players:?}");
    remove_matching(&mut players, &starts_with("C"));
    println!("after removing players starting with C:  {players:?}");
    println!();
}

/// Demonstrates all_match / any_match / none_match / filtered
fn quantifiers_and_filter() {
    println!("--- Quantifiers and Filter ---\n");

    let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
    println!(
        "all start with C: {}",
        all_match(&players, &starts_with("C"))
    );

    let is_messi = is_equal("Messi");
    println!("none is Messi: {}", none_match(&players, &is_messi));

    let mut with_messi = players.to_vec();
    with_messi.push("Messi");
    println!("any is Messi after append: {}", any_match(&with_messi, &is_messi));

    let not_messi = is_messi.negate();
    let without_messi: Vec<&str> = filtered(&with_messi, &not_messi).copied().collect();
    println!("filtered back out: {without_messi:?}");
    println!();
}

/// Demonstrates the user-defined two-argument predicate
fn two_argument_predicates() {
    println!("--- Two-Argument Predicates ---\n");

    let longer_than = |s: &String, n: &usize| s.len() > *n;
    println!(
        "is \"Lionel Messi\" longer than 5? {}",
        longer_than.test(&String::from("Lionel Messi"), &5)
    );

    let shorter_or_equal = longer_than.negate();
    println!(
        "is \"Cocu\" at most 5 long? {}",
        shorter_or_equal.test(&String::from("Cocu"), &5)
    );
}
