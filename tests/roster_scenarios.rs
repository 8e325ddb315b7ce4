//! End-to-end roster filtering scenarios

use riddle::prelude::*;

#[test]
fn removing_c_names_keeps_the_rest_in_order() {
    let mut players = vec![
        String::from("Cristiano"),
        String::from("David Beckham"),
        String::from("Lionel Messi"),
        String::from("Carlitos Tevez"),
    ];
    remove_matching(&mut players, &starts_with("C"));
    assert_eq!(players, ["David Beckham", "Lionel Messi"]);
}

#[test]
fn c_roster_satisfies_all_and_none() {
    let players = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
    assert!(all_match(&players, &starts_with("C")));
    assert!(none_match(&players, &is_equal("Messi")));
}

#[test]
fn appending_messi_flips_any_match() {
    let mut players = vec!["Cristiano", "Camavinga", "Canavaro", "Cocu"];
    assert!(!any_match(&players, &is_equal("Messi")));
    players.push("Messi");
    assert!(any_match(&players, &is_equal("Messi")));
}

#[test]
fn filtering_messi_out_restores_the_original_roster() {
    let original = ["Cristiano", "Camavinga", "Canavaro", "Cocu"];
    let mut players = original.to_vec();
    players.push("Messi");

    let not_messi = is_equal("Messi").negate();
    let restored: Vec<&str> = filtered(&players, &not_messi).copied().collect();
    assert_eq!(restored, original);
}

#[test]
fn two_argument_length_check() {
    let longer_than = |s: &String, n: &usize| s.len() > *n;
    assert!(longer_than.test(&String::from("Lionel Messi"), &5));
    assert!(!longer_than.test(&String::from("Messi"), &5));
}

#[test]
fn construction_styles_agree_on_the_roster() {
    struct StartsWithC;
    impl Predicate<String> for StartsWithC {
        fn test(&self, value: &String) -> bool {
            value.starts_with('C')
        }
    }
    let lambda = |s: &String| s.starts_with('C');
    fn named(s: &String) -> bool {
        s.starts_with('C')
    }

    let players = [
        String::from("Cristiano"),
        String::from("David Beckham"),
        String::from("Carlitos Tevez"),
    ];
    for player in &players {
        let expected = StartsWithC.test(player);
        assert_eq!(lambda.test(player), expected);
        assert_eq!(named.test(player), expected);
        assert_eq!(starts_with("C").test(player.as_str()), expected);
    }
}

#[test]
fn composed_roster_query() {
    // players that start with C or M, but are not exactly "Messi"
    let players = ["Cristiano", "Messi", "Beckham", "Camavinga", "Maldini"];
    let is_messi = |s: &str| s == "Messi";
    let wanted = starts_with("C").or(starts_with("M")).and(is_messi.negate());
    let selected: Vec<&str> = filtered(&players, &wanted).copied().collect();
    assert_eq!(selected, ["Cristiano", "Camavinga", "Maldini"]);
}
