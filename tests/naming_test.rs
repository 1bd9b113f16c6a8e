use subtheme::naming::machine_name;

#[test]
fn test_machine_name_is_lowercase_and_safe() {
    for label in ["My Theme", "WEIRD--Input!!", "Ünïcode Läbel", "a1_b2"] {
        let name = machine_name(label);
        assert_eq!(name, name.to_lowercase());
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
            "unexpected character in '{}'",
            name
        );
    }
}

#[test]
fn test_runs_collapse_to_single_underscore() {
    assert_eq!(machine_name("My Theme!!"), "my_theme_");
    assert_eq!(machine_name("a - b"), "a_b");
}

#[test]
fn test_empty_label() {
    assert_eq!(machine_name(""), "");
}

#[test]
fn test_no_trimming_of_underscores() {
    assert_eq!(machine_name("!!Theme"), "_theme");
    assert_eq!(machine_name("_Theme_"), "_theme_");
}

#[test]
fn test_unicode_letters_are_replaced() {
    assert_eq!(machine_name("Crème"), "cr_me");
}

#[test]
fn test_digits_are_kept() {
    assert_eq!(machine_name("Theme 2000"), "theme_2000");
}
