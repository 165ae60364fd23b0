use wordbook_types::{Entry, RandomWord};

use crate::render::{NO_WORDS, format_row, format_rows, format_word_of_the_day};

#[test]
fn row_includes_phonetics_when_present() {
    let entry = Entry::new("a small domesticated carnivorous mammal", "/kæt/", "Daily Use");
    assert_eq!(
        format_row("cat", &entry),
        "cat  /kæt/  a small domesticated carnivorous mammal  [Daily Use]"
    );
}

#[test]
fn row_skips_empty_phonetics() {
    let entry = Entry::new("empty", "", "Daily Use");
    assert_eq!(format_row("vacant", &entry), "vacant  empty  [Daily Use]");
}

#[test]
fn empty_listing_says_so() {
    assert_eq!(format_rows(&[]), NO_WORDS);
}

#[test]
fn rows_are_one_per_line() {
    let rows = vec![
        ("a".to_string(), Entry::new("first", "", "X")),
        ("b".to_string(), Entry::new("second", "", "Y")),
    ];
    assert_eq!(format_rows(&rows), "a  first  [X]\nb  second  [Y]");
}

#[test]
fn word_of_the_day_fallback() {
    assert_eq!(
        format_word_of_the_day(&RandomWord::fallback()),
        "Word of the Day: Word\nDefinition not available"
    );
}
