use wordbook_types::{Entry, RandomWord};

pub const NO_WORDS: &str = "No words found";

/// `word  /phonetics/  definition  [category]`, phonetics omitted when empty
pub fn format_row(word: &str, entry: &Entry) -> String {
    let mut row = word.to_string();
    if !entry.phonetics.is_empty() {
        row.push_str("  ");
        row.push_str(&entry.phonetics);
    }
    row.push_str(&format!("  {}  [{}]", entry.definition, entry.category));
    row
}

pub fn format_rows(rows: &[(String, Entry)]) -> String {
    if rows.is_empty() {
        return NO_WORDS.to_string();
    }

    rows.iter()
        .map(|(word, entry)| format_row(word, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_word_of_the_day(word: &RandomWord) -> String {
    let mut out = format!("Word of the Day: {}", word.word);
    if !word.phonetics.is_empty() {
        out.push_str(&format!("\n{}", word.phonetics));
    }
    out.push_str(&format!("\n{}", word.definition));
    out
}
