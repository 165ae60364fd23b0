use unicode_normalization::UnicodeNormalization;

/// Dictionary key form of user input: trimmed, NFC, lowercase
pub fn normalize_word(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}
