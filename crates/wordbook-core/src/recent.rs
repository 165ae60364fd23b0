use wordbook_types::RECENTLY_VIEWED_LIMIT;

/// Most-recent-first list of distinct words, bounded at [`RECENTLY_VIEWED_LIMIT`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentlyViewed {
    words: Vec<String>,
}

impl RecentlyViewed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted words, dropping duplicates and overflow
    pub fn from_words(words: impl IntoIterator<Item = String>) -> Self {
        let mut recent = Self::new();
        for word in words {
            if recent.words.len() == RECENTLY_VIEWED_LIMIT {
                break;
            }
            if !recent.contains(&word) {
                recent.words.push(word);
            }
        }
        recent
    }

    /// Put `word` in front unless it is already listed.
    /// Returns whether the list changed.
    pub fn record(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        self.words.insert(0, word.to_string());
        self.words.truncate(RECENTLY_VIEWED_LIMIT);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
