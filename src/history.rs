// Search history
//
// In-memory, most-recent-first list of searched words. Nothing is persisted;
// the list lives for the lifetime of the interactive session.

/// Something the history list can display
///
/// `filter_value` is the text a type-to-filter list matches against.
pub trait ListEntry {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    #[allow(dead_code)] // Reserved for type-to-filter
    fn filter_value(&self) -> &str;
}

/// One searched word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryItem(String);

impl HistoryItem {
    pub fn new(word: impl Into<String>) -> Self {
        Self(word.into())
    }

    pub fn word(&self) -> &str {
        &self.0
    }
}

impl ListEntry for HistoryItem {
    fn title(&self) -> &str {
        &self.0
    }

    fn description(&self) -> &str {
        ""
    }

    fn filter_value(&self) -> &str {
        &self.0
    }
}

/// Fixed-capacity history, newest first
///
/// Duplicates are kept: searching the same word twice lists it twice.
#[derive(Debug, Clone)]
pub struct History {
    items: Vec<HistoryItem>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend `word`, evicting the oldest entry once over capacity
    pub fn add(&mut self, word: impl Into<String>) {
        self.items.insert(0, HistoryItem::new(word));
        self.items.truncate(self.capacity);
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut history = History::new(10);
        for i in 0..11 {
            history.add(format!("word{i}"));
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.get(0).unwrap().word(), "word10");
        assert_eq!(history.get(9).unwrap().word(), "word1");
        // Oldest evicted
        assert!(!history.items().iter().any(|item| item.word() == "word0"));
    }

    #[test]
    fn keeps_duplicates() {
        let mut history = History::new(10);
        history.add("echo");
        history.add("echo");

        assert_eq!(history.len(), 2);
        assert_eq!(history.items()[0], history.items()[1]);
    }

    #[test]
    fn list_entry_exposes_word() {
        let item = HistoryItem::new("lexicon");
        assert_eq!(item.title(), "lexicon");
        assert_eq!(item.filter_value(), "lexicon");
        assert_eq!(item.description(), "");
    }
}
