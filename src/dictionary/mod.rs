//! Word lists searched by the candidate scan.
//!
//! A [`WordList`] is an ordered, immutable collection of non-empty terms.
//! Order is significant: ties in the nearest-word search go to the word
//! that appears first. No deduplication or case folding is applied.

use std::sync::Arc;

/// Ordered, immutable sequence of non-empty words.
///
/// Cloning is cheap: clones share the same backing storage, so a single list
/// can be injected into any number of searches and benchmark harnesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Arc<[String]>,
}

impl WordList {
    /// Build a word list from terms, trimming each one and dropping empties.
    ///
    /// # Example
    ///
    /// ```rust
    /// use nearword::dictionary::WordList;
    ///
    /// let words = WordList::from_terms(["  rumah ", "", "makan", "rumah"]);
    /// assert_eq!(words.as_slice(), &["rumah", "makan", "rumah"]);
    /// ```
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = terms
            .into_iter()
            .filter_map(|term| {
                let trimmed = term.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();

        Self {
            words: words.into(),
        }
    }

    /// Parse newline-separated text, one word per line.
    pub fn parse(text: &str) -> Self {
        Self::from_terms(text.split('\n'))
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in list order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    /// Borrow the underlying words.
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_drops_blank_lines() {
        let words = WordList::parse("abad\r\n  abadi\n\n   \nabai\n");
        assert_eq!(words.as_slice(), &["abad", "abadi", "abai"]);
    }

    #[test]
    fn test_keeps_duplicates_and_order() {
        let words: WordList = ["b", "a", "b"].into_iter().collect();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["b", "a", "b"]);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_clone_shares_storage() {
        let words = WordList::from_terms(["satu", "dua"]);
        let shared = words.clone();
        assert!(Arc::ptr_eq(&words.words, &shared.words));
    }

    #[test]
    fn test_empty() {
        let words = WordList::parse("\n\n");
        assert!(words.is_empty());
        assert_eq!(WordList::default().len(), 0);
    }
}
