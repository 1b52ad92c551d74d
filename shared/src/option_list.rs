use serde::{Deserialize, Serialize};

/// Ordered list of unique option texts. Order decides segment position and color.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct OptionList {
    options: Vec<String>,
}

impl OptionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims `text` and appends it. Returns false for empty text or an exact duplicate.
    pub fn add(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.options.push(trimmed.to_string());
        true
    }

    /// Removes the entry at `index`. Returns false when out of bounds.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.options.remove(index);
        true
    }

    pub fn clear(&mut self) {
        self.options.clear();
    }

    pub fn contains(&self, text: &str) -> bool {
        self.options.iter().any(|option| option == text)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.options.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.options
    }
}

impl From<Vec<String>> for OptionList {
    // Restored lists are taken as stored, without re-validating entries.
    fn from(options: Vec<String>) -> Self {
        Self { options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> OptionList {
        OptionList::from(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn test_add_appends_at_end() {
        let mut options = list(&["Pizza"]);
        assert!(options.add("Sushi"));
        assert_eq!(options.len(), 2);
        assert_eq!(options.get(1), Some("Sushi"));
    }

    #[test]
    fn test_add_trims_input() {
        let mut options = OptionList::new();
        assert!(options.add("  Tacos  "));
        assert_eq!(options.as_slice(), &["Tacos".to_string()]);
    }

    #[test]
    fn test_add_rejects_empty_and_whitespace() {
        let mut options = list(&["Pizza"]);
        assert!(!options.add(""));
        assert!(!options.add("   \t "));
        assert_eq!(options, list(&["Pizza"]));
    }

    #[test]
    fn test_add_rejects_exact_duplicate() {
        let mut options = list(&["Pizza"]);
        assert!(!options.add("Pizza"));
        assert!(!options.add(" Pizza "));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_add_is_case_sensitive() {
        let mut options = OptionList::new();
        options.add("Pizza");
        options.add("pizza");
        assert_eq!(options, list(&["Pizza", "pizza"]));
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut options = list(&["a", "b", "c", "d"]);
        assert!(options.remove(1));
        assert_eq!(options, list(&["a", "c", "d"]));
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let mut options = list(&["a", "b"]);
        assert!(!options.remove(2));
        assert!(!options.remove(usize::MAX));
        assert_eq!(options, list(&["a", "b"]));
    }

    #[test]
    fn test_clear() {
        let mut options = list(&["a", "b"]);
        options.clear();
        assert!(options.is_empty());
    }

    #[test]
    fn test_serializes_as_plain_array() {
        let options = list(&["Pizza", "Tacos"]);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"["Pizza","Tacos"]"#);
    }
}
