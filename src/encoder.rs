use serde::{Deserialize, Serialize};

/// Bidirectional mapping between location names and integer codes `0..K-1`.
///
/// Codes are assigned in sorted order of the class names, so the order in
/// which locations appear at fit time is irrelevant. Immutable after
/// fitting; serialized alongside the model and reloaded for inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationEncoder {
    classes: Vec<String>,
}

impl LocationEncoder {
    /// Builds an encoder from the distinct values of `names`.
    pub fn fit<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes: Vec<String> =
            names.into_iter().map(|s| s.as_ref().to_string()).collect();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Returns the code for `name`, or `None` if it was not seen at fit time.
    pub fn encode(&self, name: &str) -> Option<usize> {
        // Classes are sorted and deduplicated at fit time.
        self.classes.binary_search_by(|c| c.as_str().cmp(name)).ok()
    }

    /// Returns the class name for `code`, or `None` if out of range.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// All known class names, in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of known classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
