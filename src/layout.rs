//! Tag names and element ids used for the results fragment.

use serde::{Deserialize, Serialize};

use crate::errors::LayoutError;

/// Id of the element holding the number of failed tests.
pub const FAILURE_COUNT_ID: &str = "failureCount";

/// Id of the element holding the newline-separated failure messages.
pub const FAILURES_ID: &str = "failures";

/// Shape of the fragment produced by the results writer.
///
/// The default is the contract automation relies on; override it only when
/// the consuming harness queries different ids. Missing JSON fields fall back
/// to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResultsLayout {
    pub container_tag: String,
    pub count_tag: String,
    pub count_id: String,
    pub failures_tag: String,
    pub failures_id: String,
}

impl ResultsLayout {
    /// Parses and validates a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Rejects empty values, tag names outside `[A-Za-z0-9-]` and ids
    /// containing whitespace.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let tags = [
            ("containerTag", &self.container_tag),
            ("countTag", &self.count_tag),
            ("failuresTag", &self.failures_tag),
        ];
        for (field, tag) in tags {
            if tag.is_empty() {
                return Err(LayoutError::Empty { field });
            }
            if !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
                return Err(LayoutError::InvalidTag { field });
            }
        }

        let ids = [("countId", &self.count_id), ("failuresId", &self.failures_id)];
        for (field, id) in ids {
            if id.is_empty() {
                return Err(LayoutError::Empty { field });
            }
            if id.chars().any(char::is_whitespace) {
                return Err(LayoutError::InvalidId { field });
            }
        }
        Ok(())
    }
}

impl Default for ResultsLayout {
    fn default() -> Self {
        Self {
            container_tag: "div".to_string(),
            count_tag: "div".to_string(),
            count_id: FAILURE_COUNT_ID.to_string(),
            failures_tag: "pre".to_string(),
            failures_id: FAILURES_ID.to_string(),
        }
    }
}
