use thiserror::Error;

/// A failed test case, ready to hand to the results writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{test}: {message}")]
pub struct TestFailure {
    pub test: String,
    pub message: String,
}

impl TestFailure {
    pub fn new(test: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            message: message.into(),
        }
    }
}
