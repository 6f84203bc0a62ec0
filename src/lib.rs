//! Renders test failures into a DOM fragment that browser automation reads by
//! element id (`#failureCount`, `#failures`).

pub use crate::dom::{Document, Dom, NodeId};
pub use crate::errors::{DomError, LayoutError};
pub use crate::failure::TestFailure;
pub use crate::layout::{ResultsLayout, FAILURES_ID, FAILURE_COUNT_ID};
pub use crate::results::{body, results_as_string, write_results, write_results_with};

pub mod dom;
pub mod errors;
pub mod failure;
pub mod layout;
pub mod results;
