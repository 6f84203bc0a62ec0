//! Error types for the in-memory document and layout configuration.
//!
//! The results writer itself never fails; these errors only surface from the
//! strict `Document` API and from loading a `ResultsLayout`.

use thiserror::Error;

use crate::dom::NodeId;

// ============================================================================
// DOCUMENT ERRORS
// ============================================================================

/// Rejected tree mutations on a [`Document`](crate::dom::Document).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle was not created by this document.
    #[error("node {0} does not belong to this document")]
    UnknownNode(NodeId),

    /// Only elements can have children.
    #[error("node {0} is not an element and cannot have children")]
    NotAnElement(NodeId),

    /// Appending would make a node its own ancestor.
    #[error("appending node {child} to {parent} would create a cycle")]
    HierarchyCycle { parent: NodeId, child: NodeId },
}

// ============================================================================
// LAYOUT ERRORS
// ============================================================================

/// Failures while loading or validating a [`ResultsLayout`](crate::ResultsLayout).
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid results layout: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("results layout field `{field}` must not be empty")]
    Empty { field: &'static str },

    #[error("results layout field `{field}` must be an ASCII alphanumeric tag name")]
    InvalidTag { field: &'static str },

    #[error("results layout field `{field}` must not contain whitespace")]
    InvalidId { field: &'static str },
}
