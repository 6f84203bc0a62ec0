//! # DOM Access
//!
//! The results writer talks to the page through the [`Dom`] trait. Handles are
//! opaque values handed out by the implementation; a missing parent is modelled
//! as `None` rather than a sentinel handle, and appending to it does nothing.
//!
//! [`Document`] is the in-memory implementation shipped with the crate.

mod document;
mod html;

pub use document::{Document, NodeId};

/// The DOM operations the results writer depends on.
///
/// Every operation is synchronous and infallible at this level. Implementations
/// that can reject a mutation are expected to swallow the rejection, the way a
/// page tolerates appends to an undefined parent.
pub trait Dom {
    /// Opaque node handle, valid for the lifetime of the document.
    type Node: Clone;

    /// All attached elements with the given tag, in document order.
    fn elements_by_tag(&self, tag: &str) -> Vec<Self::Node>;

    /// Creates a detached element.
    fn new_element(&mut self, tag: &str) -> Self::Node;

    /// Creates a detached text node.
    fn new_text(&mut self, text: &str) -> Self::Node;

    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Appends `child` under `parent` and returns the child's handle.
    ///
    /// With no parent the call is a no-op and the child stays detached.
    fn append_child(&mut self, parent: Option<&Self::Node>, child: Self::Node) -> Self::Node;

    /// Appends `child`, then hands the appended node to `build` so its own
    /// children can be filled in.
    fn append_child_with<F>(
        &mut self,
        parent: Option<&Self::Node>,
        child: Self::Node,
        build: F,
    ) -> Self::Node
    where
        Self: Sized,
        F: FnOnce(&mut Self, &Self::Node),
    {
        let node = self.append_child(parent, child);
        build(self, &node);
        node
    }
}
