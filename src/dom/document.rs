use std::fmt;

use tracing::warn;

use super::Dom;
use crate::errors::DomError;

/// Handle to a node owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum NodeKind {
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
    },
    Text(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed document tree.
///
/// Nodes are never freed: a `NodeId` stays valid for the document's whole
/// lifetime, so slots are not reused. Detached nodes stop being reachable
/// from the root and are ignored by every query, but they keep their memory.
/// Every write without a body leaves five such nodes behind, which is fine
/// for a page that lives as long as one test run; use a fresh `Document` per
/// run rather than one long-lived instance.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// A page with `html`, `head` and `body` elements.
    pub fn new() -> Self {
        let mut doc = Self::without_body();
        let root = doc.root;
        for tag in ["head", "body"] {
            let node = doc.create_element(tag);
            doc.attach(root, node);
        }
        doc
    }

    /// A page whose `html` element has no children yet.
    pub fn without_body() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("html");
        doc
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The first attached `body` element, if any.
    pub fn body(&self) -> Option<NodeId> {
        self.elements_by_tag("body").into_iter().next()
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeKind::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeKind::Text(text.to_string()))
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) -> Result<(), DomError> {
        match &mut self.node_mut(node)?.kind {
            NodeKind::Element { attributes, .. } => {
                match attributes.iter_mut().find(|(key, _)| key == name) {
                    Some((_, existing)) => *existing = value.to_string(),
                    None => attributes.push((name.to_string(), value.to_string())),
                }
                Ok(())
            }
            NodeKind::Text(_) => Err(DomError::NotAnElement(node)),
        }
    }

    /// Appends `child` as the last child of `parent`, moving it out of any
    /// previous parent.
    pub fn try_append_child(&mut self, parent: NodeId, child: NodeId) -> Result<NodeId, DomError> {
        self.node(child)?;
        if !matches!(self.node(parent)?.kind, NodeKind::Element { .. }) {
            return Err(DomError::NotAnElement(parent));
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyCycle { parent, child });
        }
        self.detach(child);
        self.attach(parent, child);
        Ok(child)
    }

    // ------------------------------------------------------------------------
    // Inspection
    // ------------------------------------------------------------------------

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    /// The data of a text node.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.node(node).ok()?.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.attributes(node)
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attributes in insertion order; empty for text and unknown nodes.
    pub fn attributes(&self, node: NodeId) -> &[(String, String)] {
        match self.node(node).map(|n| &n.kind) {
            Ok(NodeKind::Element { attributes, .. }) => attributes.as_slice(),
            _ => &[],
        }
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).ok()?.parent
    }

    /// Whether the node is reachable from the root.
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.node(node).is_ok() && self.is_inclusive_ancestor(self.root, node)
    }

    /// Concatenated text of all descendant text nodes, in document order.
    pub fn text_content(&self, node: NodeId) -> String {
        self.preorder(node)
            .into_iter()
            .filter_map(|id| self.text(id))
            .collect()
    }

    /// First attached element with the given `id` attribute.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements_by_id(id).into_iter().next()
    }

    /// Every attached element with the given `id` attribute, in document
    /// order. Ids are not unique once results have been written twice.
    pub fn elements_by_id(&self, id: &str) -> Vec<NodeId> {
        self.preorder(self.root)
            .into_iter()
            .filter(|&node| self.attribute(node, "id") == Some(id))
            .collect()
    }

    // ------------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------------

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, id: NodeId) -> Result<&Node, DomError> {
        self.nodes.get(id.0).ok_or(DomError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, DomError> {
        self.nodes.get_mut(id.0).ok_or(DomError::UnknownNode(id))
    }

    // Callers have already validated both ids.
    fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent.take() {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
    }

    /// True when `ancestor` is `node` or one of its ancestors.
    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn preorder(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if self.node(id).is_err() {
                continue;
            }
            out.push(id);
            stack.extend(self.children(id).iter().rev());
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Dom for Document {
    type Node = NodeId;

    fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.preorder(self.root)
            .into_iter()
            .filter(|&node| {
                self.tag_name(node)
                    .is_some_and(|name| name.eq_ignore_ascii_case(tag))
            })
            .collect()
    }

    fn new_element(&mut self, tag: &str) -> NodeId {
        self.create_element(tag)
    }

    fn new_text(&mut self, text: &str) -> NodeId {
        self.create_text(text)
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Err(err) = self.set_attr(*node, name, value) {
            warn!(%err, attribute = name, "ignoring attribute assignment");
        }
    }

    fn append_child(&mut self, parent: Option<&NodeId>, child: NodeId) -> NodeId {
        let Some(&parent) = parent else {
            return child;
        };
        if let Err(err) = self.try_append_child(parent, child) {
            warn!(%err, "ignoring rejected append");
        }
        child
    }
}
