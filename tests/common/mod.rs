//! Shared helpers for the results-writer integration tests.

#![allow(dead_code)]

use e2e_results::{Document, Dom, NodeId};

/// Text of the first element with the given id, panicking if it is missing.
pub fn text_by_id(doc: &Document, id: &str) -> String {
    let node = doc
        .element_by_id(id)
        .unwrap_or_else(|| panic!("no element with id {id:?}"));
    doc.text_content(node)
}

/// The result containers written so far, oldest first.
pub fn containers(doc: &Document) -> Vec<NodeId> {
    let body = doc.body().expect("document has a body");
    doc.children(body).to_vec()
}

/// One recorded call against [`RecordingDom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    NewElement(String),
    NewText(String),
    SetAttribute(usize, String, String),
    AppendChild(Option<usize>, usize),
}

/// A `Dom` that only records calls, for checking construction order.
#[derive(Debug, Default)]
pub struct RecordingDom {
    pub calls: Vec<Call>,
    pub has_body: bool,
    next: usize,
}

impl RecordingDom {
    pub fn with_body() -> Self {
        Self {
            has_body: true,
            // Handle 0 is reserved for the body.
            next: 1,
            ..Self::default()
        }
    }

    fn handle(&mut self) -> usize {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Dom for RecordingDom {
    type Node = usize;

    fn elements_by_tag(&self, tag: &str) -> Vec<usize> {
        // Queries take `&self`; the writer's lookup is checked via the
        // first append's parent instead.
        if self.has_body && tag == "body" {
            vec![0]
        } else {
            Vec::new()
        }
    }

    fn new_element(&mut self, tag: &str) -> usize {
        self.calls.push(Call::NewElement(tag.to_string()));
        self.handle()
    }

    fn new_text(&mut self, text: &str) -> usize {
        self.calls.push(Call::NewText(text.to_string()));
        self.handle()
    }

    fn set_attribute(&mut self, node: &usize, name: &str, value: &str) {
        self.calls
            .push(Call::SetAttribute(*node, name.to_string(), value.to_string()));
    }

    fn append_child(&mut self, parent: Option<&usize>, child: usize) -> usize {
        self.calls.push(Call::AppendChild(parent.copied(), child));
        child
    }
}
