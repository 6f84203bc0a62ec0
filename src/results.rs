//! # Results Writer
//!
//! Summarizes test failures as DOM elements that automation can query by id:
//!
//! - `failureCount`: a `div` whose text is the number of failed tests.
//! - `failures`: a `pre` whose text lists the failures, one per line.
//!
//! Both live in a fresh container `div` appended to the page body. Writing
//! twice appends a second container; earlier output is left in place.

use std::fmt::Display;

use tracing::debug;

use crate::dom::Dom;
use crate::layout::ResultsLayout;

/// Joins the failure messages into one display string, one per line.
pub fn results_as_string<E: Display>(errs: &[E]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// The first `body` element, or `None` when the page has none yet.
pub fn body<D: Dom>(dom: &D) -> Option<D::Node> {
    dom.elements_by_tag("body").into_iter().next()
}

/// Adds the `failureCount` and `failures` elements to the page body.
///
/// Never fails. Without a body the fragment is built detached and discarded.
pub fn write_results<D: Dom, E: Display>(dom: &mut D, errs: &[E]) {
    write_results_with(dom, errs, &ResultsLayout::default());
}

/// [`write_results`] with custom tag names and ids.
pub fn write_results_with<D: Dom, E: Display>(dom: &mut D, errs: &[E], layout: &ResultsLayout) {
    let body = body(dom);
    if body.is_none() {
        debug!("no body element; results fragment will be discarded");
    }
    debug!(failures = errs.len(), "writing test results");

    let container = dom.new_element(&layout.container_tag);
    let container = dom.append_child(body.as_ref(), container);

    let count = dom.new_element(&layout.count_tag);
    dom.set_attribute(&count, "id", &layout.count_id);
    let text = dom.new_text(&errs.len().to_string());
    dom.append_child(Some(&count), text);
    dom.append_child(Some(&container), count);

    let failures = dom.new_element(&layout.failures_tag);
    dom.set_attribute(&failures, "id", &layout.failures_id);
    let text = dom.new_text(&results_as_string(errs));
    dom.append_child(Some(&failures), text);
    dom.append_child(Some(&container), failures);
}
