//! HTML fragment import
//!
//! Markup is parsed with `scraper` (html5ever underneath), so malformed
//! attributes or unclosed tags are recovered the way a browser would.
//! The parsed tree is then copied into the arena.

use scraper::{ElementRef, Html};

use crate::document::Document;
use crate::node::NodeId;

impl Document {
    /// Build a document from an HTML body fragment
    pub fn parse_html(html: &str) -> Self {
        let fragment = Html::parse_fragment(html);
        let mut doc = Document::new();

        for error in &fragment.errors {
            tracing::trace!(%error, "Recovered from malformed markup");
        }

        // html5ever wraps fragments in a synthetic <html> element
        import_children(&mut doc, NodeId::ROOT, fragment.root_element());

        tracing::debug!(nodes = doc.len(), "Parsed HTML fragment");
        doc
    }
}

/// Copy the children of `source` under `parent`, walking the subtree with an
/// explicit stack so nesting depth is bounded by the heap, not the call stack.
fn import_children(doc: &mut Document, parent: NodeId, source: ElementRef<'_>) {
    let mut pending = vec![(parent, source)];

    while let Some((parent, source)) = pending.pop() {
        for child in source.children() {
            let id = match child.value() {
                scraper::Node::Text(text) => doc.create_text(text),
                scraper::Node::Element(_) => {
                    let Some(el) = ElementRef::wrap(child) else {
                        continue;
                    };
                    let id = doc.create_element(el.value().name());
                    for (name, value) in el.value().attrs() {
                        // the element is freshly created, this cannot fail
                        let _ = doc.set_attr(id, name, value);
                    }
                    pending.push((id, el));
                    id
                }
                _ => continue,
            };

            if let Err(e) = doc.append_child(parent, id) {
                tracing::warn!(error = %e, "Dropped node while importing markup");
            }
        }
    }
}
