//! HTML serializer
//!
//! Deterministic output used for diagnostics and state snapshots in tests.
//! Attributes are written in stored order, which for parsed markup is
//! source order.

use crate::document::Document;
use crate::node::{NodeData, NodeId};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

enum Step {
    Open(NodeId),
    Close(NodeId),
}

impl Document {
    /// Serialize the whole document body
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_subtree(NodeId::ROOT, &mut out);
        out
    }

    /// Serialize a single node and its subtree
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_subtree(id, &mut out);
        out
    }

    fn write_subtree(&self, id: NodeId, out: &mut String) {
        let mut steps = vec![Step::Open(id)];

        while let Some(step) = steps.pop() {
            let (id, open) = match step {
                Step::Open(id) => (id, true),
                Step::Close(id) => (id, false),
            };
            let Some(node) = self.node(id) else {
                continue;
            };

            match &node.data {
                NodeData::Document => {}
                NodeData::Text(text) => {
                    out.push_str(&escape_text(text));
                    continue;
                }
                NodeData::Element(el) if !open => {
                    out.push_str("</");
                    out.push_str(&el.tag);
                    out.push('>');
                    continue;
                }
                NodeData::Element(el) => {
                    out.push('<');
                    out.push_str(&el.tag);
                    for (name, value) in &el.attrs {
                        out.push(' ');
                        out.push_str(name);
                        out.push_str("=\"");
                        out.push_str(&escape_attr(value));
                        out.push('"');
                    }
                    out.push('>');

                    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
                        continue;
                    }
                    steps.push(Step::Close(id));
                }
            }

            steps.extend(node.children().iter().rev().map(|&child| Step::Open(child)));
        }
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
