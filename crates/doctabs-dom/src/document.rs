//! Document arena
//!
//! Owns every node of a page. Lookups return `Option`; mutations on a
//! missing or non-element node return `DomError` so callers can decide
//! whether to skip or propagate.

use crate::error::DomError;
use crate::node::{ElementData, Node, NodeData, NodeId};
use crate::Result;

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    focused: Option<NodeId>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            focused: None,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        self.nodes
            .get_mut(id.index())
            .ok_or(DomError::NodeNotFound(id))
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.node(id).and_then(Node::as_element)
    }

    fn element_mut(&mut self, id: NodeId) -> Result<&mut ElementData> {
        self.node_mut(id)?
            .as_element_mut()
            .ok_or(DomError::NotAnElement(id))
    }

    pub fn is_element(&self, id: NodeId) -> bool {
        self.element(id).is_some()
    }

    // Construction

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(NodeData::Element(ElementData::new(tag)))
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push(NodeData::Text(text.to_string()))
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(data));
        id
    }

    /// Append a detached node as the last child of `parent`
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child || child == NodeId::ROOT {
            return Err(DomError::InvalidAppend { parent, child });
        }
        match self.node(parent) {
            None => return Err(DomError::NodeNotFound(parent)),
            Some(node) if matches!(node.data, NodeData::Text(_)) => {
                return Err(DomError::InvalidAppend { parent, child });
            }
            Some(_) => {}
        }
        let child_node = self.node(child).ok_or(DomError::NodeNotFound(child))?;
        let has_subtree = !child_node.children.is_empty();
        if child_node.parent.is_some()
            || (has_subtree && self.ancestors(parent).any(|a| a == child))
        {
            return Err(DomError::InvalidAppend { parent, child });
        }

        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    // Attributes

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.tag.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Returns true when the stored value changed
    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<bool> {
        let changed = self.element_mut(id)?.set_attr(name, value);
        if changed {
            tracing::trace!(node = %id, attr = name, value, "Attribute set");
        }
        Ok(changed)
    }

    /// Returns true when an attribute was removed
    pub fn remove_attr(&mut self, id: NodeId, name: &str) -> Result<bool> {
        let removed = self.element_mut(id)?.remove_attr(name);
        if removed {
            tracing::trace!(node = %id, attr = name, "Attribute removed");
        }
        Ok(removed)
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).map(|el| el.has_class(class)).unwrap_or(false)
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .filter_map(|n| match &self.node(n)?.data {
                NodeData::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    // Navigation

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(Node::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(Node::children).unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(move |&child| self.is_element(child))
    }

    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.element_children(id).next()
    }

    pub fn last_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.element_children(id).last()
    }

    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let pos = siblings.iter().position(|&s| s == id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|&s| self.is_element(s))
    }

    pub fn previous_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let siblings = self.children(self.parent(id)?);
        let pos = siblings.iter().position(|&s| s == id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|&s| self.is_element(s))
    }

    /// Strict ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&n| self.parent(n))
    }

    /// Nearest inclusive ancestor element matching `predicate`
    pub fn closest<P>(&self, id: NodeId, mut predicate: P) -> Option<NodeId>
    where
        P: FnMut(&Document, NodeId) -> bool,
    {
        self.node(id)?;
        std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&n| self.is_element(n) && predicate(self, n))
    }

    /// Inclusive pre-order traversal in document order
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = if self.node(id).is_some() { vec![id] } else { Vec::new() };
        Descendants { doc: self, stack }
    }

    /// Every element of the document in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.descendants(NodeId::ROOT)
            .filter(move |&n| self.is_element(n))
    }

    pub fn elements_with_attr<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = NodeId> + 'a {
        self.elements().filter(move |&n| self.has_attr(n, name))
    }

    /// First element in document order whose `id` attribute equals `id`
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.elements().find(|&n| self.attr(n, "id") == Some(id))
    }

    // Focus

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_focus(&mut self, id: NodeId) -> Result<()> {
        if !self.is_element(id) {
            return Err(match self.node(id) {
                None => DomError::NodeNotFound(id),
                Some(_) => DomError::NotAnElement(id),
            });
        }
        self.focused = Some(id);
        Ok(())
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
