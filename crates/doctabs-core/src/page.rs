//! Page state container
//!
//! Holds the document together with the listeners attached to it. Handlers
//! run synchronously inside `click` / `key_down`; nothing else mutates the
//! tree while they run.

use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

use doctabs_dom::{Document, DomError, NodeId};
use doctabs_tabs::{Activation, ActivationEvent, Key, KeyEvent, TabSelector};

use crate::config::Config;
use crate::error::CoreError;
use crate::Result;

pub struct Page {
    doc: Document,
    selector: TabSelector,
    config: Config,
    /// Elements with the activation handler attached
    click_listeners: HashSet<NodeId>,
    /// Tab lists with the keyboard handler attached
    key_listeners: HashSet<NodeId>,
}

impl Page {
    pub fn new(doc: Document, config: Config) -> Self {
        Self {
            doc,
            selector: TabSelector::new(config.markup.clone()),
            config,
            click_listeners: HashSet::new(),
            key_listeners: HashSet::new(),
        }
    }

    pub fn from_html(html: &str, config: Config) -> Self {
        Self::new(Document::parse_html(html), config)
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn selector(&self) -> &TabSelector {
        &self.selector
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attach the activation handler to one element
    pub fn bind(&mut self, node: NodeId) -> Result<()> {
        if !self.doc.is_element(node) {
            return Err(DomError::NotAnElement(node).into());
        }
        self.click_listeners.insert(node);
        Ok(())
    }

    /// Attach the keyboard handler to one tab list container
    pub fn bind_keys(&mut self, list: NodeId) -> Result<()> {
        if !self.doc.is_element(list) {
            return Err(DomError::NotAnElement(list).into());
        }
        self.key_listeners.insert(list);
        Ok(())
    }

    pub fn bind_by_id(&mut self, id: &str) -> Result<()> {
        let node = self.lookup(id)?;
        self.bind(node)
    }

    /// Attach handlers to every tab carrying the configured tab class.
    /// Returns the number of tabs bound.
    pub fn bind_all(&mut self) -> usize {
        let markup = self.selector.markup();
        let tabs: Vec<NodeId> = self
            .doc
            .elements()
            .filter(|&n| markup.is_bindable_tab(&self.doc, n))
            .collect();

        for &tab in &tabs {
            self.click_listeners.insert(tab);
            if self.config.bind_keyboard {
                if let Some(list) = self.doc.parent(tab).filter(|&l| self.doc.is_element(l)) {
                    self.key_listeners.insert(list);
                }
            }
        }

        tracing::info!(
            tabs = tabs.len(),
            lists = self.key_listeners.len(),
            "Bound tab handlers"
        );
        tabs.len()
    }

    pub fn is_bound(&self, node: NodeId) -> bool {
        self.click_listeners.contains(&node)
    }

    /// Dispatch a click originating at `target`.
    ///
    /// The event bubbles up from `target`; the handler runs for the first
    /// bound element on the way. Returns `None` when no handler was reached.
    pub fn click(&mut self, target: NodeId) -> Option<Activation> {
        let current = self.bubble_to(target, &self.click_listeners)?;

        let mut event = ActivationEvent::new(target);
        let outcome = self.selector.handle_activation(&mut self.doc, &mut event);
        tracing::debug!(
            target_node = %target,
            current_target = %current,
            default_prevented = event.default_prevented(),
            "Dispatched click"
        );
        Some(outcome)
    }

    pub fn click_by_id(&mut self, id: &str) -> Result<Option<Activation>> {
        let node = self.lookup(id)?;
        Ok(self.click(node))
    }

    /// Dispatch a keydown originating at `target`. Returns the newly
    /// focused tab, if focus moved.
    pub fn key_down(&mut self, target: NodeId, key: Key) -> Option<NodeId> {
        self.bubble_to(target, &self.key_listeners)?;

        let mut event = KeyEvent::new(target, key);
        self.selector.handle_key(&mut self.doc, &mut event)
    }

    pub fn key_down_by_id(&mut self, id: &str, key: Key) -> Result<Option<NodeId>> {
        let node = self.lookup(id)?;
        Ok(self.key_down(node, key))
    }

    /// Panel controlled by the tab with the given id
    pub fn panel_for(&self, tab_id: &str) -> Result<NodeId> {
        let tab = self.lookup(tab_id)?;
        Ok(self.selector.panel_of(&self.doc, tab)?)
    }

    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }

    fn lookup(&self, id: &str) -> Result<NodeId> {
        self.doc
            .element_by_id(id)
            .ok_or_else(|| CoreError::ElementNotFound(id.to_string()))
    }

    fn bubble_to(&self, target: NodeId, listeners: &HashSet<NodeId>) -> Option<NodeId> {
        self.doc.closest(target, |_, n| listeners.contains(&n))
    }
}

/// Cloneable handle for glue code that shares one page between listeners
#[derive(Clone)]
pub struct SharedPage {
    inner: Arc<RwLock<Page>>,
}

impl SharedPage {
    pub fn new(page: Page) -> Self {
        Self {
            inner: Arc::new(RwLock::new(page)),
        }
    }

    pub fn click_by_id(&self, id: &str) -> Result<Option<Activation>> {
        self.inner.write().click_by_id(id)
    }

    pub fn key_down_by_id(&self, id: &str, key: Key) -> Result<Option<NodeId>> {
        self.inner.write().key_down_by_id(id, key)
    }

    pub fn with_page<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Page) -> T,
    {
        f(&self.inner.read())
    }

    pub fn with_page_mut<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut Page) -> T,
    {
        f(&mut self.inner.write())
    }
}
