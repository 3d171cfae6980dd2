//! Markup contract
//!
//! Attribute names are fixed by ARIA; the class names are whatever the page
//! generator emits and can be configured.

use serde::{Deserialize, Serialize};

use doctabs_dom::{Document, NodeId};

pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_SELECTED: &str = "aria-selected";
pub const HIDDEN: &str = "hidden";
pub const NAME: &str = "name";
pub const ID: &str = "id";
pub const TABINDEX: &str = "tabindex";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabMarkup {
    /// Class carried by every tab control. Only used to find tabs to bind;
    /// an empty class binds every element that looks like a tab.
    pub tab_class: String,
    /// Class on a tab list container that allows collapsing the selection
    pub closeable_class: String,
}

impl TabMarkup {
    /// An element is a tab when it names a panel and carries a selection flag
    pub fn is_tab(&self, doc: &Document, node: NodeId) -> bool {
        doc.has_attr(node, ARIA_CONTROLS) && doc.has_attr(node, ARIA_SELECTED)
    }

    /// Tabs the page glue should attach listeners to
    pub fn is_bindable_tab(&self, doc: &Document, node: NodeId) -> bool {
        self.is_tab(doc, node) && (self.tab_class.is_empty() || doc.has_class(node, &self.tab_class))
    }

    pub fn is_closeable(&self, doc: &Document, list: NodeId) -> bool {
        !self.closeable_class.is_empty() && doc.has_class(list, &self.closeable_class)
    }
}

impl Default for TabMarkup {
    fn default() -> Self {
        Self {
            tab_class: "sphinx-tabs-tab".to_string(),
            closeable_class: "closeable".to_string(),
        }
    }
}
