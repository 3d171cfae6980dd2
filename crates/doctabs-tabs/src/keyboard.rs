//! Roving focus inside a tab list
//!
//! Left/right arrows move focus between the tabs of one list and wrap at
//! both ends. Only the focused tab keeps `tabindex="0"`. Selection does not
//! follow focus; a tab is still activated by a click.

use doctabs_dom::{Document, NodeId};

use crate::event::{Key, KeyEvent};
use crate::markup::TABINDEX;
use crate::selector::TabSelector;

impl TabSelector {
    /// Keydown handler for tab lists. Returns the tab that received focus.
    pub fn handle_key(&self, doc: &mut Document, event: &mut KeyEvent) -> Option<NodeId> {
        let step: isize = match event.key {
            Key::ArrowRight => 1,
            Key::ArrowLeft => -1,
            Key::Other => return None,
        };

        let tab = self.resolve_tab(doc, event.target)?;
        let group = self.group_of(doc, tab);
        let pos = group.iter().position(|&t| t == tab)?;
        let len = group.len() as isize;
        let next = group[(pos as isize + step).rem_euclid(len) as usize];

        event.prevent_default();

        if let Err(e) = doc.set_attr(tab, TABINDEX, "-1") {
            tracing::debug!(tab = %tab, error = %e, "Skipped tabindex update");
        }
        if let Err(e) = doc.set_attr(next, TABINDEX, "0") {
            tracing::debug!(tab = %next, error = %e, "Skipped tabindex update");
        }
        if let Err(e) = doc.set_focus(next) {
            tracing::debug!(tab = %next, error = %e, "Could not focus tab");
            return None;
        }

        tracing::trace!(from = %tab, to = %next, key = %event.key, "Moved tab focus");
        Some(next)
    }
}
