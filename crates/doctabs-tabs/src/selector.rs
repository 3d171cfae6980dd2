//! Tab selection state machine
//!
//! Activation of a tab `T` in list `L`:
//! ```text
//! T selected && L closeable  ──►  deselect L            (Collapsed)
//! otherwise                  ──►  deselect L, select T  (Selected)
//!                                   └─ T named: mirror in other lists
//! ```

use doctabs_dom::{Document, NodeId};

use crate::error::TabError;
use crate::event::ActivationEvent;
use crate::markup::{TabMarkup, ARIA_CONTROLS, ARIA_SELECTED, HIDDEN, ID, NAME};
use crate::selection::Selection;
use crate::Result;

/// Outcome of a tab activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The tab is now the selected tab of its list
    Selected {
        tab: NodeId,
        /// Number of other tab lists that mirrored the selection by name
        mirrored: usize,
    },
    /// The tab was already selected in a closeable list; nothing is selected now
    Collapsed { tab: NodeId },
    /// The event did not originate inside a tab
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct TabSelector {
    markup: TabMarkup,
}

impl TabSelector {
    pub fn new(markup: TabMarkup) -> Self {
        Self { markup }
    }

    pub fn markup(&self) -> &TabMarkup {
        &self.markup
    }

    /// Click handler for tabs. The event target may be any element nested
    /// inside a tab; the owning tab is resolved by walking up the tree.
    pub fn handle_activation(&self, doc: &mut Document, event: &mut ActivationEvent) -> Activation {
        event.prevent_default();

        let Some(tab) = self.resolve_tab(doc, event.target) else {
            tracing::debug!(target_node = %event.target, "Activation outside of any tab");
            return Activation::Ignored;
        };
        self.activate(doc, tab)
    }

    /// Run the full activation algorithm on a resolved tab
    pub fn activate(&self, doc: &mut Document, tab: NodeId) -> Activation {
        if !self.markup.is_tab(doc, tab) {
            tracing::debug!(error = %TabError::NotATab(tab), "Skipping activation");
            return Activation::Ignored;
        }

        let was_selected = self.selection(doc, tab).is_selected();
        let closeable = doc
            .parent(tab)
            .map(|list| self.markup.is_closeable(doc, list))
            .unwrap_or(false);

        self.deselect_group(doc, tab);

        if was_selected && closeable {
            tracing::debug!(tab = %tab, "Collapsed closeable tab list");
            return Activation::Collapsed { tab };
        }

        self.select_tab(doc, tab);

        let name = doc
            .attr(tab, NAME)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let mirrored = match name {
            Some(name) => {
                let tab_id = doc.attr(tab, ID).map(str::to_string);
                let own_list = doc.parent(tab);
                self.mirror_named(doc, &name, tab_id.as_deref(), own_list)
            }
            None => 0,
        };

        tracing::debug!(tab = %tab, mirrored, "Selected tab");
        Activation::Selected { tab, mirrored }
    }

    /// Nearest inclusive ancestor of `node` that is a tab
    pub fn resolve_tab(&self, doc: &Document, node: NodeId) -> Option<NodeId> {
        doc.closest(node, |d, n| self.markup.is_tab(d, n))
    }

    pub fn selection(&self, doc: &Document, tab: NodeId) -> Selection {
        Selection::from_attr(doc.attr(tab, ARIA_SELECTED))
    }

    /// Tabs sharing a list with `tab`, in document order
    pub fn group_of(&self, doc: &Document, tab: NodeId) -> Vec<NodeId> {
        match doc.parent(tab) {
            Some(list) => self.tabs_in(doc, list),
            None => Vec::new(),
        }
    }

    fn tabs_in(&self, doc: &Document, list: NodeId) -> Vec<NodeId> {
        doc.element_children(list)
            .filter(|&n| self.markup.is_tab(doc, n))
            .collect()
    }

    /// Every tab list container on the page, ordered by its first tab
    pub fn tab_lists(&self, doc: &Document) -> Vec<NodeId> {
        let mut lists: Vec<NodeId> = Vec::new();
        for tab in doc
            .elements_with_attr(ARIA_CONTROLS)
            .filter(|&n| self.markup.is_tab(doc, n))
        {
            if let Some(list) = doc.parent(tab) {
                if !lists.contains(&list) {
                    lists.push(list);
                }
            }
        }
        lists
    }

    /// Deselect every tab of the list containing `any_tab` and hide their panels
    pub fn deselect_group(&self, doc: &mut Document, any_tab: NodeId) {
        for tab in self.group_of(doc, any_tab) {
            if let Err(e) = self.apply(doc, tab, Selection::NotSelected) {
                tracing::debug!(tab = %tab, error = %e, "Skipped deselecting tab");
            }
        }
    }

    /// Select `tab` and show its panel. Siblings are left alone.
    pub fn select_tab(&self, doc: &mut Document, tab: NodeId) {
        if let Err(e) = self.apply(doc, tab, Selection::Selected) {
            tracing::debug!(tab = %tab, error = %e, "Skipped selecting tab");
        }
    }

    /// In every other tab list select the first tab named `name`.
    ///
    /// The list holding the tab whose id is `exclude_id` is skipped, as is
    /// any tab carrying that id. Lists without a match are untouched.
    pub fn select_named_tabs(&self, doc: &mut Document, name: &str, exclude_id: Option<&str>) -> usize {
        let excluded_list = exclude_id
            .and_then(|id| doc.element_by_id(id))
            .filter(|&n| self.markup.is_tab(doc, n))
            .and_then(|n| doc.parent(n));
        self.mirror_named(doc, name, exclude_id, excluded_list)
    }

    fn mirror_named(
        &self,
        doc: &mut Document,
        name: &str,
        exclude_id: Option<&str>,
        excluded_list: Option<NodeId>,
    ) -> usize {
        let mut mirrored = 0;

        for list in self.tab_lists(doc) {
            if Some(list) == excluded_list {
                continue;
            }

            let matched = self.tabs_in(doc, list).into_iter().find(|&t| {
                doc.attr(t, NAME) == Some(name)
                    && (exclude_id.is_none() || doc.attr(t, ID) != exclude_id)
            });

            if let Some(tab) = matched {
                self.deselect_group(doc, tab);
                self.select_tab(doc, tab);
                mirrored += 1;
                tracing::trace!(tab = %tab, name, "Mirrored named tab");
            }
        }

        mirrored
    }

    /// Panel controlled by `tab`
    pub fn panel_of(&self, doc: &Document, tab: NodeId) -> Result<NodeId> {
        let panel_id = doc
            .attr(tab, ARIA_CONTROLS)
            .filter(|id| !id.is_empty())
            .ok_or(TabError::MissingControls(tab))?;

        doc.element_by_id(panel_id)
            .ok_or_else(|| TabError::PanelNotFound {
                tab,
                panel: panel_id.to_string(),
            })
    }

    /// Write the selection flag on `tab` and the matching visibility on its panel
    fn apply(&self, doc: &mut Document, tab: NodeId, selection: Selection) -> Result<()> {
        doc.set_attr(tab, ARIA_SELECTED, selection.as_str())?;

        let panel = self.panel_of(doc, tab)?;
        match selection {
            Selection::Selected => {
                doc.remove_attr(panel, HIDDEN)?;
            }
            Selection::NotSelected if !doc.has_attr(panel, HIDDEN) => {
                doc.set_attr(panel, HIDDEN, "true")?;
            }
            Selection::NotSelected => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_TABS: &str = r#"<div>
  <div>
    <button id="tab-1" aria-controls="panel-1" aria-selected="true">Test tab 1</button>
    <button id="tab-2" aria-controls="panel-2" aria-selected="false"><strong id=bold>Test tab 2</strong></button>
  </div>
  <div id="panel-1">Test panel 1</div>
  <div id="panel-2" hidden="true">Test panel 2</div>
</div>"#;

    fn by_id(doc: &Document, id: &str) -> NodeId {
        doc.element_by_id(id).unwrap()
    }

    fn selected(doc: &Document, id: &str) -> Option<String> {
        doc.attr(by_id(doc, id), ARIA_SELECTED).map(str::to_string)
    }

    fn hidden(doc: &Document, id: &str) -> Option<String> {
        doc.attr(by_id(doc, id), HIDDEN).map(str::to_string)
    }

    fn click(selector: &TabSelector, doc: &mut Document, id: &str) -> Activation {
        let mut event = ActivationEvent::new(by_id(doc, id));
        let outcome = selector.handle_activation(doc, &mut event);
        assert!(event.default_prevented());
        outcome
    }

    fn two_named_groups(second_group: &str) -> Document {
        Document::parse_html(&format!(
            r#"<div>
  <div>
    <button class="sphinx-tabs-tab" aria-controls="panel-1-1" aria-selected="true">Test tab 1</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-1-2" aria-selected="false" name="sharedName" id="clicked">Test tab 2</button>
  </div>
  <div id="panel-1-1">Test panel 1</div>
  <div id="panel-1-2" hidden="true"">Test panel 2</div>
</div>
{second_group}"#
        ))
    }

    #[test]
    fn test_switch_and_switch_back() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(TWO_TABS);

        click(&selector, &mut doc, "tab-2");
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "tab-2").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-2"), None);

        click(&selector, &mut doc, "tab-1");
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1"), None);
        assert_eq!(selected(&doc, "tab-2").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-2").as_deref(), Some("true"));
    }

    #[test]
    fn test_nested_click_resolves_owning_tab() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(TWO_TABS);

        let outcome = click(&selector, &mut doc, "bold");
        assert_eq!(
            outcome,
            Activation::Selected {
                tab: by_id(&doc, "tab-2"),
                mirrored: 0
            }
        );
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("false"));
        assert_eq!(selected(&doc, "tab-2").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-2"), None);
        assert_eq!(hidden(&doc, "bold"), None);
    }

    #[test]
    fn test_reclick_in_plain_list_keeps_state() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(TWO_TABS);
        let before = doc.to_html();

        click(&selector, &mut doc, "tab-1");
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_closeable_list_toggles() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div>
  <div class="closeable">
    <button id="tab-1" aria-controls="panel-1" aria-selected="true">Test tab 1</button>
  </div>
  <div id="panel-1">Test panel 1</div>
</div>"#,
        );

        let outcome = click(&selector, &mut doc, "tab-1");
        assert_eq!(outcome, Activation::Collapsed { tab: by_id(&doc, "tab-1") });
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-1").as_deref(), Some("true"));

        click(&selector, &mut doc, "tab-1");
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1"), None);
    }

    #[test]
    fn test_plain_list_single_tab_does_not_close() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div>
  <div>
    <button id="tab-1" aria-controls="panel-1" aria-selected="true">Test tab 1</button>
  </div>
  <div id="panel-1">Test panel 1</div>
</div>"#,
        );

        click(&selector, &mut doc, "tab-1");
        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1"), None);
    }

    #[test]
    fn test_exactly_one_selected_after_every_click() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div>
  <div>
    <button id="t1" aria-controls="p1" aria-selected="true">1</button>
    <button id="t2" aria-controls="p2" aria-selected="false">2</button>
    <button id="t3" aria-controls="p3" aria-selected="false">3</button>
  </div>
  <div id="p1">1</div><div id="p2" hidden>2</div><div id="p3" hidden>3</div>
</div>"#,
        );

        for id in ["t3", "t1", "t2", "t2", "t3"] {
            click(&selector, &mut doc, id);
            let tab = by_id(&doc, id);
            let group = selector.group_of(&doc, tab);
            let chosen: Vec<_> = group
                .iter()
                .filter(|&&t| selector.selection(&doc, t).is_selected())
                .collect();
            assert_eq!(chosen, vec![&tab]);

            for &t in &group {
                let panel = selector.panel_of(&doc, t).unwrap();
                assert_eq!(doc.has_attr(panel, HIDDEN), t != tab);
            }
        }
    }

    #[test]
    fn test_select_named_tabs_skips_clicked() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-1" aria-selected="true">Test tab 1</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-2" aria-selected="false" name="sharedName" id="notClicked">Test tab 2</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
</div>"#,
        );

        let mirrored = selector.select_named_tabs(&mut doc, "sharedName", Some("clicked"));
        assert_eq!(mirrored, 1);

        assert_eq!(selected(&doc, "clicked").as_deref(), Some("false"));
        assert_eq!(selected(&doc, "notClicked").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1-2").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-2-2"), None);
        assert_eq!(hidden(&doc, "panel-2-1").as_deref(), Some("true"));
    }

    #[test]
    fn test_select_named_tabs_first_match_only() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-1" aria-selected="true">Test tab 1</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-2" aria-selected="false" name="sharedName" id="notClicked1">Test tab 2</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-3" aria-selected="false" name="sharedName" id="notClicked2">Test tab 3</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
  <div id="panel-2-3" hidden="true">Test panel 3</div>
</div>"#,
        );

        selector.select_named_tabs(&mut doc, "sharedName", Some("clicked"));

        assert_eq!(selected(&doc, "clicked").as_deref(), Some("false"));
        assert_eq!(selected(&doc, "notClicked1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "notClicked2").as_deref(), Some("false"));
    }

    #[test]
    fn test_select_named_tabs_leaves_unrelated_lists() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-1" aria-selected="true" id="tab-2-1" >Test tab 1</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-2" aria-selected="false" name="aName" id="tab-2-2">Test tab 2</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
</div>"#,
        );
        let before = doc.to_html();

        let mirrored = selector.select_named_tabs(&mut doc, "sharedName", Some("clicked"));
        assert_eq!(mirrored, 0);
        assert_eq!(doc.to_html(), before);
        assert_eq!(selected(&doc, "tab-2-1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "tab-2-2").as_deref(), Some("false"));
    }

    #[test]
    fn test_click_propagates_by_name() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-1" aria-selected="true">Test tab 1</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-2" aria-selected="false" name="sharedName" id="notClicked1">Test tab 2</button>
    <button class="sphinx-tabs-tab" aria-controls="panel-2-3" aria-selected="false" name="sharedName" id="notClicked2">Test tab 3</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
  <div id="panel-2-3" hidden="true">Test panel 3</div>
</div>"#,
        );

        let outcome = click(&selector, &mut doc, "clicked");
        assert_eq!(
            outcome,
            Activation::Selected {
                tab: by_id(&doc, "clicked"),
                mirrored: 1
            }
        );
        assert_eq!(selected(&doc, "clicked").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1-1").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1-2"), None);
        assert_eq!(selected(&doc, "notClicked1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "notClicked2").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-2-2"), None);
    }

    #[test]
    fn test_named_tab_without_id_keeps_own_list() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div>
  <div>
    <button aria-controls="p1" aria-selected="false" name="os"><i id="first">Linux</i></button>
    <button aria-controls="p2" aria-selected="false" name="os" id="second">Linux again</button>
  </div>
  <div id="p1" hidden>1</div><div id="p2" hidden>2</div>
</div>"#,
        );

        click(&selector, &mut doc, "first");
        assert_eq!(selected(&doc, "second").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "p1"), None);
        assert!(hidden(&doc, "p2").is_some());
    }

    #[test]
    fn test_collapse_does_not_propagate() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div class="closeable">
  <button id="a" aria-controls="pa" aria-selected="true" name="os">A</button>
</div>
<div id="pa">A</div>
<div>
  <button id="b1" aria-controls="pb1" aria-selected="true">B1</button>
  <button id="b2" aria-controls="pb2" aria-selected="false" name="os">B2</button>
</div>
<div id="pb1">B1</div><div id="pb2" hidden>B2</div>"#,
        );

        click(&selector, &mut doc, "a");
        assert_eq!(selected(&doc, "a").as_deref(), Some("false"));
        assert_eq!(selected(&doc, "b1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "b2").as_deref(), Some("false"));
    }

    #[test]
    fn test_primitives_do_not_propagate() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button aria-controls="panel-2-1" aria-selected="true" id="other-1">Test tab 1</button>
    <button aria-controls="panel-2-2" aria-selected="false" name="sharedName" id="other-2">Test tab 2</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
</div>"#,
        );
        let clicked = by_id(&doc, "clicked");

        selector.deselect_group(&mut doc, clicked);
        selector.select_tab(&mut doc, clicked);

        assert_eq!(selected(&doc, "clicked").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "other-1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "other-2").as_deref(), Some("false"));
    }

    #[test]
    fn test_deselect_group_is_idempotent() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(TWO_TABS);
        let tab = by_id(&doc, "tab-2");

        selector.deselect_group(&mut doc, tab);
        let once = doc.to_html();
        selector.deselect_group(&mut doc, tab);
        assert_eq!(doc.to_html(), once);

        assert_eq!(selected(&doc, "tab-1").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-1").as_deref(), Some("true"));
    }

    #[test]
    fn test_dangling_controls_is_silent() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(
            r#"<div>
  <button id="t1" aria-controls="p1" aria-selected="true">1</button>
  <button id="t2" aria-controls="missing" aria-selected="false">2</button>
</div>
<div id="p1">1</div>"#,
        );
        let t2 = by_id(&doc, "t2");

        assert_eq!(
            selector.panel_of(&doc, t2),
            Err(TabError::PanelNotFound {
                tab: t2,
                panel: "missing".to_string()
            })
        );

        click(&selector, &mut doc, "t2");
        assert_eq!(selected(&doc, "t1").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "p1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "t2").as_deref(), Some("true"));
    }

    #[test]
    fn test_click_outside_tabs_is_ignored() {
        let selector = TabSelector::default();
        let mut doc = Document::parse_html(TWO_TABS);
        let before = doc.to_html();

        let outcome = click(&selector, &mut doc, "panel-1");
        assert_eq!(outcome, Activation::Ignored);
        assert_eq!(doc.to_html(), before);
    }

    #[test]
    fn test_select_named_tabs_without_exclusion() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div>
    <button aria-controls="panel-2-1" aria-selected="true" id="other-1">Test tab 1</button>
    <button aria-controls="panel-2-2" aria-selected="false" name="sharedName" id="other-2">Test tab 2</button>
  </div>
  <div id="panel-2-1">Test panel 1</div>
  <div id="panel-2-2" hidden="true">Test panel 2</div>
</div>"#,
        );

        let mirrored = selector.select_named_tabs(&mut doc, "sharedName", None);
        assert_eq!(mirrored, 2);

        assert_eq!(selected(&doc, "clicked").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-1-2"), None);
        assert_eq!(hidden(&doc, "panel-1-1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "other-2").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "other-1").as_deref(), Some("false"));
        assert_eq!(hidden(&doc, "panel-2-2"), None);
    }

    #[test]
    fn test_propagation_into_closeable_list() {
        let selector = TabSelector::default();
        let mut doc = two_named_groups(
            r#"<div>
  <div class="closeable">
    <button aria-controls="panel-2-1" aria-selected="false" name="sharedName" id="remote">Test tab 1</button>
  </div>
  <div id="panel-2-1" hidden="true">Test panel 1</div>
</div>"#,
        );

        click(&selector, &mut doc, "clicked");
        assert_eq!(selected(&doc, "remote").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-2-1"), None);

        // mirroring always selects, even when the remote tab is already selected
        click(&selector, &mut doc, "clicked");
        assert_eq!(selected(&doc, "remote").as_deref(), Some("true"));
        assert_eq!(hidden(&doc, "panel-2-1"), None);

        // the closeable list still collapses on its own click
        let outcome = click(&selector, &mut doc, "remote");
        assert_eq!(outcome, Activation::Collapsed { tab: by_id(&doc, "remote") });
        assert_eq!(hidden(&doc, "panel-2-1").as_deref(), Some("true"));
        assert_eq!(selected(&doc, "clicked").as_deref(), Some("true"));
    }

    #[test]
    fn test_tab_lists_in_document_order() {
        let selector = TabSelector::default();
        let doc = two_named_groups(
            r#"<div><div id="second-list">
  <button aria-controls="x" aria-selected="false">x</button>
</div></div>"#,
        );

        let lists = selector.tab_lists(&doc);
        assert_eq!(lists.len(), 2);
        assert_eq!(doc.parent(by_id(&doc, "clicked")), Some(lists[0]));
        assert_eq!(lists[1], by_id(&doc, "second-list"));
    }
}
