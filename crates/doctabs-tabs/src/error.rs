//! Tab error types

use thiserror::Error;

use doctabs_dom::{DomError, NodeId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    #[error("Not a tab: {0}")]
    NotATab(NodeId),

    #[error("Tab {0} has no aria-controls")]
    MissingControls(NodeId),

    #[error("Panel not found for tab {tab}: {panel}")]
    PanelNotFound { tab: NodeId, panel: String },

    #[error("Document error: {0}")]
    Dom(#[from] DomError),
}
