//! Document tree error types

use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node is not an element: {0}")]
    NotAnElement(NodeId),

    #[error("Cannot append {child} to {parent}")]
    InvalidAppend { parent: NodeId, child: NodeId },
}
