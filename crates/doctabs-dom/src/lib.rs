//! doctabs document tree
//!
//! A small arena-backed DOM used as the explicit context for tab selection.
//! Nodes are addressed by compact `NodeId` indices; the page is never
//! captured globally, every operation receives the `Document` it works on.

mod document;
mod error;
mod node;
mod parse;
mod serialize;

pub use document::{Descendants, Document};
pub use error::DomError;
pub use node::{ElementData, Node, NodeData, NodeId};

pub type Result<T> = std::result::Result<T, DomError>;
