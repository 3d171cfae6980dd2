//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Document error: {0}")]
    Dom(#[from] doctabs_dom::DomError),

    #[error("Tab error: {0}")]
    Tab(#[from] doctabs_tabs::TabError),

    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
