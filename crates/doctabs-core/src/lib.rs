//! doctabs core
//!
//! Page-level glue around the tab selector: owns the document, attaches
//! handlers to tabs and dispatches click and keyboard events the way the
//! browser would (bubbling from the event target to the bound element).

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::{Page, SharedPage};

// Re-export the building blocks
pub use doctabs_dom::{Document, DomError, NodeId};
pub use doctabs_tabs::{
    Activation, ActivationEvent, Key, KeyEvent, Selection, TabError, TabMarkup, TabSelector,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
