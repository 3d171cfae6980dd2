//! doctabs tab selection
//!
//! Keeps `aria-selected` on tabs and `hidden` on panels consistent:
//! - one selected tab per tab list (zero or one for closeable lists)
//! - selected tab ⟺ visible panel
//! - activating a named tab mirrors the selection in other tab lists
//!
//! All operations take the `Document` explicitly. Malformed markup is never
//! an error for callers; the affected element is skipped and logged.

mod error;
mod event;
mod keyboard;
mod markup;
mod selection;
mod selector;

pub use error::TabError;
pub use event::{ActivationEvent, Key, KeyEvent};
pub use markup::TabMarkup;
pub use selection::Selection;
pub use selector::{Activation, TabSelector};

pub type Result<T> = std::result::Result<T, TabError>;
