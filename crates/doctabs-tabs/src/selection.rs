//! Tab selection flag
//!
//! The markup stores selection as the strings `"true"` / `"false"`; inside
//! the crate it is a two-state enum and only converted at the tree boundary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Selected,
    NotSelected,
}

impl Selection {
    /// Read an `aria-selected` value. Anything but `"true"` is not selected.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            Some("true") => Selection::Selected,
            _ => Selection::NotSelected,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected)
    }

    /// Attribute value written to the markup
    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::Selected => "true",
            Selection::NotSelected => "false",
        }
    }
}

impl From<bool> for Selection {
    fn from(selected: bool) -> Self {
        if selected {
            Selection::Selected
        } else {
            Selection::NotSelected
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Selection::Selected),
            "false" => Ok(Selection::NotSelected),
            _ => Err(format!("Invalid aria-selected value: {}", s)),
        }
    }
}
