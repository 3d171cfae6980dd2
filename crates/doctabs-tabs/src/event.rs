//! Interaction events delivered to the tab handlers

use serde::{Deserialize, Serialize};

use doctabs_dom::NodeId;

/// A click on a tab or on any content nested inside one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    /// Element the click originated from
    pub target: NodeId,
    default_prevented: bool,
}

impl ActivationEvent {
    pub fn new(target: NodeId) -> Self {
        Self {
            target,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Other => "Other",
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Key {
    type Err = std::convert::Infallible;

    /// Accepts DOM `KeyboardEvent.key` names; unknown keys map to `Other`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            _ => Key::Other,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub target: NodeId,
    pub key: Key,
    default_prevented: bool,
}

impl KeyEvent {
    pub fn new(target: NodeId, key: Key) -> Self {
        Self {
            target,
            key,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
