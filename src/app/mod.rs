//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use model::{HoverTarget, Model, ToastLevel};
pub use update::{Message, update};

use crate::config::ModifierKey;
use crate::notebook::Limits;
use crate::vault::Vault;

/// Main application struct that owns the terminal and runs the event loop.
#[derive(Debug, Clone)]
pub struct App {
    vault: Vault,
    limits: Limits,
    modifier: ModifierKey,
}

impl App {
    /// Create a new application over the given vault.
    pub fn new(vault: Vault) -> Self {
        Self {
            vault,
            limits: Limits::default(),
            modifier: ModifierKey::detect(),
        }
    }

    /// Set the capacity limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the shortcut modifier key.
    #[must_use]
    pub const fn with_modifier(mut self, modifier: ModifierKey) -> Self {
        self.modifier = modifier;
        self
    }
}
