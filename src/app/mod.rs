//! Application orchestration
//!
//! The controller owns the wiring between configuration, the layout
//! calculator, the window system and the key injector. Errors from any
//! layer converge here so the top level can apply one termination policy.

pub mod controller;
pub mod fatal;

pub use controller::Controller;

use crate::config::ConfigError;
use crate::domain::LayoutError;
use crate::input::{InjectError, SynthError};
use crate::platform::LocatorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no configured application named '{0}'")]
    UnknownApp(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Locator(#[from] LocatorError),
    #[error(transparent)]
    Synth(#[from] SynthError),
    #[error(transparent)]
    Inject(#[from] InjectError),
}

impl AppError {
    /// Whether this error means the process state can no longer be
    /// trusted and the program must terminate after notifying the user.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            AppError::Locator(_) | AppError::Synth(_) | AppError::Inject(_)
        )
    }
}
