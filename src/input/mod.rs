//! Key-input synthesis and injection
//!
//! The synthesizer plans event sequences as pure data; delivery to the OS
//! input pipeline goes through the [`KeyInjector`] trait so the plan logic
//! and the controller stay testable off-Windows.

pub mod modifiers;
pub mod synthesizer;
pub mod vk;

#[cfg(windows)]
pub mod inject;

pub use modifiers::ModifierState;
pub use synthesizer::{KeyEvent, Plan, StateEffect, SynthError, Synthesizer};

use thiserror::Error;

/// Injection failures are contract violations: a dropped release event
/// would leave a key "stuck", so there is no silent-failure mode.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InjectError {
    #[error("input injection rejected for virtual key {vk:#04x}")]
    Rejected { vk: u16 },
}

/// Delivery seam between planned key events and the OS input pipeline
pub trait KeyInjector {
    /// Returns the current modifier/lock snapshot.
    fn modifiers(&self) -> ModifierState;

    /// Injects the events in order; any rejected event is an error.
    fn inject(&self, events: &[KeyEvent]) -> Result<(), InjectError>;
}
