//! Platform integration layer
//!
//! The [`WindowSystem`] trait is the seam between the orchestration logic
//! and the Win32 window/process APIs; the Windows implementation lives in
//! the submodules, tests use mocks. Process and window identity is
//! inherently racy, so "not found" is always a legitimate `None`/`false`
//! outcome here — only outright API failures surface as errors.

use crate::config::TargetApp;
use crate::domain::{Rect, ScreenRegions};
use thiserror::Error;

pub mod matching;

#[cfg(windows)]
pub mod launcher;
#[cfg(windows)]
pub mod process;
#[cfg(windows)]
pub mod window;

#[cfg(windows)]
pub use window::Win32WindowSystem;

/// Contract violations from OS query/control calls
///
/// An API that should always succeed under correct usage returned failure.
/// Once this happens the window/input state can no longer be trusted;
/// callers decide whether to terminate (see `app::fatal`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocatorError {
    #[error("{call} failed: {detail}")]
    ApiFailure {
        call: &'static str,
        detail: String,
    },
}

#[cfg(windows)]
impl LocatorError {
    pub(crate) fn api(call: &'static str, error: windows::core::Error) -> Self {
        Self::ApiFailure {
            call,
            detail: error.message().to_string(),
        }
    }
}

/// OS window and process operations the controller depends on
///
/// Handles are owned by the OS; they are held only for the duration of a
/// single locate-then-move operation and never cached across calls.
pub trait WindowSystem {
    type Handle: Copy + std::fmt::Debug;

    /// Returns the usable desktop area (excluding the taskbar).
    fn work_area(&self) -> Result<Rect, LocatorError>;

    /// Whether any running process's executable base name matches
    /// `exe_name` case-insensitively.
    fn is_process_running(&self, exe_name: &str) -> Result<bool, LocatorError>;

    /// First enumerated visible top-level window owned by a matching
    /// executable whose title contains `title_contains` (empty matches on
    /// the executable alone).
    fn find_window(
        &self,
        exe_name: &str,
        title_contains: &str,
    ) -> Result<Option<Self::Handle>, LocatorError>;

    /// Moves the window so its visible frame fills the above or below
    /// region and raises it to the top of the z-order.
    fn move_window(
        &self,
        window: Self::Handle,
        above: bool,
        regions: &ScreenRegions,
    ) -> Result<(), LocatorError>;

    /// The current foreground window, if any.
    fn foreground_window(&self) -> Result<Option<Self::Handle>, LocatorError>;

    /// Fire-and-forget launch; returns false when the OS refused to start
    /// the target (bad path, missing file). Never an error.
    fn launch(&self, app: &TargetApp) -> bool;
}
