//! Locate-launch-position orchestration
//!
//! Generic over the platform seams so every flow is exercised by tests
//! with mock implementations; Windows binds the real ones in `main`.

use crate::app::AppError;
use crate::config::TargetApp;
use crate::domain::ScreenRegions;
use crate::input::{KeyInjector, StateEffect, Synthesizer};
use crate::platform::WindowSystem;

use std::time::Duration;

/// How long a freshly launched process gets to create its main window
/// before the first locate attempt.
const LAUNCH_SETTLE: Duration = Duration::from_millis(800);

pub struct Controller<S: WindowSystem, I: KeyInjector> {
    system: S,
    injector: I,
    synthesizer: Synthesizer,
    regions: ScreenRegions,
    apps: Vec<TargetApp>,
    settle: Duration,
}

impl<S: WindowSystem, I: KeyInjector> Controller<S, I> {
    pub fn new(
        system: S,
        injector: I,
        synthesizer: Synthesizer,
        regions: ScreenRegions,
        apps: Vec<TargetApp>,
    ) -> Self {
        Self {
            system,
            injector,
            synthesizer,
            regions,
            apps,
            settle: LAUNCH_SETTLE,
        }
    }

    #[cfg(test)]
    fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    pub fn apps(&self) -> &[TargetApp] {
        &self.apps
    }

    pub fn regions(&self) -> &ScreenRegions {
        &self.regions
    }

    fn app_named(&self, name: &str) -> Result<&TargetApp, AppError> {
        self.apps
            .iter()
            .find(|app| app.display_name == name)
            .ok_or_else(|| AppError::UnknownApp(name.to_string()))
    }

    /// Brings the named app's window into its preferred region, launching
    /// the app first when it is not running.
    pub fn open_or_show(&self, name: &str) -> Result<(), AppError> {
        let app = self.app_named(name)?;

        if self.system.is_process_running(&app.match_executable)? {
            tracing::info!(app = %app.display_name, "process already running");
            match self.system.find_window(&app.match_executable, "")? {
                Some(window) => {
                    self.system
                        .move_window(window, app.prefer_above, &self.regions)?;
                }
                None => {
                    tracing::warn!(
                        app = %app.display_name,
                        "process is running but owns no visible window"
                    );
                }
            }
            return Ok(());
        }

        self.launch_and_place(app)
    }

    fn launch_and_place(&self, app: &TargetApp) -> Result<(), AppError> {
        tracing::info!(app = %app.display_name, "launching");
        if !self.system.launch(app) {
            // The refusal was already logged; nothing to position.
            return Ok(());
        }

        std::thread::sleep(self.settle);

        let mut window = self
            .system
            .find_window(&app.match_executable, &app.match_title)?;
        // Some apps title their window differently during startup.
        if window.is_none() && !app.match_title.is_empty() {
            window = self.system.find_window(&app.match_executable, "")?;
        }

        match window {
            Some(window) => {
                self.system
                    .move_window(window, app.prefer_above, &self.regions)?;
            }
            None => {
                tracing::warn!(
                    app = %app.display_name,
                    "no window appeared after launch; leaving it be"
                );
            }
        }
        Ok(())
    }

    /// Moves the current foreground window into the above or below region.
    /// No foreground window is a no-op.
    pub fn move_active(&self, above: bool) -> Result<(), AppError> {
        match self.system.foreground_window()? {
            Some(window) => {
                self.system.move_window(window, above, &self.regions)?;
                Ok(())
            }
            None => {
                tracing::debug!("no foreground window to move");
                Ok(())
            }
        }
    }

    /// Synthesizes and injects the event sequence for one button
    /// activation, returning the logical state change for UI feedback.
    pub fn activate_key(&self, button: &str) -> Result<StateEffect, AppError> {
        let modifiers = self.injector.modifiers();
        let plan = self.synthesizer.plan(button, &modifiers)?;
        self.injector.inject(&plan.events)?;
        Ok(plan.effect)
    }

    /// Whether the named app's process is currently running.
    pub fn running(&self, name: &str) -> Result<bool, AppError> {
        let app = self.app_named(name)?;
        Ok(self.system.is_process_running(&app.match_executable)?)
    }
}
