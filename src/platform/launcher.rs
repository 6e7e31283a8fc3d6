//! Application launching via the shell
//!
//! Launching is fire-and-forget: the shell owns the new process and
//! reports only whether it accepted the request. A refusal (missing file,
//! bad path) is an expected outcome, not a contract violation.

use crate::config::TargetApp;

use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Shell::ShellExecuteW;
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;
use windows::core::{HSTRING, PCWSTR};

/// Asks the shell to start `app`; true when the request was accepted.
pub fn start(app: &TargetApp) -> bool {
    let verb = HSTRING::from("open");
    let path = HSTRING::from(app.start_path.as_os_str());
    let directory = HSTRING::from(app.start_working_directory.as_os_str());
    let parameters_buf = HSTRING::from(app.start_parameters.as_str());

    let parameters = if app.start_parameters.is_empty() {
        PCWSTR::null()
    } else {
        PCWSTR(parameters_buf.as_ptr())
    };

    // SAFETY: all wide strings outlive the call.
    let instance = unsafe {
        ShellExecuteW(
            HWND(0),
            PCWSTR(verb.as_ptr()),
            PCWSTR(path.as_ptr()),
            parameters,
            PCWSTR(directory.as_ptr()),
            SW_SHOWNORMAL,
        )
    };

    // Values of 32 and below are shell error codes.
    let accepted = instance.0 > 32;
    if !accepted {
        tracing::warn!(
            app = %app.display_name,
            path = %app.start_path.display(),
            code = instance.0,
            "shell refused to start application"
        );
    }
    accepted
}
