//! Termination policy for contract violations
//!
//! Once an OS call that must succeed has failed, continuing would inject
//! keys or move windows from untrusted state. The user is told what broke,
//! then the process exits.

use crate::app::AppError;

/// Reports the error and terminates the process.
pub fn abort(error: &AppError) -> ! {
    tracing::error!(%error, "unrecoverable failure");
    notify(&error.to_string());
    std::process::exit(1);
}

#[cfg(windows)]
fn notify(message: &str) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::UI::WindowsAndMessaging::{MB_ICONERROR, MB_OK, MessageBoxW};
    use windows::core::{HSTRING, PCWSTR};

    let title = HSTRING::from("keystrip");
    let text = HSTRING::from(message);
    // SAFETY: both wide strings outlive the (blocking) call.
    unsafe {
        MessageBoxW(
            HWND(0),
            PCWSTR(text.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_OK | MB_ICONERROR,
        );
    }
}

#[cfg(not(windows))]
fn notify(message: &str) {
    eprintln!("keystrip: {message}");
}
