//! Process enumeration and executable-name resolution
//!
//! Restricted system processes are expected during enumeration and
//! irrelevant to the search, so access-denied is silently skipped rather
//! than treated as absence or failure.

use crate::platform::LocatorError;

use windows::Win32::Foundation::{
    CloseHandle, ERROR_ACCESS_DENIED, ERROR_PARTIAL_COPY, HANDLE,
};
use windows::Win32::System::ProcessStatus::K32EnumProcesses;
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_NAME_WIN32, PROCESS_QUERY_LIMITED_INFORMATION,
    QueryFullProcessImageNameW,
};
use windows::core::PWSTR;

/// Returns the PIDs of every running process.
pub fn running_processes() -> Result<Vec<u32>, LocatorError> {
    let mut pids = vec![0u32; 1024];
    loop {
        let capacity_bytes = (pids.len() * std::mem::size_of::<u32>()) as u32;
        let mut needed_bytes = 0u32;

        // SAFETY: the buffer pointer and byte capacity describe `pids`.
        let ok = unsafe { K32EnumProcesses(pids.as_mut_ptr(), capacity_bytes, &mut needed_bytes) };
        if !ok.as_bool() {
            return Err(LocatorError::api(
                "K32EnumProcesses",
                windows::core::Error::from_win32(),
            ));
        }

        // A completely full buffer may have truncated the list; grow and retry.
        if needed_bytes == capacity_bytes {
            pids.resize(pids.len() * 2, 0);
            continue;
        }

        pids.truncate(needed_bytes as usize / std::mem::size_of::<u32>());
        return Ok(pids);
    }
}

/// Resolves a PID to its uppercase executable base name.
///
/// Returns `None` for the kernel pseudo-process (PID 0) and for processes
/// the caller is not allowed to inspect.
pub fn exe_base_name(pid: u32) -> Result<Option<String>, LocatorError> {
    if pid == 0 {
        return Ok(None);
    }

    // SAFETY: least-privilege open; the handle is closed below.
    let handle: HANDLE =
        match unsafe { OpenProcess(PROCESS_QUERY_LIMITED_INFORMATION, false, pid) } {
            Ok(handle) => handle,
            Err(e) if e.code() == ERROR_ACCESS_DENIED.to_hresult() => return Ok(None),
            // The process may have exited between enumeration and the open.
            Err(e) if e.code() == windows::Win32::Foundation::ERROR_INVALID_PARAMETER.to_hresult() => {
                return Ok(None);
            }
            Err(e) => return Err(LocatorError::api("OpenProcess", e)),
        };

    let mut buffer = [0u16; 1024];
    let mut length = buffer.len() as u32;
    // SAFETY: buffer and length describe a valid wide-char buffer.
    let result = unsafe {
        QueryFullProcessImageNameW(
            handle,
            PROCESS_NAME_WIN32,
            PWSTR(buffer.as_mut_ptr()),
            &mut length,
        )
    };
    // SAFETY: handle came from OpenProcess above.
    unsafe {
        let _ = CloseHandle(handle);
    }

    match result {
        Ok(()) => {
            let path = String::from_utf16_lossy(&buffer[..length as usize]);
            Ok(Some(base_name_upper(&path)))
        }
        Err(e)
            if e.code() == ERROR_ACCESS_DENIED.to_hresult()
                || e.code() == ERROR_PARTIAL_COPY.to_hresult() =>
        {
            Ok(None)
        }
        Err(e) => Err(LocatorError::api("QueryFullProcessImageNameW", e)),
    }
}

/// Whether any running process matches `exe_name` case-insensitively.
pub fn is_process_running(exe_name: &str) -> Result<bool, LocatorError> {
    let target = exe_name.to_uppercase();
    for pid in running_processes()? {
        if exe_base_name(pid)?.as_deref() == Some(target.as_str()) {
            return Ok(true);
        }
    }
    Ok(false)
}

fn base_name_upper(path: &str) -> String {
    path.rsplit(['\\', '/'])
        .next()
        .unwrap_or(path)
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_strips_directories_and_uppercases() {
        assert_eq!(
            base_name_upper(r"C:\Program Files\Mozilla Firefox\firefox.exe"),
            "FIREFOX.EXE"
        );
        assert_eq!(base_name_upper("notepad.exe"), "NOTEPAD.EXE");
    }

    #[test]
    fn enumeration_includes_current_process() {
        let pids = running_processes().unwrap();
        assert!(pids.contains(&std::process::id()));
    }

    #[test]
    fn current_process_resolves_to_own_exe_name() {
        let name = exe_base_name(std::process::id()).unwrap();
        assert!(name.is_some_and(|n| n.ends_with(".EXE")));
    }
}
