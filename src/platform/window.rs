//! Win32 window enumeration and positioning
//!
//! CRITICAL: `GetWindowRect` includes the invisible drop-shadow border
//! DWM paints around top-level windows. Repositioning therefore also reads
//! the extended frame bounds and hands both rectangles to the placement
//! math, so the *visible* frame lands on the region boundaries.

use crate::config::TargetApp;
use crate::domain::{Rect, ScreenRegions, layout};
use crate::platform::matching::WindowSearch;
use crate::platform::{LocatorError, WindowSystem, launcher, process};

use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Dwm::{DWMWA_EXTENDED_FRAME_BOUNDS, DwmGetWindowAttribute};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetForegroundWindow, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, HWND_TOP, IsWindowVisible, SPI_GETWORKAREA, SWP_SHOWWINDOW,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SetWindowPos, SystemParametersInfoW,
};

/// Win32-backed [`WindowSystem`] implementation
#[derive(Debug, Default)]
pub struct Win32WindowSystem;

impl Win32WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

/// Search state threaded through the `EnumWindows` callback.
///
/// The callback always continues enumeration and only records the first
/// match (see [`WindowSearch`]), so a completed enumeration with no match
/// is an unambiguous "no such window".
struct FindContext {
    search: WindowSearch<HWND>,
    error: Option<LocatorError>,
}

unsafe extern "system" fn find_callback(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam carries a pointer to the FindContext on the caller's
    // stack, valid for the duration of EnumWindows.
    let ctx = unsafe { &mut *(lparam.0 as *mut FindContext) };
    if ctx.search.done() || ctx.error.is_some() {
        return TRUE;
    }

    // Invisible windows can never match; skip before resolving the owner.
    // SAFETY: hwnd is a live window handle supplied by the enumeration.
    if !unsafe { IsWindowVisible(hwnd) }.as_bool() {
        return TRUE;
    }

    let mut pid = 0u32;
    // SAFETY: pid points to a valid u32.
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid as *mut u32)) };
    if pid == 0 {
        return TRUE;
    }

    let exe = match process::exe_base_name(pid) {
        Ok(exe) => exe,
        Err(e) => {
            ctx.error = Some(e);
            return TRUE;
        }
    };

    let title = if ctx.search.wants_title() {
        window_title(hwnd)
    } else {
        String::new()
    };
    ctx.search.offer(hwnd, true, exe.as_deref(), &title);
    TRUE
}

fn window_title(hwnd: HWND) -> String {
    // SAFETY: hwnd is a live window handle supplied by the enumeration.
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }
    let mut buffer = vec![0u16; length as usize + 1];
    // SAFETY: buffer is a valid wide-char buffer sized for the full title.
    let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    String::from_utf16_lossy(&buffer[..copied as usize])
}

fn window_rect(hwnd: HWND) -> Result<Rect, LocatorError> {
    let mut rect = RECT::default();
    // SAFETY: hwnd was located moments ago; rect is a valid out pointer.
    unsafe { GetWindowRect(hwnd, &mut rect) }
        .map_err(|e| LocatorError::api("GetWindowRect", e))?;
    Ok(rect_from(rect))
}

fn visible_frame(hwnd: HWND) -> Result<Rect, LocatorError> {
    let mut rect = RECT::default();
    // SAFETY: rect pointer and size describe a RECT out parameter.
    unsafe {
        DwmGetWindowAttribute(
            hwnd,
            DWMWA_EXTENDED_FRAME_BOUNDS,
            &mut rect as *mut RECT as *mut core::ffi::c_void,
            std::mem::size_of::<RECT>() as u32,
        )
    }
    .map_err(|e| LocatorError::api("DwmGetWindowAttribute", e))?;
    Ok(rect_from(rect))
}

fn rect_from(rect: RECT) -> Rect {
    Rect::new(
        rect.left,
        rect.top,
        rect.right - rect.left,
        rect.bottom - rect.top,
    )
}

impl WindowSystem for Win32WindowSystem {
    type Handle = HWND;

    fn work_area(&self) -> Result<Rect, LocatorError> {
        let mut rect = RECT::default();
        // SAFETY: SPI_GETWORKAREA fills the RECT pointed to by pvParam.
        unsafe {
            SystemParametersInfoW(
                SPI_GETWORKAREA,
                0,
                Some(&mut rect as *mut RECT as *mut core::ffi::c_void),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
            )
        }
        .map_err(|e| LocatorError::api("SystemParametersInfoW", e))?;
        Ok(rect_from(rect))
    }

    fn is_process_running(&self, exe_name: &str) -> Result<bool, LocatorError> {
        process::is_process_running(exe_name)
    }

    fn find_window(
        &self,
        exe_name: &str,
        title_contains: &str,
    ) -> Result<Option<HWND>, LocatorError> {
        let mut ctx = FindContext {
            search: WindowSearch::new(exe_name, title_contains),
            error: None,
        };
        // SAFETY: the callback only dereferences lparam as the FindContext
        // passed here, which outlives the call.
        unsafe { EnumWindows(Some(find_callback), LPARAM(&mut ctx as *mut FindContext as isize)) }
            .map_err(|e| LocatorError::api("EnumWindows", e))?;
        if let Some(error) = ctx.error {
            return Err(error);
        }
        Ok(ctx.search.into_found())
    }

    fn move_window(
        &self,
        window: HWND,
        above: bool,
        regions: &ScreenRegions,
    ) -> Result<(), LocatorError> {
        let raw = window_rect(window)?;
        let visible = visible_frame(window)?;
        let target = layout::placement(raw, visible, above, regions);

        tracing::debug!(?raw, ?visible, ?target, above, "repositioning window");

        // SAFETY: window is a handle located by this same operation.
        unsafe {
            SetWindowPos(
                window,
                HWND_TOP,
                target.x,
                target.y,
                target.w,
                target.h,
                SWP_SHOWWINDOW,
            )
        }
        .map_err(|e| LocatorError::api("SetWindowPos", e))
    }

    fn foreground_window(&self) -> Result<Option<HWND>, LocatorError> {
        // SAFETY: no preconditions; a null handle means no foreground window.
        let hwnd = unsafe { GetForegroundWindow() };
        if hwnd.0 == 0 {
            return Ok(None);
        }
        Ok(Some(hwnd))
    }

    fn launch(&self, app: &TargetApp) -> bool {
        launcher::start(app)
    }
}
