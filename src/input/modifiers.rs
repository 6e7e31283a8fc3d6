//! Modifier and lock key state snapshot
//!
//! The OS is the source of truth for modifier state; this snapshot is a
//! cache polled on demand, used to pick the toggle direction for lock keys
//! and sticky modifiers and for UI feedback. It carries no consistency
//! guarantee beyond "accurate as of the last poll".

/// Snapshot of the current lock and modifier key state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    // locks
    pub caps_lock: bool,
    pub num_lock: bool,
    pub scroll_lock: bool,
    // modifiers
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
    pub windows: bool,
}

#[cfg(windows)]
impl ModifierState {
    /// Polls the current state from the OS.
    ///
    /// The low-order bit of `GetKeyState` reports a lock's toggle state,
    /// the high-order bit reports whether a key is currently down.
    pub fn poll() -> Self {
        use crate::input::vk;
        use windows::Win32::UI::Input::KeyboardAndMouse::GetKeyState;

        fn toggled(vk: u16) -> bool {
            // SAFETY: GetKeyState only reads the calling thread's key state.
            unsafe { GetKeyState(vk as i32) & 0x0001 != 0 }
        }
        fn held(vk: u16) -> bool {
            // SAFETY: as above.
            unsafe { GetKeyState(vk as i32) < 0 }
        }

        Self {
            caps_lock: toggled(vk::CAPITAL),
            num_lock: toggled(vk::NUMLOCK),
            scroll_lock: toggled(vk::SCROLL),
            control: held(vk::CONTROL),
            shift: held(vk::SHIFT),
            alt: held(vk::MENU),
            windows: held(vk::LWIN) || held(vk::RWIN),
        }
    }
}
