//! `SendInput`-backed key event delivery
//!
//! Events are injected one at a time so a rejection can be attributed to
//! the exact key that failed.

use crate::input::synthesizer::{Direction, KeyEvent};
use crate::input::{InjectError, KeyInjector, ModifierState};

use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_EXTENDEDKEY,
    KEYEVENTF_KEYUP, SendInput, VIRTUAL_KEY,
};

/// Injector backed by the Win32 `SendInput` API
#[derive(Debug, Default)]
pub struct Win32KeyInjector;

impl Win32KeyInjector {
    pub fn new() -> Self {
        Self
    }
}

impl KeyInjector for Win32KeyInjector {
    fn modifiers(&self) -> ModifierState {
        ModifierState::poll()
    }

    fn inject(&self, events: &[KeyEvent]) -> Result<(), InjectError> {
        for event in events {
            let mut flags = KEYBD_EVENT_FLAGS(0);
            if event.direction == Direction::Release {
                flags |= KEYEVENTF_KEYUP;
            }
            if event.extended {
                flags |= KEYEVENTF_EXTENDEDKEY;
            }

            let input = INPUT {
                r#type: INPUT_KEYBOARD,
                Anonymous: INPUT_0 {
                    ki: KEYBDINPUT {
                        wVk: VIRTUAL_KEY(event.vk),
                        wScan: 0,
                        dwFlags: flags,
                        time: 0,
                        dwExtraInfo: 0,
                    },
                },
            };

            // SAFETY: SendInput reads the INPUT slice synchronously.
            let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
            if sent == 0 {
                return Err(InjectError::Rejected { vk: event.vk });
            }
        }
        Ok(())
    }
}
