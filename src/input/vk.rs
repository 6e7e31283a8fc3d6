//! Windows virtual-key codes used by the synthesizer
//!
//! Kept as plain `u16` values so the resolution and emission-planning logic
//! stays platform-independent; the injector converts them to `VIRTUAL_KEY`
//! at the `SendInput` boundary.
//! Reference: https://learn.microsoft.com/en-us/windows/win32/inputdev/virtual-key-codes

pub const BACK: u16 = 0x08;
pub const TAB: u16 = 0x09;
pub const RETURN: u16 = 0x0D;
pub const SHIFT: u16 = 0x10;
pub const CONTROL: u16 = 0x11;
pub const PAUSE: u16 = 0x13;
pub const CAPITAL: u16 = 0x14;
pub const ESCAPE: u16 = 0x1B;
pub const SPACE: u16 = 0x20;
pub const PRIOR: u16 = 0x21;
pub const NEXT: u16 = 0x22;
pub const END: u16 = 0x23;
pub const HOME: u16 = 0x24;
pub const LEFT: u16 = 0x25;
pub const UP: u16 = 0x26;
pub const RIGHT: u16 = 0x27;
pub const DOWN: u16 = 0x28;
pub const SNAPSHOT: u16 = 0x2C;
pub const INSERT: u16 = 0x2D;
pub const DELETE: u16 = 0x2E;

/// `0`..`9` occupy 0x30..0x39, `A`..`Z` occupy 0x41..0x5A.
pub const DIGIT_0: u16 = 0x30;
pub const KEY_C: u16 = 0x43;
pub const KEY_F: u16 = 0x46;
pub const KEY_P: u16 = 0x50;
pub const KEY_V: u16 = 0x56;
pub const KEY_X: u16 = 0x58;
pub const KEY_Y: u16 = 0x59;
pub const KEY_Z: u16 = 0x5A;

pub const LWIN: u16 = 0x5B;
pub const RWIN: u16 = 0x5C;
pub const APPS: u16 = 0x5D;
pub const F1: u16 = 0x70;
pub const NUMLOCK: u16 = 0x90;
pub const SCROLL: u16 = 0x91;
pub const RSHIFT: u16 = 0xA1;
pub const RCONTROL: u16 = 0xA3;
pub const MENU: u16 = 0x12;
pub const RMENU: u16 = 0xA5;
pub const VOLUME_MUTE: u16 = 0xAD;
pub const VOLUME_DOWN: u16 = 0xAE;
pub const VOLUME_UP: u16 = 0xAF;
pub const MEDIA_NEXT_TRACK: u16 = 0xB0;
pub const MEDIA_PREV_TRACK: u16 = 0xB1;
pub const MEDIA_PLAY_PAUSE: u16 = 0xB3;

/// OEM punctuation codes for the US layout
pub const OEM_1: u16 = 0xBA; // ;:
pub const OEM_PLUS: u16 = 0xBB; // =+
pub const OEM_COMMA: u16 = 0xBC; // ,<
pub const OEM_MINUS: u16 = 0xBD; // -_
pub const OEM_PERIOD: u16 = 0xBE; // .>
pub const OEM_2: u16 = 0xBF; // /?
pub const OEM_3: u16 = 0xC0; // `~
pub const OEM_4: u16 = 0xDB; // [{
pub const OEM_5: u16 = 0xDC; // \|
pub const OEM_6: u16 = 0xDD; // ]}
pub const OEM_7: u16 = 0xDE; // '"
