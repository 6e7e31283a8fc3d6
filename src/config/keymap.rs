//! Button-identifier to virtual-key mapping
//!
//! The static table translating abstract overlay button identifiers into
//! native virtual-key codes. Its content is data, not algorithm: the
//! synthesizer decides modifiers and ordering, this table only supplies the
//! primary code. Built once at startup and injected, never global.
//!
//! Shifted variants are distinct identifiers mapping to the same native
//! code (`colon`/`semicolon`, `A`/`a`); the identifier, never the code,
//! carries the variant.

use crate::input::vk;
use std::collections::HashMap;

#[rustfmt::skip]
const TABLE: &[(&str, u16)] = &[
    // Direct keys
    ("escape", vk::ESCAPE),
    ("f1", vk::F1), ("f2", vk::F1 + 1), ("f3", vk::F1 + 2), ("f4", vk::F1 + 3),
    ("f5", vk::F1 + 4), ("f6", vk::F1 + 5), ("f7", vk::F1 + 6), ("f8", vk::F1 + 7),
    ("f9", vk::F1 + 8), ("f10", vk::F1 + 9), ("f11", vk::F1 + 10), ("f12", vk::F1 + 11),
    ("backspace", vk::BACK),
    ("tab", vk::TAB),
    ("space", vk::SPACE),
    ("enter", vk::RETURN),
    ("insert", vk::INSERT),
    ("delete", vk::DELETE),
    ("home", vk::HOME),
    ("end", vk::END),
    ("page_up", vk::PRIOR),
    ("page_down", vk::NEXT),
    ("up", vk::UP), ("down", vk::DOWN), ("left", vk::LEFT), ("right", vk::RIGHT),
    ("print_screen", vk::SNAPSHOT),
    ("pause_break", vk::PAUSE),
    ("menu", vk::APPS),
    ("digit_0", vk::DIGIT_0), ("digit_1", vk::DIGIT_0 + 1), ("digit_2", vk::DIGIT_0 + 2),
    ("digit_3", vk::DIGIT_0 + 3), ("digit_4", vk::DIGIT_0 + 4), ("digit_5", vk::DIGIT_0 + 5),
    ("digit_6", vk::DIGIT_0 + 6), ("digit_7", vk::DIGIT_0 + 7), ("digit_8", vk::DIGIT_0 + 8),
    ("digit_9", vk::DIGIT_0 + 9),
    ("mute", vk::VOLUME_MUTE),
    ("volume_up", vk::VOLUME_UP),
    ("volume_down", vk::VOLUME_DOWN),
    ("media_next", vk::MEDIA_NEXT_TRACK),
    ("media_previous", vk::MEDIA_PREV_TRACK),
    ("media_play_pause", vk::MEDIA_PLAY_PAUSE),
    // Letters; native codes are case-insensitive, the identifier is not
    ("a", 0x41), ("b", 0x42), ("c", 0x43), ("d", 0x44), ("e", 0x45), ("f", 0x46),
    ("g", 0x47), ("h", 0x48), ("i", 0x49), ("j", 0x4A), ("k", 0x4B), ("l", 0x4C),
    ("m", 0x4D), ("n", 0x4E), ("o", 0x4F), ("p", 0x50), ("q", 0x51), ("r", 0x52),
    ("s", 0x53), ("t", 0x54), ("u", 0x55), ("v", 0x56), ("w", 0x57), ("x", 0x58),
    ("y", 0x59), ("z", 0x5A),
    ("A", 0x41), ("B", 0x42), ("C", 0x43), ("D", 0x44), ("E", 0x45), ("F", 0x46),
    ("G", 0x47), ("H", 0x48), ("I", 0x49), ("J", 0x4A), ("K", 0x4B), ("L", 0x4C),
    ("M", 0x4D), ("N", 0x4E), ("O", 0x4F), ("P", 0x50), ("Q", 0x51), ("R", 0x52),
    ("S", 0x53), ("T", 0x54), ("U", 0x55), ("V", 0x56), ("W", 0x57), ("X", 0x58),
    ("Y", 0x59), ("Z", 0x5A),
    // Punctuation pairs (shifted / unshifted)
    ("tilde", vk::OEM_3), ("grave_accent", vk::OEM_3),
    ("underscore", vk::OEM_MINUS), ("minus", vk::OEM_MINUS),
    ("plus", vk::OEM_PLUS), ("equals", vk::OEM_PLUS),
    ("left_brace", vk::OEM_4), ("left_bracket", vk::OEM_4),
    ("right_brace", vk::OEM_6), ("right_bracket", vk::OEM_6),
    ("pipe", vk::OEM_5), ("backslash", vk::OEM_5),
    ("colon", vk::OEM_1), ("semicolon", vk::OEM_1),
    ("double_quote", vk::OEM_7), ("single_quote", vk::OEM_7),
    ("question_mark", vk::OEM_2), ("slash", vk::OEM_2),
    ("less_than", vk::OEM_COMMA), ("comma", vk::OEM_COMMA),
    ("greater_than", vk::OEM_PERIOD), ("period", vk::OEM_PERIOD),
    // Number-row symbols: digit codes, shift synthesized by the classifier
    ("exclamation_mark", vk::DIGIT_0 + 1),
    ("at", vk::DIGIT_0 + 2),
    ("hash", vk::DIGIT_0 + 3),
    ("dollar", vk::DIGIT_0 + 4),
    ("percent", vk::DIGIT_0 + 5),
    ("circumflex", vk::DIGIT_0 + 6),
    ("ampersand", vk::DIGIT_0 + 7),
    ("asterisk", vk::DIGIT_0 + 8),
    ("left_paren", vk::DIGIT_0 + 9),
    ("right_paren", vk::DIGIT_0),
    // Control chords: letter codes, control synthesized by the classifier
    ("copy", vk::KEY_C),
    ("cut", vk::KEY_X),
    ("paste", vk::KEY_V),
    ("find", vk::KEY_F),
    ("find_all", vk::KEY_F),
    ("find_file", vk::KEY_P),
    ("undo", vk::KEY_Z),
    ("redo", vk::KEY_Y),
    // Lock keys
    ("caps_lock", vk::CAPITAL),
    ("num_lock", vk::NUMLOCK),
    ("scroll_lock", vk::SCROLL),
    // Sticky modifiers (right-side physical codes)
    ("control", vk::RCONTROL),
    ("shift", vk::RSHIFT),
    ("alt", vk::RMENU),
    ("windows", vk::RWIN),
];

/// Immutable mapping from abstract button identifiers to virtual-key codes
#[derive(Debug, Clone)]
pub struct Keymap {
    table: HashMap<&'static str, u16>,
}

impl Keymap {
    /// Builds the standard US-layout mapping.
    pub fn standard() -> Self {
        Self {
            table: TABLE.iter().copied().collect(),
        }
    }

    /// Looks up the native code for a button identifier.
    pub fn resolve(&self, button: &str) -> Option<u16> {
        self.table.get(button).copied()
    }

    /// Iterates over every mapped button identifier.
    pub fn buttons(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.keys().copied()
    }

    /// Number of mapped buttons.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_no_duplicate_identifiers() {
        let keymap = Keymap::standard();
        assert_eq!(keymap.len(), TABLE.len());
    }

    #[test]
    fn case_variants_share_native_codes() {
        let keymap = Keymap::standard();
        assert_eq!(keymap.resolve("a"), keymap.resolve("A"));
        assert_eq!(keymap.resolve("colon"), keymap.resolve("semicolon"));
        assert_eq!(keymap.resolve("tilde"), keymap.resolve("grave_accent"));
    }

    #[test]
    fn resolve_known_and_unknown() {
        let keymap = Keymap::standard();
        assert_eq!(keymap.resolve("escape"), Some(vk::ESCAPE));
        assert_eq!(keymap.resolve("exclamation_mark"), Some(0x31));
        assert_eq!(keymap.resolve("copy"), Some(vk::KEY_C));
        assert_eq!(keymap.resolve("pushButton_bogus"), None);
    }
}
