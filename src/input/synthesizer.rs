//! Key-event synthesizer
//!
//! Converts a single "virtual key button activated" event into the exact
//! sequence of native key-down/key-up events the OS input pipeline expects,
//! including modifiers implied by the button's meaning ("exclamation_mark"
//! is shift+1, "copy" is control+C).
//!
//! Planning is pure: `plan` resolves the button against the keymap,
//! classifies it into exactly one rule group, and returns the ordered event
//! list plus the logical state effect. Delivery happens behind the
//! [`KeyInjector`](crate::input::KeyInjector) trait.

use crate::config::keymap::Keymap;
use crate::input::ModifierState;
use crate::input::vk;
use thiserror::Error;

/// Errors raised while resolving or classifying a button
///
/// Both variants are contract violations: the UI must never expose a button
/// without a mapping or a synthesis rule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SynthError {
    #[error("no key mapping for button '{0}'")]
    UnmappedButton(String),
    #[error("no synthesis rule for button '{0}'")]
    NoRule(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Press,
    Release,
}

/// One native key event to inject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub vk: u16,
    pub direction: Direction,
    /// Extended-key flag; required on release for a fixed set of codes or
    /// the OS reports the key as still down.
    pub extended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lock {
    Caps,
    Num,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sticky {
    Control,
    Shift,
    Alt,
    Windows,
}

/// Logical state change a plan implies, for UI feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateEffect {
    None,
    /// A lock key toggled; `engaged` is the negation of the polled state
    LockToggled { lock: Lock, engaged: bool },
    /// A sticky modifier was pressed and is now held
    ModifierHeld(Sticky),
    /// A sticky modifier was released
    ModifierReleased(Sticky),
}

/// The ordered event sequence for one button activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub events: Vec<KeyEvent>,
    pub effect: StateEffect,
}

/// The mutually exclusive synthesis rule groups
///
/// Classification evaluates them in this order, first match wins; the
/// ordering matters because native codes overlap between groups (digits vs.
/// number-row symbols, letters vs. chords).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    PassThrough,
    Alphabetic { uppercase: bool },
    ShiftedPunctuation { shifted: bool },
    NumberRowSymbol,
    ControlChord { with_shift: bool },
    LockKey(Lock),
    StickyModifier(Sticky),
}

#[rustfmt::skip]
const PASS_THROUGH: &[&str] = &[
    "escape", "f1", "f2", "f3", "f4", "f5", "f6", "f7", "f8", "f9", "f10",
    "f11", "f12", "backspace", "tab", "space", "enter", "insert", "delete",
    "home", "end", "page_up", "page_down", "up", "down", "left", "right",
    "print_screen", "pause_break", "menu", "digit_0", "digit_1", "digit_2",
    "digit_3", "digit_4", "digit_5", "digit_6", "digit_7", "digit_8",
    "digit_9", "mute", "volume_up", "volume_down", "media_next",
    "media_previous", "media_play_pause",
];

const SHIFTED_PUNCTUATION: &[&str] = &[
    "tilde", "underscore", "plus", "left_brace", "right_brace", "pipe",
    "colon", "double_quote", "question_mark", "less_than", "greater_than",
];

const UNSHIFTED_PUNCTUATION: &[&str] = &[
    "grave_accent", "minus", "equals", "left_bracket", "right_bracket",
    "backslash", "semicolon", "single_quote", "slash", "comma", "period",
];

const NUMBER_ROW_SYMBOLS: &[&str] = &[
    "exclamation_mark", "at", "hash", "dollar", "percent", "circumflex",
    "ampersand", "asterisk", "left_paren", "right_paren",
];

/// Codes whose release must carry the extended-key flag
const EXTENDED_ON_RELEASE: &[u16] = &[
    vk::RMENU,
    vk::RCONTROL,
    vk::INSERT,
    vk::DELETE,
    vk::HOME,
    vk::END,
    vk::PRIOR,
    vk::NEXT,
    vk::UP,
    vk::DOWN,
    vk::LEFT,
    vk::RIGHT,
];

fn chord(button: &str) -> Option<bool> {
    match button {
        "copy" | "cut" | "paste" | "find" | "undo" | "redo" => Some(false),
        "find_all" | "find_file" => Some(true),
        _ => None,
    }
}

fn lock_key(button: &str) -> Option<Lock> {
    match button {
        "caps_lock" => Some(Lock::Caps),
        "num_lock" => Some(Lock::Num),
        "scroll_lock" => Some(Lock::Scroll),
        _ => None,
    }
}

fn sticky_modifier(button: &str) -> Option<Sticky> {
    match button {
        "control" => Some(Sticky::Control),
        "shift" => Some(Sticky::Shift),
        "alt" => Some(Sticky::Alt),
        "windows" => Some(Sticky::Windows),
        _ => None,
    }
}

/// Assigns a button identifier to exactly one rule group.
pub fn classify(button: &str) -> Result<RuleGroup, SynthError> {
    if PASS_THROUGH.contains(&button) {
        return Ok(RuleGroup::PassThrough);
    }
    if button.len() == 1 {
        let c = button.chars().next().unwrap_or_default();
        if c.is_ascii_alphabetic() {
            return Ok(RuleGroup::Alphabetic {
                uppercase: c.is_ascii_uppercase(),
            });
        }
    }
    if SHIFTED_PUNCTUATION.contains(&button) {
        return Ok(RuleGroup::ShiftedPunctuation { shifted: true });
    }
    if UNSHIFTED_PUNCTUATION.contains(&button) {
        return Ok(RuleGroup::ShiftedPunctuation { shifted: false });
    }
    if NUMBER_ROW_SYMBOLS.contains(&button) {
        return Ok(RuleGroup::NumberRowSymbol);
    }
    if let Some(with_shift) = chord(button) {
        return Ok(RuleGroup::ControlChord { with_shift });
    }
    if let Some(lock) = lock_key(button) {
        return Ok(RuleGroup::LockKey(lock));
    }
    if let Some(modifier) = sticky_modifier(button) {
        return Ok(RuleGroup::StickyModifier(modifier));
    }
    Err(SynthError::NoRule(button.to_string()))
}

/// Resolves and classifies button activations into injection plans
#[derive(Debug, Clone)]
pub struct Synthesizer {
    keymap: Keymap,
}

impl Synthesizer {
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Produces the ordered event sequence for one button activation.
    ///
    /// `modifiers` is the most recent polled snapshot; it decides the
    /// toggle direction for lock keys and sticky modifiers only.
    pub fn plan(&self, button: &str, modifiers: &ModifierState) -> Result<Plan, SynthError> {
        let code = self
            .keymap
            .resolve(button)
            .ok_or_else(|| SynthError::UnmappedButton(button.to_string()))?;
        let group = classify(button)?;

        Ok(match group {
            RuleGroup::PassThrough => tap(code, false, false),
            RuleGroup::Alphabetic { uppercase } => tap(code, uppercase, false),
            RuleGroup::ShiftedPunctuation { shifted } => tap(code, shifted, false),
            RuleGroup::NumberRowSymbol => tap(code, true, false),
            RuleGroup::ControlChord { with_shift } => tap(code, with_shift, true),
            RuleGroup::LockKey(lock) => {
                let mut plan = tap(code, false, false);
                plan.effect = StateEffect::LockToggled {
                    lock,
                    engaged: !lock_engaged(lock, modifiers),
                };
                plan
            }
            RuleGroup::StickyModifier(modifier) => {
                if sticky_held(modifier, modifiers) {
                    Plan {
                        events: vec![release(code)],
                        effect: StateEffect::ModifierReleased(modifier),
                    }
                } else {
                    // Press and hold; no release until toggled again.
                    Plan {
                        events: vec![press(code)],
                        effect: StateEffect::ModifierHeld(modifier),
                    }
                }
            }
        })
    }
}

fn lock_engaged(lock: Lock, modifiers: &ModifierState) -> bool {
    match lock {
        Lock::Caps => modifiers.caps_lock,
        Lock::Num => modifiers.num_lock,
        Lock::Scroll => modifiers.scroll_lock,
    }
}

fn sticky_held(modifier: Sticky, modifiers: &ModifierState) -> bool {
    match modifier {
        Sticky::Control => modifiers.control,
        Sticky::Shift => modifiers.shift,
        Sticky::Alt => modifiers.alt,
        Sticky::Windows => modifiers.windows,
    }
}

fn press(code: u16) -> KeyEvent {
    KeyEvent {
        vk: code,
        direction: Direction::Press,
        extended: false,
    }
}

fn release(code: u16) -> KeyEvent {
    KeyEvent {
        vk: code,
        direction: Direction::Release,
        extended: EXTENDED_ON_RELEASE.contains(&code),
    }
}

/// Builds a tap: control down, shift down, key down, key up, shift up,
/// control up. The order must match OS expectations exactly.
fn tap(code: u16, with_shift: bool, with_control: bool) -> Plan {
    let mut events = Vec::with_capacity(6);
    if with_control {
        events.push(press(vk::CONTROL));
    }
    if with_shift {
        events.push(press(vk::SHIFT));
    }
    events.push(press(code));
    events.push(release(code));
    if with_shift {
        events.push(release(vk::SHIFT));
    }
    if with_control {
        events.push(release(vk::CONTROL));
    }
    Plan {
        events,
        effect: StateEffect::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn synthesizer() -> Synthesizer {
        Synthesizer::new(Keymap::standard())
    }

    /// Counts how many rule-group membership predicates accept a button.
    fn membership_count(button: &str) -> usize {
        let alphabetic =
            button.len() == 1 && button.chars().next().unwrap().is_ascii_alphabetic();
        [
            PASS_THROUGH.contains(&button),
            alphabetic,
            SHIFTED_PUNCTUATION.contains(&button),
            UNSHIFTED_PUNCTUATION.contains(&button),
            NUMBER_ROW_SYMBOLS.contains(&button),
            chord(button).is_some(),
            lock_key(button).is_some(),
            sticky_modifier(button).is_some(),
        ]
        .iter()
        .filter(|&&m| m)
        .count()
    }

    #[test]
    fn every_mapped_button_classifies_into_exactly_one_group() {
        let keymap = Keymap::standard();
        for button in keymap.buttons() {
            assert!(
                classify(button).is_ok(),
                "button '{button}' has no synthesis rule"
            );
            assert_eq!(
                membership_count(button),
                1,
                "button '{button}' matches more than one rule group"
            );
        }
    }

    #[test]
    fn unmapped_button_is_an_error() {
        let result = synthesizer().plan("pushButton_bogus", &ModifierState::default());
        assert_eq!(
            result,
            Err(SynthError::UnmappedButton("pushButton_bogus".into()))
        );
    }

    #[test]
    fn unclassifiable_button_is_an_error() {
        assert_eq!(classify("??"), Err(SynthError::NoRule("??".into())));
    }

    #[test]
    fn pass_through_emits_plain_tap() {
        let plan = synthesizer()
            .plan("escape", &ModifierState::default())
            .unwrap();
        assert_eq!(
            plan.events,
            vec![press(vk::ESCAPE), release(vk::ESCAPE)]
        );
        assert_eq!(plan.effect, StateEffect::None);
    }

    #[test]
    fn uppercase_letter_synthesizes_shift_lowercase_does_not() {
        let synth = synthesizer();
        let upper = synth.plan("A", &ModifierState::default()).unwrap();
        assert_eq!(
            upper.events,
            vec![press(vk::SHIFT), press(0x41), release(0x41), release(vk::SHIFT)]
        );

        let lower = synth.plan("a", &ModifierState::default()).unwrap();
        assert_eq!(lower.events, vec![press(0x41), release(0x41)]);
    }

    #[test]
    fn only_shifted_punctuation_member_synthesizes_shift() {
        let synth = synthesizer();
        for (shifted, unshifted) in SHIFTED_PUNCTUATION.iter().zip(UNSHIFTED_PUNCTUATION) {
            let shifted_plan = synth.plan(shifted, &ModifierState::default()).unwrap();
            assert!(
                shifted_plan.events.iter().any(|e| e.vk == vk::SHIFT),
                "'{shifted}' must synthesize shift"
            );

            let unshifted_plan = synth.plan(unshifted, &ModifierState::default()).unwrap();
            assert!(
                unshifted_plan.events.iter().all(|e| e.vk != vk::SHIFT),
                "'{unshifted}' must not synthesize shift"
            );
        }
    }

    #[test]
    fn number_row_symbols_are_shifted_digits() {
        let plan = synthesizer()
            .plan("exclamation_mark", &ModifierState::default())
            .unwrap();
        assert_eq!(
            plan.events,
            vec![press(vk::SHIFT), press(0x31), release(0x31), release(vk::SHIFT)]
        );
    }

    #[test]
    fn control_chords_bracket_key_with_control_then_shift() {
        let plan = synthesizer()
            .plan("find_all", &ModifierState::default())
            .unwrap();
        assert_eq!(
            plan.events,
            vec![
                press(vk::CONTROL),
                press(vk::SHIFT),
                press(vk::KEY_F),
                release(vk::KEY_F),
                release(vk::SHIFT),
                release(vk::CONTROL),
            ]
        );

        let copy = synthesizer().plan("copy", &ModifierState::default()).unwrap();
        assert_eq!(
            copy.events,
            vec![press(vk::CONTROL), press(vk::KEY_C), release(vk::KEY_C), release(vk::CONTROL)]
        );
    }

    #[test]
    fn tap_presses_strictly_precede_releases_of_same_key() {
        let synth = synthesizer();
        for button in ["escape", "A", "colon", "dollar", "find_file", "delete"] {
            let plan = synth.plan(button, &ModifierState::default()).unwrap();
            for event in &plan.events {
                if event.direction == Direction::Release {
                    let press_pos = plan
                        .events
                        .iter()
                        .position(|e| e.vk == event.vk && e.direction == Direction::Press);
                    let release_pos = plan
                        .events
                        .iter()
                        .position(|e| e.vk == event.vk && e.direction == Direction::Release);
                    assert!(press_pos.unwrap() < release_pos.unwrap());
                }
            }
        }
    }

    #[test]
    fn navigation_key_release_carries_extended_flag() {
        let plan = synthesizer()
            .plan("delete", &ModifierState::default())
            .unwrap();
        assert_eq!(plan.events[0].extended, false);
        assert_eq!(plan.events[1].direction, Direction::Release);
        assert!(plan.events[1].extended);
    }

    #[test]
    fn lock_key_effect_negates_polled_state() {
        let synth = synthesizer();
        let engaged = ModifierState {
            caps_lock: true,
            ..Default::default()
        };
        let plan = synth.plan("caps_lock", &engaged).unwrap();
        assert_eq!(
            plan.effect,
            StateEffect::LockToggled {
                lock: Lock::Caps,
                engaged: false
            }
        );
        assert_eq!(plan.events, vec![press(vk::CAPITAL), release(vk::CAPITAL)]);

        let plan = synth.plan("caps_lock", &ModifierState::default()).unwrap();
        assert_eq!(
            plan.effect,
            StateEffect::LockToggled {
                lock: Lock::Caps,
                engaged: true
            }
        );
    }

    #[test]
    fn sticky_modifier_toggle_is_idempotent_per_observed_state() {
        let synth = synthesizer();

        // Held: exactly one release, with the extended flag for control.
        let held = ModifierState {
            control: true,
            ..Default::default()
        };
        let plan = synth.plan("control", &held).unwrap();
        assert_eq!(plan.events.len(), 1);
        assert_eq!(plan.events[0].direction, Direction::Release);
        assert_eq!(plan.events[0].vk, vk::RCONTROL);
        assert!(plan.events[0].extended);
        assert_eq!(plan.effect, StateEffect::ModifierReleased(Sticky::Control));

        // Not held: exactly one press, no release.
        let plan = synth.plan("control", &ModifierState::default()).unwrap();
        assert_eq!(plan.events.len(), 1);
        assert_eq!(plan.events[0].direction, Direction::Press);
        assert_eq!(plan.effect, StateEffect::ModifierHeld(Sticky::Control));
    }

    #[test]
    fn sticky_windows_release_has_no_extended_flag() {
        let held = ModifierState {
            windows: true,
            ..Default::default()
        };
        let plan = synthesizer().plan("windows", &held).unwrap();
        assert_eq!(plan.events, vec![release(vk::RWIN)]);
        assert!(!plan.events[0].extended);
    }
}
