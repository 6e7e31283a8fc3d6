//! Configuration surface for keystrip
//!
//! Two external inputs feed the core: the launchable-app descriptor list
//! (JSON, validated on load) and the static button-to-key mapping table
//! (compiled-in data, constructed once and injected).

pub mod apps;
pub mod keymap;

pub use apps::{ConfigError, TargetApp};
pub use keymap::Keymap;
