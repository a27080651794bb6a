//! Construction of BizHawk `.bk2` movies from recorded N64 netplay input.
//!
//! The `.bk2` container is a zip archive of text members: a header, a
//! delimited input log, subtitles, comments, and the chosen core's sync
//! settings as compact JSON. Everything here is a deterministic, single-pass
//! transform — the same frames, ROM, and core always produce byte-identical
//! text members.

#![recursion_limit = "256"]

pub mod builder;
pub mod cores;
pub mod error;
pub mod header;
pub mod input_log;
pub mod keymap;
pub mod layout;
pub mod subtitle;

pub use builder::MovieBuilder;
pub use cores::{Core, SyncSettings};
pub use error::{BuildError, UnsupportedCore};
pub use header::{sha1_hex, Game, Header};
pub use input_log::{InputLog, DEFAULT_PORT_SWAP};
pub use keymap::{Axis, KeyDef, KeyMap, PORT_KEYS, POWER_KEYS};
pub use layout::{encode_key, ControllerLayout, DEFAULT_EMPTY_TOKEN};
pub use subtitle::Subtitle;
