//! Key descriptors binding input-log columns to controller attributes.

/// Axis role of a key. A key carries at most one role, so the role is an
/// `Option<Axis>` on [`KeyMap`] rather than a pair of flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One input-log column: the key name BizHawk expects, the single-character
/// token written when the control is pressed, and an optional binding to a
/// logical pad attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyMap {
    key: String,
    token: String,
    attr: Option<String>,
    axis: Option<Axis>,
}

impl KeyMap {
    pub fn new(key: &str, token: &str, attr: Option<&str>, axis: Option<Axis>) -> Self {
        Self {
            key: key.to_owned(),
            token: token.to_owned(),
            attr: attr.map(str::to_owned),
            axis,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn attr(&self) -> Option<&str> {
        self.attr.as_deref()
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    /// Returns the key with per-port axis correction applied.
    ///
    /// When `swap` is set and this key has an axis role, the key name and the
    /// bound attribute name are renamed to the opposite axis (`X`/`x` ↔
    /// `Y`/`y`, case preserved per occurrence). The axis role itself is left
    /// alone, so applying the transform twice restores the original key.
    /// Non-axis keys and unswapped ports come back unchanged.
    pub fn swapped(&self, swap: bool) -> KeyMap {
        if !swap {
            return self.clone();
        }
        match self.axis {
            Some(Axis::X) => self.axis_renamed('X', 'Y'),
            Some(Axis::Y) => self.axis_renamed('Y', 'X'),
            None => self.clone(),
        }
    }

    fn axis_renamed(&self, from: char, to: char) -> KeyMap {
        let from_lower = from.to_ascii_lowercase();
        let to_lower = to.to_ascii_lowercase();
        KeyMap {
            key: self.key.replace(from, &to.to_string()),
            token: self.token.clone(),
            attr: self.attr.as_ref().map(|attr| {
                attr.replace(from, &to.to_string())
                    .replace(from_lower, &to_lower.to_string())
            }),
            axis: self.axis,
        }
    }
}

/// Static key definition used for the canonical layout tables below.
#[derive(Debug, Clone, Copy)]
pub struct KeyDef {
    pub key: &'static str,
    pub token: &'static str,
    pub attr: Option<&'static str>,
    pub axis: Option<Axis>,
}

impl KeyDef {
    pub const fn button(key: &'static str, token: &'static str) -> Self {
        Self {
            key,
            token,
            attr: None,
            axis: None,
        }
    }

    pub const fn bound(key: &'static str, token: &'static str, attr: &'static str) -> Self {
        Self {
            key,
            token,
            attr: Some(attr),
            axis: None,
        }
    }

    pub const fn stick(key: &'static str, attr: &'static str, axis: Axis) -> Self {
        Self {
            key,
            token: "",
            attr: Some(attr),
            axis: Some(axis),
        }
    }
}

impl From<KeyDef> for KeyMap {
    fn from(def: KeyDef) -> Self {
        KeyMap::new(def.key, def.token, def.attr, def.axis)
    }
}

/// Power-row keys, in column order.
pub const POWER_KEYS: &[KeyDef] = &[KeyDef::button("Reset", ""), KeyDef::button("Power", "")];

/// Per-port keys, in column order.
///
/// This order is part of the `.bk2` input-log format and is identical for
/// every supported core; reordering it silently desyncs playback.
pub const PORT_KEYS: &[KeyDef] = &[
    KeyDef::stick("Y Axis", "stick_y", Axis::Y),
    KeyDef::stick("X Axis", "stick_x", Axis::X),
    // Analog directions; no pad attribute carries them.
    KeyDef::button("A Up", ""),
    KeyDef::button("A Down", ""),
    KeyDef::button("A Left", ""),
    KeyDef::button("A Right", ""),
    KeyDef::bound("DPad U", "U", "u_dpad"),
    KeyDef::bound("DPad D", "D", "d_dpad"),
    KeyDef::bound("DPad L", "L", "l_dpad"),
    KeyDef::bound("DPad R", "R", "r_dpad"),
    KeyDef::bound("Start", "S", "start_button"),
    KeyDef::bound("Z", "Z", "z_trig"),
    KeyDef::bound("B", "B", "b_button"),
    KeyDef::bound("A", "A", "a_button"),
    KeyDef::bound("C Up", "u", "u_cbutton"),
    KeyDef::bound("C Down", "d", "d_cbutton"),
    KeyDef::bound("C Left", "l", "l_cbutton"),
    KeyDef::bound("C Right", "r", "r_cbutton"),
    KeyDef::bound("L", "l", "l_trig"),
    KeyDef::bound("R", "r", "r_trig"),
];
