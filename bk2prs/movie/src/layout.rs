//! Per-controller key layouts and the frame-token encoder.

use std::fmt::Write;

use bk2prs_input::PadView;

use crate::keymap::{KeyDef, KeyMap};

/// Placeholder written for an unpressed or unbound button.
pub const DEFAULT_EMPTY_TOKEN: &str = ".";

/// Renders one key of one frame into `out`.
///
/// Axis keys render the bound attribute right-justified to width 5 followed
/// by a comma, with the per-port swap transform applied before the read.
/// Button keys render their token when the reading is true, the empty
/// placeholder otherwise. Missing data, an unbound key, or an attribute the
/// record does not carry all fall back the same way: `    0,` for axes, the
/// placeholder for buttons. A present-but-zero axis still renders through the
/// data path.
pub fn encode_key(map: &KeyMap, data: Option<&dyn PadView>, swap: bool, empty: &str, out: &mut String) {
    if map.axis().is_some() {
        let value = match (data, map.attr()) {
            (Some(data), Some(_)) => {
                let swapped = map.swapped(swap);
                swapped
                    .attr()
                    .and_then(|attr| data.axis(attr))
                    .unwrap_or(0)
            }
            _ => 0,
        };
        let _ = write!(out, "{value:>5},");
    } else {
        let pressed = match (data, map.attr()) {
            (Some(data), Some(attr)) => data.button(attr).unwrap_or(false),
            _ => false,
        };
        out.push_str(if pressed { map.token() } else { empty });
    }
}

/// An ordered run of [`KeyMap`]s for one controller role.
///
/// The declaration order is the on-wire column order; rendering and the
/// log-key fragments iterate the same sequence so they can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerLayout {
    maps: Vec<KeyMap>,
    empty: String,
}

impl ControllerLayout {
    pub fn new(maps: Vec<KeyMap>) -> Self {
        Self {
            maps,
            empty: DEFAULT_EMPTY_TOKEN.to_owned(),
        }
    }

    pub fn from_defs(defs: &[KeyDef]) -> Self {
        Self::new(defs.iter().copied().map(KeyMap::from).collect())
    }

    /// Overrides the placeholder token written for unpressed buttons.
    pub fn with_empty_token(mut self, empty: &str) -> Self {
        self.empty = empty.to_owned();
        self
    }

    pub fn maps(&self) -> &[KeyMap] {
        &self.maps
    }

    /// Renders one frame's worth of tokens for this layout.
    pub fn render(&self, data: Option<&dyn PadView>, swap: bool) -> String {
        let mut out = String::new();
        for map in &self.maps {
            encode_key(map, data, swap, &self.empty, &mut out);
        }
        out
    }

    /// Log-key fragment for a gameplay port: `P{n} {key}|` per column, with
    /// the same swap transform the renderer applies.
    pub fn log_key_fragment(&self, player: usize, swap: bool) -> String {
        let mut out = String::new();
        for map in &self.maps {
            let swapped = map.swapped(swap);
            let _ = write!(out, "P{} {}|", player + 1, swapped.key());
        }
        out
    }

    /// Log-key fragment for the power row: bare `{key}|` per column.
    pub fn log_key_power(&self) -> String {
        let mut out = String::new();
        for map in &self.maps {
            let _ = write!(out, "{}|", map.key());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use bk2prs_input::{Pad, PadButtons};

    use super::*;
    use crate::keymap::{PORT_KEYS, POWER_KEYS};

    fn port_layout() -> ControllerLayout {
        ControllerLayout::from_defs(PORT_KEYS)
    }

    #[test]
    fn render_without_data_is_all_fallback_tokens() {
        let layout = port_layout();
        let line = layout.render(None, false);

        // Two axes then eighteen buttons.
        assert_eq!(line, format!("    0,    0,{}", ".".repeat(18)));

        let power = ControllerLayout::from_defs(POWER_KEYS);
        assert_eq!(power.render(None, false), "..");
    }

    #[test]
    fn render_reads_bound_attributes() {
        let layout = port_layout();
        let pad = Pad {
            buttons: PadButtons::A | PadButtons::D_UP,
            stick_x: 10,
            stick_y: -5,
        };

        let line = layout.render(Some(&pad), false);
        assert_eq!(line, "   -5,   10,....U......A......");
    }

    #[test]
    fn render_swaps_axis_reads() {
        let layout = port_layout();
        let pad = Pad {
            buttons: PadButtons::NONE,
            stick_x: 7,
            stick_y: -3,
        };

        // With the port swapped, the Y Axis column reads stick_x and vice versa.
        let line = layout.render(Some(&pad), true);
        assert!(line.starts_with("    7,   -3,"));
    }

    #[test]
    fn every_key_yields_exactly_one_token() {
        let layout = port_layout();
        let pad = Pad::BLANK;

        for data in [None, Some(&pad as &dyn PadView)] {
            let line = layout.render(data, false);
            // Axis tokens are 6 chars ("nnnnn,"), button tokens 1 char.
            assert_eq!(line.len(), 2 * 6 + 18);
            assert_eq!(line.matches(',').count(), 2);
        }
    }

    #[test]
    fn custom_empty_token() {
        let layout = ControllerLayout::from_defs(POWER_KEYS).with_empty_token("_");
        assert_eq!(layout.render(None, false), "__");
    }

    #[test]
    fn log_key_fragment_matches_render_order() {
        let layout = port_layout();
        let fragment = layout.log_key_fragment(0, false);

        assert!(fragment.starts_with("P1 Y Axis|P1 X Axis|P1 A Up|"));
        assert!(fragment.ends_with("P1 L|P1 R|"));
        assert_eq!(fragment.matches('|').count(), layout.maps().len());
    }

    #[test]
    fn log_key_fragment_applies_swap() {
        let layout = port_layout();
        let fragment = layout.log_key_fragment(1, true);
        assert!(fragment.starts_with("P2 X Axis|P2 Y Axis|"));
    }
}
