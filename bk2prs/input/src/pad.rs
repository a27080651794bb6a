use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Digital buttons of a standard N64 controller.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PadButtons: u16 {
        const NONE = 0;

        const D_RIGHT = 1 << 0;
        const D_LEFT = 1 << 1;
        const D_DOWN = 1 << 2;
        const D_UP = 1 << 3;

        const START = 1 << 4;
        const Z = 1 << 5;
        const B = 1 << 6;
        const A = 1 << 7;

        const C_RIGHT = 1 << 8;
        const C_LEFT = 1 << 9;
        const C_DOWN = 1 << 10;
        const C_UP = 1 << 11;

        const R = 1 << 12;
        const L = 1 << 13;
    }
}

/// One controller's readings for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pad {
    pub buttons: PadButtons,
    pub stick_x: i8,
    pub stick_y: i8,
}

impl Pad {
    pub const BLANK: Pad = Pad {
        buttons: PadButtons::NONE,
        stick_x: 0,
        stick_y: 0,
    };
}

impl Default for Pad {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Read-out of a controller record by logical attribute name.
///
/// The movie encoder binds output columns to attribute names rather than to
/// struct fields, so the key layout stays independent of any one pad type.
/// Readers return `None` for attribute names they do not carry; the encoder
/// renders its fallback token in that case.
pub trait PadView {
    /// Reads a boolean control, e.g. `"a_button"` or `"u_dpad"`.
    fn button(&self, attr: &str) -> Option<bool>;
    /// Reads a numeric control, e.g. `"stick_x"`.
    fn axis(&self, attr: &str) -> Option<i16>;
}

impl PadView for Pad {
    fn button(&self, attr: &str) -> Option<bool> {
        let flag = match attr {
            "u_dpad" => PadButtons::D_UP,
            "d_dpad" => PadButtons::D_DOWN,
            "l_dpad" => PadButtons::D_LEFT,
            "r_dpad" => PadButtons::D_RIGHT,
            "start_button" => PadButtons::START,
            "z_trig" => PadButtons::Z,
            "b_button" => PadButtons::B,
            "a_button" => PadButtons::A,
            "u_cbutton" => PadButtons::C_UP,
            "d_cbutton" => PadButtons::C_DOWN,
            "l_cbutton" => PadButtons::C_LEFT,
            "r_cbutton" => PadButtons::C_RIGHT,
            "l_trig" => PadButtons::L,
            "r_trig" => PadButtons::R,
            _ => return None,
        };
        Some(self.buttons.contains(flag))
    }

    fn axis(&self, attr: &str) -> Option<i16> {
        match attr {
            "stick_x" => Some(self.stick_x.into()),
            "stick_y" => Some(self.stick_y.into()),
            _ => None,
        }
    }
}
