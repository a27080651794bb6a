//! Controller-input value types shared by the movie encoder.
//!
//! A recording parser produces an ordered stream of [`FrameEvent`]s; the
//! movie crate consumes them without knowing anything about the on-disk
//! format they came from.

pub mod frame;
pub mod pad;

pub use frame::{detect_ports, ChatFrame, ControllerFrame, FrameEvent, NUM_PORTS};
pub use pad::{Pad, PadButtons, PadView};
