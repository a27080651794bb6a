use serde::{Deserialize, Serialize};

use crate::pad::Pad;

/// Number of controller ports on the console.
pub const NUM_PORTS: usize = 4;

/// One event of a recorded session, in playback order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameEvent {
    /// Controller state for one frame.
    Controller(ControllerFrame),
    /// A chat message typed during the session.
    Chat(ChatFrame),
}

impl FrameEvent {
    pub fn as_controller(&self) -> Option<&ControllerFrame> {
        match self {
            FrameEvent::Controller(frame) => Some(frame),
            _ => None,
        }
    }

    pub fn as_chat(&self) -> Option<&ChatFrame> {
        match self {
            FrameEvent::Chat(chat) => Some(chat),
            _ => None,
        }
    }
}

/// Per-port controller readings for one frame. Ports without a reading
/// hold `None`; out-of-range port indices are unrepresentable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerFrame {
    pub pads: [Option<Pad>; NUM_PORTS],
}

impl ControllerFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper for setting one port's pad.
    pub fn with_pad(mut self, port: usize, pad: Pad) -> Self {
        self.pads[port] = Some(pad);
        self
    }
}

/// A chat message and the nickname that sent it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatFrame {
    pub user: String,
    pub message: String,
}

/// Reports which ports carried pad data anywhere in the given frames.
///
/// Recordings do not declare their port count up front, so callers usually
/// scan a prefix of the stream (the first hundred frames or so is plenty).
pub fn detect_ports<'a, I>(frames: I) -> [bool; NUM_PORTS]
where
    I: IntoIterator<Item = &'a ControllerFrame>,
{
    let mut plugged = [false; NUM_PORTS];
    for frame in frames {
        for (port, pad) in frame.pads.iter().enumerate() {
            if pad.is_some() {
                plugged[port] = true;
            }
        }
    }
    plugged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::PadButtons;

    #[test]
    fn detect_ports_unions_all_frames() {
        let frames = [
            ControllerFrame::new().with_pad(0, Pad::BLANK),
            ControllerFrame::new().with_pad(2, Pad::BLANK),
            ControllerFrame::new().with_pad(0, Pad::BLANK),
        ];

        assert_eq!(detect_ports(&frames), [true, false, true, false]);
    }

    #[test]
    fn detect_ports_empty_stream() {
        let frames: &[ControllerFrame] = &[];
        assert_eq!(detect_ports(frames), [false; NUM_PORTS]);
    }

    #[test]
    fn event_accessors() {
        let chat = FrameEvent::Chat(ChatFrame {
            user: "player1".to_owned(),
            message: "gg".to_owned(),
        });
        assert!(chat.as_controller().is_none());
        assert_eq!(chat.as_chat().unwrap().message, "gg");

        let pad = Pad {
            buttons: PadButtons::START,
            ..Pad::BLANK
        };
        let frame = FrameEvent::Controller(ControllerFrame::new().with_pad(1, pad));
        assert_eq!(frame.as_controller().unwrap().pads[1], Some(pad));
    }
}
