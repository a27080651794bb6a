//! On-screen annotations carried in the `Subtitles.txt` member.

use std::fmt::{self, Display};

use bk2prs_input::ChatFrame;

/// One subtitle line. `(0, 0)` is the top-left corner; `length` is the
/// display duration in frames; `color` is ARGB hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub frame: u32,
    pub message: String,
    pub x_pos: u32,
    pub y_pos: u32,
    pub length: u32,
    pub color: String,
}

impl Subtitle {
    pub fn new(frame: u32, message: impl Into<String>) -> Self {
        Self {
            frame,
            message: message.into(),
            x_pos: 0,
            y_pos: 0,
            length: 60,
            color: "FFFFFFFF".to_owned(),
        }
    }

    /// Renders a chat event as a subtitle at its originating frame index.
    pub fn from_chat(frame: u32, chat: &ChatFrame) -> Self {
        Self::new(frame, format!("<{}> {}", chat.user, chat.message))
    }
}

impl Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "subtitle {} {} {} {} {}",
            self.frame, self.x_pos, self.y_pos, self.length, self.message
        )
    }
}
