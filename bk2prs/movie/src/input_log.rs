//! Assembly of the `Input Log.txt` member.

use std::io::{self, Write};
use std::iter;

use bk2prs_input::{ControllerFrame, PadView, NUM_PORTS};

use crate::layout::ControllerLayout;

/// Default per-port axis-swap policy: alternating ports have physically
/// transposed stick wiring.
pub const DEFAULT_PORT_SWAP: [bool; NUM_PORTS] = [false, true, false, true];

/// The full input-log description: one power layout, one layout per plugged
/// port, and the per-port swap flags. Built once before any frame is
/// rendered and read-only afterwards, so every line of the log has the same
/// width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLog {
    pub power: ControllerLayout,
    pub ports: [Option<ControllerLayout>; NUM_PORTS],
    pub port_swap: [bool; NUM_PORTS],
    pub tag: String,
}

impl InputLog {
    pub fn new(
        power: ControllerLayout,
        ports: [Option<ControllerLayout>; NUM_PORTS],
        port_swap: [bool; NUM_PORTS],
    ) -> Self {
        Self {
            power,
            ports,
            port_swap,
            tag: "Input".to_owned(),
        }
    }

    pub fn header_line(&self) -> String {
        format!("[{}]", self.tag)
    }

    pub fn footer_line(&self) -> String {
        format!("[/{}]", self.tag)
    }

    /// The machine-readable column description: the power fragment, then one
    /// `#`-prefixed fragment per plugged port in ascending index order.
    /// Unplugged ports are absent entirely.
    pub fn log_key_line(&self) -> String {
        let mut line = String::from("log_key:#");
        line.push_str(&self.power.log_key_power());
        for (port, layout) in self.ports.iter().enumerate() {
            let Some(layout) = layout else { continue };
            line.push('#');
            line.push_str(&layout.log_key_fragment(port, self.port_swap[port]));
        }
        line
    }

    /// Renders one frame: the power segment, then one segment per plugged
    /// port. Pad data for unplugged ports contributes nothing.
    pub fn frame_line(&self, frame: &ControllerFrame) -> String {
        let mut line = String::from("|");
        line.push_str(&self.power.render(None, false));
        line.push('|');
        for (port, layout) in self.ports.iter().enumerate() {
            let Some(layout) = layout else { continue };
            let data = frame.pads[port].as_ref().map(|pad| pad as &dyn PadView);
            line.push_str(&layout.render(data, self.port_swap[port]));
            line.push('|');
        }
        line
    }

    /// All lines of the log member, in order and without terminators:
    /// header, log key, one line per frame in arrival order, footer.
    pub fn lines<'a>(
        &'a self,
        frames: &'a [ControllerFrame],
    ) -> impl Iterator<Item = String> + 'a {
        iter::once(self.header_line())
            .chain(iter::once(self.log_key_line()))
            .chain(frames.iter().map(|frame| self.frame_line(frame)))
            .chain(iter::once(self.footer_line()))
    }

    /// Writes the whole member, CRLF-terminating every line.
    pub fn write_to<W: Write>(&self, writer: &mut W, frames: &[ControllerFrame]) -> io::Result<()> {
        for line in self.lines(frames) {
            write!(writer, "{line}\r\n")?;
        }
        Ok(())
    }
}
