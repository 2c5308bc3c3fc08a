//! Terminal bell chime adapter.

use crate::ports::outbound::Chime;
use std::io::{self, Write};

/// Rings the terminal bell by writing BEL (0x07) to stdout.
///
/// Works inside the alternate screen. Terminals configured silent flash
/// the screen instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn ring(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(b"\x07")?;
        stdout.flush()
    }
}
