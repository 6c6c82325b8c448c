use thiserror::Error;

/// Fatal conditions reported by [`GameBoy`](crate::GameBoy) run loops.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum Error {
    /// The CPU fetched an opcode with no defined behaviour. The machine
    /// refuses to run any further.
    #[error("invalid opcode 0x{opcode:02X} at 0x{address:04X}")]
    InvalidOpcode { opcode: u8, address: u16 },
}
