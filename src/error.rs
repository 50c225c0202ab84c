use thiserror::Error;

use crate::addressing::Mode;
use crate::opcodes::Mnemonic;

/// The small, local error taxonomy for the CPU core and the program loader built on top
/// of it. `UnknownOpcode`, `UnsupportedMode`, and `BadBranchOffset` are fatal to the
/// fetch/decode/execute loop: a tick that returns one of them always halts the clock.
#[derive(Debug, Error)]
pub enum Error {
    /// The fetch stage read a byte that does not name one of the 151 documented opcodes.
    #[error("unknown opcode 0x{0:02x}")]
    UnknownOpcode(u8),

    /// The decoder was asked for an effective address on a mode that has none
    /// (`Accumulator`, `Implied`).
    #[error("{mnemonic:?} cannot use the {mode:?} addressing mode")]
    UnsupportedMode { mode: Mode, mnemonic: Mnemonic },

    /// Defensive: a branch target computation produced something the decoder could not
    /// represent as a 16-bit address. Should not occur for any valid `u16` PC, since
    /// relative addressing wraps, but the contract is checked rather than assumed.
    #[error("invalid branch offset computation")]
    BadBranchOffset,

    /// A program image would write past the top of the 64 KiB address space starting
    /// at the configured load address.
    #[error("program is {len} bytes, but only {available} bytes are available from the load address")]
    ProgramTooLarge { len: usize, available: usize },

    /// Surfaced by the CLI's loader when the program file cannot be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
