//! Registry and runtime error types.

use thiserror::Error;

/// Errors from building or querying an instruction set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A nop was registered after a non-nop operation; nops must occupy
    /// the leading ids.
    #[error("nop instructions must be registered before any operation")]
    NopAfterOperation,
    /// The set already holds the maximum number of instructions.
    #[error("instruction set is full")]
    SetFull,
    /// An instruction with this name already exists in the set.
    #[error("duplicate instruction name `{0}`")]
    DuplicateName(String),
    /// A sequence symbol names no instruction in the set.
    #[error("unknown instruction symbol `{0}`")]
    UnknownSymbol(char),
}

/// Recoverable faults counted during execution.
///
/// A fault bumps the VM's error counter and otherwise behaves as a
/// no-op: nothing is pushed, written, or emitted, and execution never
/// halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Fault {
    /// `Div` or `Mod` with a zero divisor.
    #[error("division or modulo by zero")]
    DivisionByZero,
    /// A store aimed past the end of memory.
    #[error("memory write out of range")]
    MemoryWriteOutOfRange,
    /// `DivideCell` with an empty or out-of-range genome span.
    #[error("invalid divide geometry")]
    InvalidDivide,
}
