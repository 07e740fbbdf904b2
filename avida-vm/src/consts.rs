//! VM parameters.

use avida_genome::Data;

/// Number of nop modifier instructions; also the stack count.
pub const NUM_NOPS: usize = 6;

/// Number of hardware heads.
pub const NUM_HEADS: usize = 6;

/// Stack slots before the cursor wraps.
pub const STACK_DEPTH: usize = 16;

/// Physical memory size, in data words.
pub const MEM_SIZE: usize = 64;

/// Maximum number of distinct instructions in a set.
pub const MAX_INSTS: usize = 256;

/// Maximum genome length during execution.
pub const MAX_GENOME_SIZE: usize = 2048;

/// Bits in a data word.
pub const DATA_BITS: u32 = Data::BITS;

/// Values reachable through `Const` and `Offset`, indexed by nop
/// argument.
pub const CONST_VALS: [Data; NUM_NOPS] = [1, 2, 4, 16, 256, -1];

/// Default probability that a random genome position is a nop.
pub const DEFAULT_P_NOP: f64 = 0.5;
