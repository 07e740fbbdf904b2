//! Avida digital-organism virtual machine.
//!
//! Each organism is a linear program of one-byte opcodes (a genome)
//! interpreted on simulated hardware: six heads, six wrap-around
//! stacks, a fixed memory array, and the growable genome itself. The
//! interpreter is deterministic and bit-exact: evolutionary outcomes
//! depend on byte-for-byte semantics, so every instruction behaves
//! identically on every platform. Recoverable faults are counted, never
//! raised; no instruction halts the machine.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use avida_vm::prelude::*;
//!
//! let inst_set = Arc::new(AvidaVm::build_inst_set());
//! // Two `Const Nop-A` pushes followed by an `Add`.
//! let genome = inst_set.parse_sequence("gagak").unwrap();
//! let mut vm = AvidaVm::new(inst_set, genome);
//!
//! for _ in 0..3 {
//!     vm.process_inst();
//! }
//!
//! assert_eq!(vm.stack(0).top(), 2);
//! assert_eq!(vm.error_count(), 0);
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod consts;
pub mod error;
pub mod head;
pub mod inst_set;
pub mod interpreter;
pub mod stack;

#[doc(no_inline)]
pub use avida_genome;

pub mod prelude {
    //! Convenience re-exports for typical drivers.

    #[doc(no_inline)]
    pub use avida_genome::{symbol, Data, Genome, InstId};

    pub use crate::{
        consts::*,
        error::{Fault, RegistryError},
        head::{Head, HeadTarget, HeadType},
        inst_set::{InstFn, InstSet},
        interpreter::{AvidaVm, Nop},
        stack::Stack,
    };
}
