//! [`AvidaVm`] implementation.

use std::sync::Arc;

use avida_genome::{Data, Genome};

use crate::consts::{MEM_SIZE, NUM_HEADS, NUM_NOPS};
use crate::error::Fault;
use crate::head::{Head, HeadType};
use crate::inst_set::InstSet;
use crate::stack::Stack;

mod alu;
mod constructors;
mod debug;
mod flow;
mod heads;
mod internal;
mod memory;
mod replication;
mod stack_ops;

#[cfg(test)]
mod test_helpers;

/// Nop arguments, by canonical letter.
///
/// A nop byte directly after an instruction overrides that
/// instruction's default stack or head selection; executed on its own,
/// a nop changes nothing but the instruction pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Nop {
    /// `Nop-A` (id 0).
    A = 0,
    /// `Nop-B` (id 1).
    B = 1,
    /// `Nop-C` (id 2).
    C = 2,
    /// `Nop-D` (id 3).
    D = 3,
    /// `Nop-E` (id 4).
    E = 4,
    /// `Nop-F` (id 5).
    F = 5,
}

impl From<Nop> for usize {
    fn from(nop: Nop) -> usize {
        nop as usize
    }
}

/// Digital-organism virtual machine.
///
/// The hardware is a genome of one-byte opcodes, a fixed memory array,
/// six wrap-around stacks, six typed heads, and an offspring buffer
/// filled by `DivideCell`. One [`process_inst`](Self::process_inst)
/// call interprets exactly one instruction; recoverable faults bump a
/// counter instead of halting.
///
/// The instruction set is shared read-only; everything else is owned
/// exclusively by the VM and reinitialized by [`reset`](Self::reset).
#[derive(Debug, Clone)]
pub struct AvidaVm {
    inst_set: Arc<InstSet>,
    genome: Genome,
    memory: [Data; MEM_SIZE],
    heads: [Head; NUM_HEADS],
    stacks: [Stack; NUM_NOPS],
    offspring: Genome,
    error_count: usize,
    last_fault: Option<Fault>,
}

impl AvidaVm {
    /// Run exactly one instruction cycle: fold the opcode under the IP,
    /// advance the IP, and dispatch. The handler may consume further
    /// nop arguments, advancing the IP again.
    pub fn process_inst(&mut self) {
        let id = self.read_ip_inst();
        self.advance_ip();
        let inst_set = Arc::clone(&self.inst_set);
        inst_set.execute(self, id);
    }

    /// The shared instruction set.
    #[must_use]
    pub fn inst_set(&self) -> &InstSet {
        &self.inst_set
    }

    /// The genome currently executing.
    #[must_use]
    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// The memory array.
    #[must_use]
    pub fn memory(&self) -> &[Data] {
        &self.memory
    }

    /// Stack `id`, in `[0, NUM_NOPS)`.
    ///
    /// # Panics
    ///
    /// Panics when `id` is out of range.
    #[must_use]
    pub fn stack(&self, id: usize) -> &Stack {
        &self.stacks[id]
    }

    /// The head of the given type.
    #[must_use]
    pub fn head(&self, head: HeadType) -> &Head {
        &self.heads[head as usize]
    }

    /// Recoverable faults counted since the last reset.
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// The most recent fault, if any occurred since the last reset.
    #[must_use]
    pub fn last_fault(&self) -> Option<Fault> {
        self.last_fault
    }

    /// The genome split off by the last `DivideCell`; empty when no
    /// division happened since the last reset or drain.
    #[must_use]
    pub fn offspring(&self) -> &Genome {
        &self.offspring
    }

    /// Drain the offspring buffer, leaving it empty.
    pub fn take_offspring(&mut self) -> Genome {
        std::mem::take(&mut self.offspring)
    }
}
