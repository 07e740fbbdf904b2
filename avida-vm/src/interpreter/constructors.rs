//! Construction and lifecycle for the [`AvidaVm`].

use std::array;
use std::sync::Arc;

use avida_genome::Genome;

use super::AvidaVm;
use crate::consts::{MEM_SIZE, NUM_HEADS};
use crate::head::{Head, HeadTarget};
use crate::inst_set::{InstFn, InstSet};
use crate::stack::Stack;

impl AvidaVm {
    /// Create a VM bound to the shared `inst_set`, executing `genome`.
    #[must_use]
    pub fn new(inst_set: Arc<InstSet>, genome: Genome) -> Self {
        let mut vm = Self {
            inst_set,
            genome,
            memory: [0; MEM_SIZE],
            heads: [Head::new(0, HeadTarget::Genome); NUM_HEADS],
            stacks: array::from_fn(|_| Stack::new()),
            offspring: Genome::new(),
            error_count: 0,
            last_fault: None,
        };
        vm.reset();
        vm
    }

    /// Reinitialize heads, stacks, memory, fault state, and offspring.
    ///
    /// The genome write head restarts at the genome end; every other
    /// head restarts at 0 on its own buffer.
    pub fn reset(&mut self) {
        let end = self.genome.len();
        self.heads = [
            Head::new(0, HeadTarget::Genome),   // instruction pointer
            Head::new(0, HeadTarget::Genome),   // genome read
            Head::new(end, HeadTarget::Genome), // genome write
            Head::new(0, HeadTarget::Memory),   // memory read
            Head::new(0, HeadTarget::Memory),   // memory write
            Head::new(0, HeadTarget::Genome),   // flow control
        ];
        for stack in &mut self.stacks {
            stack.reset();
        }
        self.memory = [0; MEM_SIZE];
        self.offspring = Genome::new();
        self.error_count = 0;
        self.last_fault = None;
    }

    /// Install a new genome, then [`reset`](Self::reset).
    pub fn reset_with_genome(&mut self, genome: Genome) {
        self.genome = genome;
        self.reset();
    }

    /// Build the canonical instruction set: the six nops followed by
    /// the 32 operations, in dispatch order.
    #[must_use]
    pub fn build_inst_set() -> InstSet {
        let mut set = InstSet::new();

        for name in ["Nop-A", "Nop-B", "Nop-C", "Nop-D", "Nop-E", "Nop-F"] {
            set.add_nop(name).expect("nops are registered first");
        }

        let ops: [(&str, InstFn); 32] = [
            ("Const", AvidaVm::inst_const),
            ("Offset", AvidaVm::inst_offset),
            ("Not", AvidaVm::inst_not),
            ("Shift", AvidaVm::inst_shift),
            ("Add", AvidaVm::inst_add),
            ("Sub", AvidaVm::inst_sub),
            ("Mult", AvidaVm::inst_mult),
            ("Div", AvidaVm::inst_div),
            ("Mod", AvidaVm::inst_mod),
            ("Exp", AvidaVm::inst_exp),
            ("Sort", AvidaVm::inst_sort),
            ("TestLess", AvidaVm::inst_test_less),
            ("TestEqu", AvidaVm::inst_test_equ),
            ("Nand", AvidaVm::inst_nand),
            ("Xor", AvidaVm::inst_xor),
            ("If", AvidaVm::inst_if),
            ("IfNot", AvidaVm::inst_if_not),
            ("Scope", AvidaVm::inst_scope),
            ("Continue", AvidaVm::inst_continue),
            ("Break", AvidaVm::inst_break),
            ("StackPop", AvidaVm::inst_stack_pop),
            ("StackDup", AvidaVm::inst_stack_dup),
            ("StackSwap", AvidaVm::inst_stack_swap),
            ("StackMove", AvidaVm::inst_stack_move),
            ("CopyInst", AvidaVm::inst_copy_inst),
            ("Load", AvidaVm::inst_load),
            ("Store", AvidaVm::inst_store),
            ("DivideCell", AvidaVm::inst_divide_cell),
            ("HeadPos", AvidaVm::inst_head_pos),
            ("SetHead", AvidaVm::inst_set_head),
            ("JumpHead", AvidaVm::inst_jump_head),
            ("OffsetHead", AvidaVm::inst_offset_head),
        ];
        for (name, fun) in ops {
            set.add_inst(name, fun).expect("canonical set fits the registry");
        }

        set
    }
}
