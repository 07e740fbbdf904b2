//! Memory access handlers.

use super::{AvidaVm, Nop};
use crate::head::HeadType;


impl AvidaVm {
    /// Read through head [M_READ], push onto stack [Nop-A], and advance
    /// the head. Pop-free.
    pub(crate) fn inst_load(&mut self) {
        let h = self.get_head_arg(HeadType::MemRead);
        let value = self.read_head(h);
        let dst = self.get_arg(Nop::A);
        self.stacks[dst].push(value);
        self.advance_head(h);
    }

    /// Pop stack [Nop-A], write through head [M_WRITE], and advance the
    /// head. Writes past the end of memory are counted faults.
    pub(crate) fn inst_store(&mut self) {
        let src = self.get_arg(Nop::A);
        let value = self.stacks[src].pop();
        let h = self.get_head_arg(HeadType::MemWrite);
        self.write_head(h, value);
        self.advance_head(h);
    }
}
