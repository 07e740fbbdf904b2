//! Head positioning handlers.

use avida_genome::Data;

use super::{AvidaVm, Nop};
use crate::head::HeadType;


impl AvidaVm {
    /// Push the position of head [FLOW] onto stack [Nop-A].
    pub(crate) fn inst_head_pos(&mut self) {
        let h = self.get_head_arg(HeadType::Flow);
        let pos = self.heads[h].pos() as Data;
        let dst = self.get_arg(Nop::A);
        self.stacks[dst].push(pos);
    }

    /// Pop stack [Nop-A] and move head [FLOW] to that position.
    ///
    /// Negative values sign-extend out of range, which is benign: reads
    /// there yield 0 and writes are bounded by the buffer.
    pub(crate) fn inst_set_head(&mut self) {
        let src = self.get_arg(Nop::A);
        let new_pos = self.stacks[src].pop();
        let h = self.get_head_arg(HeadType::Flow);
        self.heads[h].set_pos(new_pos as usize);
    }

    /// Move head [IP] to the position of head [FLOW]. Only the
    /// position moves; a head never changes buffers.
    pub(crate) fn inst_jump_head(&mut self) {
        let dst = self.get_head_arg(HeadType::Ip);
        let src = self.get_head_arg(HeadType::Flow);
        let pos = self.heads[src].pos();
        self.heads[dst].set_pos(pos);
    }

    /// Shift head [FLOW] by the popped value of stack [Nop-A].
    pub(crate) fn inst_offset_head(&mut self) {
        let h = self.get_head_arg(HeadType::Flow);
        let src = self.get_arg(Nop::A);
        let delta = self.stacks[src].pop();
        let pos = self.heads[h].pos().wrapping_add_signed(delta as isize);
        self.heads[h].set_pos(pos);
    }
}
