//! Self-copying and cell division.

use core::mem;

use crate::error::Fault;
use crate::head::HeadType;

use super::AvidaVm;


impl AvidaVm {
    /// Copy one value from head [G_READ] to head [G_WRITE], advancing
    /// both.
    ///
    /// Writing through a genome head inserts before the head (or
    /// appends past the end), so a write head parked at the genome end
    /// extends the program byte by byte: the replication loop that
    /// evolution builds everything else on.
    pub(crate) fn inst_copy_inst(&mut self) {
        let read = self.get_head_arg(HeadType::GenomeRead);
        let write = self.get_head_arg(HeadType::GenomeWrite);
        let value = self.read_head(read);
        self.write_head(write, value);
        self.advance_head(read);
        self.advance_head(write);
    }

    /// Split the span between heads [G_READ] and [G_WRITE] off into the
    /// offspring buffer.
    ///
    /// The span is normalized (positions swapped if reversed, end
    /// clamped to the genome); an empty or fully out-of-range span is a
    /// counted fault and leaves everything untouched. On success the
    /// write head moves to the split point and the read head restarts
    /// at 0.
    pub(crate) fn inst_divide_cell(&mut self) {
        let read = self.get_head_arg(HeadType::GenomeRead);
        let write = self.get_head_arg(HeadType::GenomeWrite);
        let mut start = self.heads[read].pos();
        let mut end = self.heads[write].pos();
        if end < start {
            mem::swap(&mut start, &mut end);
        }
        let end = end.min(self.genome.len());
        if start >= self.genome.len() || start == end {
            self.record_fault(Fault::InvalidDivide);
            return;
        }
        self.offspring = self.genome.extract(start, end);
        self.heads[write].set_pos(start);
        self.heads[read].set_pos(0);
    }
}
