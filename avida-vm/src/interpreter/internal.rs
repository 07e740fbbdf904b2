//! Decoding helpers shared by the instruction handlers.

use avida_genome::{Data, InstId};

use super::AvidaVm;
use crate::consts::{MAX_GENOME_SIZE, NUM_NOPS};
use crate::error::Fault;
use crate::head::{HeadTarget, HeadType};

impl AvidaVm {
    pub(crate) fn ip(&self) -> usize {
        self.heads[HeadType::Ip as usize].pos()
    }

    pub(crate) fn set_ip(&mut self, pos: usize) {
        self.heads[HeadType::Ip as usize].set_pos(pos);
    }

    pub(crate) fn advance_ip(&mut self) {
        self.heads[HeadType::Ip as usize].advance();
    }

    /// Fold an arbitrary data value into a valid instruction id.
    pub(crate) fn to_valid_inst(&self, value: Data) -> InstId {
        let size = self.inst_set.len() as Data;
        if size == 0 {
            return 0;
        }
        value.rem_euclid(size) as InstId
    }

    /// Folded opcode at `pos`, while in range.
    pub(crate) fn inst_at(&self, pos: usize) -> Option<InstId> {
        self.genome.get(pos).map(|byte| self.to_valid_inst(Data::from(byte)))
    }

    /// Opcode under the IP; past the end reads fold to 0 (Nop-A), so an
    /// overshooting IP idles instead of faulting. The IP is never
    /// wrapped modulo the genome length.
    pub(crate) fn read_ip_inst(&self) -> InstId {
        self.inst_at(self.ip()).unwrap_or(0)
    }

    /// Consume the nop argument under the IP, if any.
    ///
    /// Only an in-range nop byte is consumed. Anything else, including
    /// an IP past the genome end, returns `default` and leaves the IP
    /// untouched.
    pub(crate) fn get_arg(&mut self, default: impl Into<usize>) -> usize {
        if let Some(id) = self.inst_at(self.ip()) {
            if (id as usize) < NUM_NOPS {
                self.advance_ip();
                return id as usize;
            }
        }
        default.into()
    }

    /// Head index named by the nop argument, defaulting to `default`.
    pub(crate) fn get_head_arg(&mut self, default: HeadType) -> usize {
        self.get_arg(default as usize)
    }

    /// Read through head `h`: genome bytes widen to data words, memory
    /// reads are bounded; out of range yields 0.
    pub(crate) fn read_head(&self, h: usize) -> Data {
        let head = self.heads[h];
        match head.target() {
            HeadTarget::Genome => self.genome.get(head.pos()).map_or(0, Data::from),
            HeadTarget::Memory => self.memory.get(head.pos()).copied().unwrap_or(0),
        }
    }

    /// Write through head `h`.
    ///
    /// A genome write inserts a folded id before the head (or appends
    /// past the end) and is discarded once the genome is at
    /// [`MAX_GENOME_SIZE`]; a memory write past the end is a counted
    /// fault.
    pub(crate) fn write_head(&mut self, h: usize, value: Data) {
        let head = self.heads[h];
        match head.target() {
            HeadTarget::Genome => {
                if self.genome.len() < MAX_GENOME_SIZE {
                    let id = self.to_valid_inst(value);
                    if head.pos() < self.genome.len() {
                        self.genome.insert(head.pos(), id);
                    } else {
                        self.genome.push(id);
                    }
                }
            }
            HeadTarget::Memory => {
                if let Some(slot) = self.memory.get_mut(head.pos()) {
                    *slot = value;
                } else {
                    self.record_fault(Fault::MemoryWriteOutOfRange);
                }
            }
        }
    }

    pub(crate) fn advance_head(&mut self, h: usize) {
        self.heads[h].advance();
    }

    pub(crate) fn record_fault(&mut self, fault: Fault) {
        self.error_count += 1;
        self.last_fault = Some(fault);
    }
}
