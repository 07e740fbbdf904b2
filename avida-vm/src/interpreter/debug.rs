//! Diagnostic dump of the hardware state.

use std::fmt::Write as _;

use super::AvidaVm;

impl AvidaVm {
    /// Multi-line dump of the full hardware state: genome symbols with
    /// `>` at the instruction pointer, memory, heads, stacks, the fault
    /// count, and the instruction up next.
    #[must_use]
    pub fn status_string(&self) -> String {
        let mut out = String::new();

        out.push_str("Genome: ");
        for (i, &byte) in self.genome.as_slice().iter().enumerate() {
            if i == self.ip() {
                out.push('>');
            }
            out.push(self.inst_set.symbol(byte).unwrap_or('?'));
        }
        if self.ip() >= self.genome.len() {
            out.push('>');
        }

        out.push_str("\nMemory: ");
        for (i, value) in self.memory.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{value}");
        }

        out.push_str("\nHeads: ");
        for (i, head) in self.heads.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{head}");
        }

        out.push_str("\nStacks: ");
        for (i, stack) in self.stacks.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            let _ = write!(out, "{}:{stack}", char::from(b'A' + i as u8));
        }

        let _ = write!(out, "\nerror_count = {}", self.error_count);

        let next = self.read_ip_inst();
        let _ = write!(
            out,
            "\nNext: {} ({})",
            self.inst_set.name(next).unwrap_or("?"),
            self.inst_set.symbol(next).unwrap_or('?'),
        );

        out
    }
}
