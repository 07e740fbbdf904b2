//! Conditional and scope-scanning handlers.
//!
//! `Scope` is a pure marker: the nops following it name the logical
//! nesting levels it delimits. `Continue` and `Break` scan the genome
//! for a matching marker instead of keeping any nesting state, so
//! mutated genomes always have well-defined (if useless) flow.

use avida_genome::InstId;

use super::{AvidaVm, Nop};
use crate::consts::NUM_NOPS;


const SCOPE: &str = "Scope";

impl AvidaVm {
    /// Pop[Nop-A]:X; skip one byte when X is zero.
    pub(crate) fn inst_if(&mut self) {
        let x_id = self.get_arg(Nop::A);
        let x = self.stacks[x_id].pop();
        if x == 0 {
            self.advance_ip();
        }
    }

    /// Pop[Nop-A]:X; skip one byte when X is non-zero.
    pub(crate) fn inst_if_not(&mut self) {
        let x_id = self.get_arg(Nop::A);
        let x = self.stacks[x_id].pop();
        if x != 0 {
            self.advance_ip();
        }
    }

    /// Marker: step past the nop tag list so the tags themselves never
    /// execute.
    pub(crate) fn inst_scope(&mut self) {
        let end = self.nop_run_end(self.ip());
        self.set_ip(end);
    }

    /// Scan backwards for a `Scope` tagged with the target nop and
    /// resume just past it; without a match the IP restarts at 0.
    pub(crate) fn inst_continue(&mut self) {
        let target = self.get_arg(Nop::A);
        let Some(scope_id) = self.inst_set.id_by_name(SCOPE) else {
            self.set_ip(0);
            return;
        };
        let mut pos = self.ip().saturating_sub(2);
        loop {
            if self.scope_matches(pos, scope_id, target) {
                let end = self.nop_run_end(pos + 1);
                self.set_ip(end);
                return;
            }
            if pos == 0 {
                break;
            }
            pos -= 1;
        }
        self.set_ip(0);
    }

    /// Scan forwards for a `Scope` tagged with the target nop and
    /// resume just past it; without a match the IP parks at the genome
    /// end.
    pub(crate) fn inst_break(&mut self) {
        let target = self.get_arg(Nop::A);
        let end_of_genome = self.genome.len();
        let Some(scope_id) = self.inst_set.id_by_name(SCOPE) else {
            self.set_ip(end_of_genome);
            return;
        };
        let mut pos = self.ip();
        while pos < end_of_genome {
            if self.scope_matches(pos, scope_id, target) {
                let end = self.nop_run_end(pos + 1);
                self.set_ip(end);
                return;
            }
            pos += 1;
        }
        self.set_ip(end_of_genome);
    }

    /// First position at or after `start` that is not an in-range nop.
    fn nop_run_end(&self, start: usize) -> usize {
        let mut pos = start;
        while let Some(id) = self.inst_at(pos) {
            if (id as usize) >= NUM_NOPS {
                break;
            }
            pos += 1;
        }
        pos
    }

    /// Whether `pos` holds a `Scope` whose nop tag list contains
    /// `target`. A tagless `Scope` delimits nothing and never matches.
    fn scope_matches(&self, pos: usize, scope_id: InstId, target: usize) -> bool {
        if self.inst_at(pos) != Some(scope_id) {
            return false;
        }
        let mut tag = pos + 1;
        while let Some(id) = self.inst_at(tag) {
            if (id as usize) >= NUM_NOPS {
                break;
            }
            if id as usize == target {
                return true;
            }
            tag += 1;
        }
        false
    }
}
