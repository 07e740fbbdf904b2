//! Instruction registry: id ↔ name ↔ display symbol ↔ handler.

use avida_genome::{symbol, Genome, InstId};

use crate::consts::MAX_INSTS;
use crate::error::RegistryError;
use crate::interpreter::AvidaVm;

#[cfg(feature = "random")]
use rand::Rng;


/// Handler signature for non-nop instructions.
pub type InstFn = fn(&mut AvidaVm);

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    symbol: char,
    fun: Option<InstFn>,
}

/// Registry mapping instruction ids to names, display symbols, and
/// handlers.
///
/// Ids are assigned in registration order; nops are registered first
/// and occupy ids `[0, num_nops)`. The set is shared read-only by every
/// VM bound to it.
#[derive(Debug, Clone, Default)]
pub struct InstSet {
    entries: Vec<Entry>,
    num_nops: usize,
}

impl InstSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered instructions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no instructions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of leading nop instructions.
    #[must_use]
    pub fn num_nops(&self) -> usize {
        self.num_nops
    }

    /// Whether `id` names a nop.
    #[must_use]
    pub fn is_nop(&self, id: InstId) -> bool {
        (id as usize) < self.num_nops
    }

    /// Register a nop. Nops must precede every operation.
    pub fn add_nop(&mut self, name: &str) -> Result<InstId, RegistryError> {
        if self.num_nops != self.entries.len() {
            return Err(RegistryError::NopAfterOperation);
        }
        let id = self.add_entry(name, None)?;
        self.num_nops += 1;
        Ok(id)
    }

    /// Register an operation with its handler.
    pub fn add_inst(&mut self, name: &str, fun: InstFn) -> Result<InstId, RegistryError> {
        self.add_entry(name, Some(fun))
    }

    fn add_entry(&mut self, name: &str, fun: Option<InstFn>) -> Result<InstId, RegistryError> {
        if self.entries.len() >= MAX_INSTS {
            return Err(RegistryError::SetFull);
        }
        if self.id_by_name(name).is_some() {
            return Err(RegistryError::DuplicateName(name.to_owned()));
        }
        let id = self.entries.len();
        self.entries.push(Entry {
            name: name.to_owned(),
            symbol: symbol::from_id(id),
            fun,
        });
        Ok(id as InstId)
    }

    /// Name of instruction `id`, if registered.
    #[must_use]
    pub fn name(&self, id: InstId) -> Option<&str> {
        self.entries.get(id as usize).map(|entry| entry.name.as_str())
    }

    /// Display symbol of instruction `id`, if registered.
    #[must_use]
    pub fn symbol(&self, id: InstId) -> Option<char> {
        self.entries.get(id as usize).map(|entry| entry.symbol)
    }

    /// Id of the instruction called `name`.
    #[must_use]
    pub fn id_by_name(&self, name: &str) -> Option<InstId> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .map(|id| id as InstId)
    }

    /// Id of the instruction displayed as `symbol`.
    #[must_use]
    pub fn id_by_symbol(&self, symbol: char) -> Option<InstId> {
        self.entries
            .iter()
            .position(|entry| entry.symbol == symbol)
            .map(|id| id as InstId)
    }

    /// Run instruction `id` on `vm`. Nops (and unregistered ids) do
    /// nothing.
    pub fn execute(&self, vm: &mut AvidaVm, id: InstId) {
        if let Some(fun) = self.entries.get(id as usize).and_then(|entry| entry.fun) {
            fun(vm);
        }
    }

    /// Render a genome as its display-symbol string.
    #[must_use]
    pub fn to_sequence(&self, genome: &Genome) -> String {
        genome
            .as_slice()
            .iter()
            .map(|&id| self.symbol(id).unwrap_or(symbol::OVERFLOW))
            .collect()
    }

    /// Parse a display-symbol string, position by position.
    ///
    /// Stripping whitespace or comments is a loader concern; every
    /// character here must name an instruction.
    pub fn parse_sequence(&self, sequence: &str) -> Result<Genome, RegistryError> {
        sequence
            .chars()
            .map(|symbol| {
                self.id_by_symbol(symbol)
                    .ok_or(RegistryError::UnknownSymbol(symbol))
            })
            .collect()
    }

    /// A genome of `length` copies of instruction `id`.
    #[must_use]
    pub fn uniform_genome(&self, length: usize, id: InstId) -> Genome {
        (0..length).map(|_| id).collect()
    }

    /// A random genome where each position is, independently, a uniform
    /// nop with probability `p_nop` or a uniform non-nop otherwise.
    #[cfg(feature = "random")]
    pub fn random_genome<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
        p_nop: f64,
    ) -> Genome {
        if self.entries.is_empty() {
            return Genome::new();
        }
        (0..length)
            .map(|_| {
                let nop = self.num_nops > 0
                    && (self.num_nops == self.entries.len() || rng.gen_bool(p_nop));
                let id = if nop {
                    rng.gen_range(0..self.num_nops)
                } else {
                    rng.gen_range(self.num_nops..self.entries.len())
                };
                id as InstId
            })
            .collect()
    }
}
