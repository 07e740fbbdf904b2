//! Shared fixtures for the interpreter unit tests.

use std::sync::Arc;

use super::AvidaVm;

/// VM over the canonical set, executing the given symbol sequence.
pub(crate) fn vm_from(sequence: &str) -> AvidaVm {
    let inst_set = Arc::new(AvidaVm::build_inst_set());
    let genome = inst_set
        .parse_sequence(sequence)
        .expect("sequence uses canonical symbols");
    AvidaVm::new(inst_set, genome)
}

/// Run `cycles` instruction cycles.
pub(crate) fn run(vm: &mut AvidaVm, cycles: usize) {
    for _ in 0..cycles {
        vm.process_inst();
    }
}
