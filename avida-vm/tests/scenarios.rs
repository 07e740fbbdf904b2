//! End-to-end scenarios driving the VM through its public surface.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use avida_vm::prelude::*;

fn canonical_set() -> Arc<InstSet> {
    Arc::new(AvidaVm::build_inst_set())
}

fn vm_from(sequence: &str) -> AvidaVm {
    let inst_set = canonical_set();
    let genome = inst_set.parse_sequence(sequence).unwrap();
    AvidaVm::new(inst_set, genome)
}

fn run(vm: &mut AvidaVm, cycles: usize) {
    for _ in 0..cycles {
        vm.process_inst();
    }
}

#[test]
fn immediate_const_with_a_nop_argument() {
    let mut vm = vm_from("ga");
    vm.process_inst();
    assert_eq!(vm.stack(0).top(), 1);
    assert_eq!(vm.stack(0).cursor(), 1);
    assert_eq!(vm.head(HeadType::Ip).pos(), 2);
}

#[test]
fn const_with_default_argument_leaves_the_ip() {
    let mut vm = vm_from("g");
    vm.process_inst();
    assert_eq!(vm.stack(0).top(), 1);
    assert_eq!(vm.head(HeadType::Ip).pos(), 1);
}

#[test]
fn two_consts_then_add_accumulate_on_stack_a() {
    let mut vm = vm_from("gagak");
    run(&mut vm, 3);
    assert_eq!(vm.stack(0).top(), 2);
    assert_eq!(vm.stack(0).cursor(), 1);
    for id in 1..NUM_NOPS {
        assert_eq!(vm.stack(id).cursor(), 0);
    }
}

#[test]
fn division_by_zero_counts_without_halting() {
    // Build 5 on stack A (4 + 1), then divide by an empty stack B.
    let mut vm = vm_from("gcgaknab");
    run(&mut vm, 4);
    assert_eq!(vm.error_count(), 1);
    assert_eq!(vm.last_fault(), Some(Fault::DivisionByZero));
    assert_eq!(vm.stack(0).cursor(), 0);

    // The machine keeps running afterwards.
    vm.process_inst();
    assert_eq!(vm.error_count(), 1);
}

#[test]
fn break_leaves_the_scoped_region() {
    // Scope-A, Const-A, Break-A, Const-B, Scope-A.
    let mut vm = vm_from("xagazagbxa");
    run(&mut vm, 3);
    assert_eq!(vm.stack(0).top(), 1);
    assert_eq!(vm.stack(0).cursor(), 1);
    assert_eq!(vm.stack(1).cursor(), 0);
    assert_eq!(vm.head(HeadType::Ip).pos(), 10);
}

#[test]
fn copy_loop_replicates_the_program() {
    let mut vm = vm_from("EEE");
    run(&mut vm, 3);
    assert_eq!(vm.inst_set().to_sequence(vm.genome()), "EEEEEE");
    assert_eq!(vm.head(HeadType::GenomeRead).pos(), 3);
    assert_eq!(vm.head(HeadType::GenomeWrite).pos(), 6);
}

#[test]
fn const_then_stack_pop_returns_to_the_initial_top() {
    let mut vm = vm_from("gaAa");
    run(&mut vm, 2);
    assert_eq!(vm.stack(0).cursor(), 0);
    assert_eq!(vm.stack(0).top(), 0);
    assert_eq!(vm.error_count(), 0);
}

#[test]
fn divide_cell_offspring_complements_the_residue() {
    // Const-B pushes 2 onto stack A; SetHead pops it into the genome
    // write head; DivideCell splits [0, 2) off into the offspring.
    let mut vm = vm_from("gbaJacH");
    run(&mut vm, 2);
    assert_eq!(vm.head(HeadType::GenomeWrite).pos(), 2);

    let full: Vec<InstId> = vm.genome().as_slice().to_vec();
    vm.process_inst();
    assert_eq!(vm.offspring().as_slice(), &full[0..2]);
    assert_eq!(vm.genome().as_slice(), &full[2..]);
    let offspring = vm.take_offspring();
    assert_eq!(offspring.len(), 2);
    assert!(vm.offspring().is_empty());
}

#[test]
fn status_string_reports_the_machine() {
    let mut vm = vm_from("gagak");
    vm.process_inst();
    let status = vm.status_string();
    assert!(status.starts_with("Genome: ga>gak\n"));
    assert!(status.contains("\nMemory: 0,0,"));
    assert!(status.contains("\nHeads: [genome:2],[genome:0],[genome:5],[memory:0],[memory:0],[genome:0]"));
    // Stacks print in ring order from the cursor: newest value last.
    assert!(status.contains("\nStacks: A:0,0,"));
    assert!(status.contains(",0,1,B:0,"));
    assert!(status.contains("\nerror_count = 0"));
    assert!(status.ends_with("Next: Const (g)"));
}

#[test]
fn sequences_round_trip_through_the_set() {
    let inst_set = canonical_set();
    let sequence = "gagakxaEEEzaH";
    let genome = inst_set.parse_sequence(sequence).unwrap();
    assert_eq!(inst_set.to_sequence(&genome), sequence);
}

#[test]
fn random_programs_never_break_the_hardware_invariants() {
    let inst_set = canonical_set();
    let mut rng = StdRng::seed_from_u64(2322);

    for _ in 0..20 {
        let genome = inst_set.random_genome(80, &mut rng, DEFAULT_P_NOP);
        let mut vm = AvidaVm::new(Arc::clone(&inst_set), genome);
        let mut last_errors = 0;

        for _ in 0..400 {
            vm.process_inst();

            assert_eq!(vm.memory().len(), MEM_SIZE);
            assert!(vm.genome().len() <= MAX_GENOME_SIZE);
            assert!(vm.genome().is_valid(inst_set.len()));
            for id in 0..NUM_NOPS {
                assert!(vm.stack(id).cursor() < STACK_DEPTH);
            }
            assert_eq!(vm.head(HeadType::Ip).target(), HeadTarget::Genome);
            assert_eq!(vm.head(HeadType::MemRead).target(), HeadTarget::Memory);
            assert_eq!(vm.head(HeadType::MemWrite).target(), HeadTarget::Memory);
            assert!(vm.error_count() >= last_errors);
            last_errors = vm.error_count();
        }
    }
}

#[test]
fn reset_makes_runs_reproducible() {
    let inst_set = canonical_set();
    let mut rng = StdRng::seed_from_u64(99);
    let genome = inst_set.random_genome(60, &mut rng, DEFAULT_P_NOP);

    let mut vm = AvidaVm::new(Arc::clone(&inst_set), genome.clone());
    run(&mut vm, 250);
    let first = vm.status_string();

    vm.reset_with_genome(genome);
    run(&mut vm, 250);
    assert_eq!(vm.status_string(), first);
}
