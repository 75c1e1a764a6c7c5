//! Bean machine integration tests: conservation, repeat, halves.

use galton::{Bean, BeanMode, Machine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn run_full(slot_count: usize, bean_count: usize, mode: BeanMode, seed: u64) -> Machine {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut machine = Machine::new(slot_count).unwrap();
    machine.load(bean_count, mode, &mut rng).unwrap();
    machine.run_to_completion(&mut rng).unwrap();
    machine
}

#[test]
fn test_every_bean_lands() {
    for slot_count in [1, 2, 3, 10, 20] {
        for mode in [BeanMode::Luck, BeanMode::Skill] {
            let machine = run_full(slot_count, 150, mode, slot_count as u64);
            assert_eq!(machine.landed_bean_count(), 150);
            assert_eq!(machine.remaining_bean_count(), 0);
            assert_eq!(machine.in_flight_bean_count(), 0);
            assert_eq!(machine.slot_counts().len(), slot_count);
        }
    }
}

#[test]
fn test_beans_conserved_at_every_step() {
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut machine = Machine::new(9).unwrap();
    machine.load(40, BeanMode::Luck, &mut rng).unwrap();
    loop {
        let total = machine.remaining_bean_count()
            + machine.in_flight_bean_count()
            + machine.landed_bean_count();
        assert_eq!(total, 40);
        if !machine.advance_step(&mut rng).unwrap() {
            break;
        }
    }
}

#[test]
fn test_in_flight_beans_respect_row() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let mut machine = Machine::new(7).unwrap();
    machine.load(30, BeanMode::Luck, &mut rng).unwrap();
    while machine.advance_step(&mut rng).unwrap() {
        for row in 0..7 {
            if let Some(x) = machine.in_flight_bean_x_pos(row) {
                assert!(x <= row);
            }
        }
    }
}

#[test]
fn test_same_seed_same_histogram() {
    let a = run_full(10, 500, BeanMode::Luck, 1234);
    let b = run_full(10, 500, BeanMode::Luck, 1234);
    assert_eq!(a.slot_counts(), b.slot_counts());
}

#[test]
fn test_skill_beans_land_on_their_level() {
    let machine = run_full(12, 300, BeanMode::Skill, 55);
    for (slot, bean) in machine.landed_beans() {
        assert_eq!(slot, bean.skill_level());
        assert_eq!(bean.x_pos(), slot);
    }
}

#[test]
fn test_repeat_skill_run_is_identical() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut machine = Machine::new(10).unwrap();
    machine.load(200, BeanMode::Skill, &mut rng).unwrap();
    machine.run_to_completion(&mut rng).unwrap();
    let first = machine.slot_counts();
    let first_avg = machine.average_slot_bean_count();

    machine.repeat();
    machine.run_to_completion(&mut rng).unwrap();
    assert_eq!(machine.slot_counts(), first);
    assert_eq!(machine.average_slot_bean_count(), first_avg);
}

#[test]
fn test_lower_then_upper_half() {
    let beans: Vec<Bean> = (0..8)
        .map(|k| Bean::with_skill_level(8, BeanMode::Skill, k).unwrap())
        .collect();
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut machine = Machine::new(8).unwrap();
    machine.reset(beans).unwrap();
    machine.run_to_completion(&mut rng).unwrap();
    assert_eq!(machine.slot_counts(), vec![1; 8]);

    machine.lower_half();
    assert_eq!(machine.slot_counts(), vec![1, 1, 1, 1, 0, 0, 0, 0]);
    assert!((machine.average_slot_bean_count() - 1.5).abs() < 1e-12);

    machine.upper_half();
    assert_eq!(machine.slot_counts(), vec![0, 0, 1, 1, 0, 0, 0, 0]);
}

#[test]
fn test_halves_round_kept_half_up() {
    for n in 0..20usize {
        let mut lower = run_full(6, n, BeanMode::Luck, n as u64);
        let mut upper = lower.clone();
        lower.lower_half();
        upper.upper_half();
        assert_eq!(lower.landed_bean_count(), n.div_ceil(2));
        assert_eq!(upper.landed_bean_count(), n.div_ceil(2));
    }
}

#[test]
fn test_reset_clears_previous_run() {
    let mut machine = run_full(5, 50, BeanMode::Luck, 9);
    let beans = vec![Bean::with_skill_level(5, BeanMode::Skill, 4).unwrap()];
    machine.reset(beans).unwrap();
    assert_eq!(machine.landed_bean_count(), 0);
    assert_eq!(machine.in_flight_bean_count(), 1);

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    machine.run_to_completion(&mut rng).unwrap();
    assert_eq!(machine.slot_counts(), vec![0, 0, 0, 0, 1]);
}
