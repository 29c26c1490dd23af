//! GShare Predictor Tests.
//!
//! Verifies indexing by (GHR XOR PC), the pre-update training index, history
//! masking, exact aliasing, and basic learning behaviour.

use bpred_core::bru::BranchPredictor;
use bpred_core::bru::gshare::GSharePredictor;
use bpred_core::{Outcome, PredictorKind};
use proptest::prelude::*;

use crate::common::{branches, config, train};

fn gshare(bits: usize) -> GSharePredictor {
    GSharePredictor::new(&config(PredictorKind::GShare, bits, 10, 10))
}

// ══════════════════════════════════════════════════════════
// 1. Initial state and round trip
// ══════════════════════════════════════════════════════════

/// GShare initial prediction — counters initialized to 1 (weakly not-taken).
#[test]
fn initial_not_taken() {
    let bp = gshare(2);
    assert_eq!(bp.counters().len(), 4);
    assert_eq!(bp.history().value(), 0);
    assert_eq!(bp.predict(0), Outcome::NotTaken);
}

/// Training the same index three times walks 1 → 2 → 3 → 3.
///
/// The PC is chosen each step so that (GHR ^ PC) stays at index 0 while the
/// history advances underneath it.
#[test]
fn counter_saturates_through_moving_history() {
    let mut bp = gshare(2);
    let mut seen = Vec::new();
    for _ in 0..3 {
        let pc = bp.history().value() as u32;
        assert_eq!(bp.index(pc), 0);
        bp.train(pc, Outcome::Taken);
        seen.push(bp.counter(0).value());
    }
    assert_eq!(seen, vec![2, 3, 3]);
    assert_eq!(bp.history().value(), 0b11);

    let pc = bp.history().value() as u32;
    assert_eq!(bp.predict(pc), Outcome::Taken);
}

/// Three taken trainings at PC 0 each hit a fresh counter (history 0, 1, 3),
/// leaving the counter used by the next prediction at weakly taken.
#[test]
fn round_trip_pc_zero() {
    let mut bp = gshare(2);
    assert_eq!(bp.predict(0), Outcome::NotTaken);
    train(&mut bp, 0, Outcome::Taken, 3);

    let values: Vec<u8> = bp.counters().iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![2, 2, 1, 2]);
    assert_eq!(bp.index(0), 3);
    assert_eq!(bp.predict(0), Outcome::Taken);
}

// ══════════════════════════════════════════════════════════
// 2. Learning
// ══════════════════════════════════════════════════════════

/// GShare learns taken after repeated taken updates, once the history has
/// saturated to all ones.
#[test]
fn learns_taken() {
    let mut bp = gshare(12);
    train(&mut bp, 0x1000, Outcome::Taken, 20);
    assert_eq!(bp.predict(0x1000), Outcome::Taken);
}

/// GShare learns not-taken after repeated not-taken updates.
#[test]
fn learns_not_taken() {
    let mut bp = gshare(12);
    train(&mut bp, 0x1000, Outcome::Taken, 10);
    train(&mut bp, 0x1000, Outcome::NotTaken, 20);
    assert_eq!(bp.predict(0x1000), Outcome::NotTaken);
}

/// The history register keeps only `ghistory_bits` bits.
#[test]
fn history_masked_to_width() {
    let mut bp = gshare(5);
    train(&mut bp, 0x40, Outcome::Taken, 40);
    assert_eq!(bp.history().value(), 0b1_1111);
}

// ══════════════════════════════════════════════════════════
// 3. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    /// Two PCs whose XOR with the history agrees in the low W bits always
    /// see the same counter, whatever the table contents.
    #[test]
    fn aliasing_is_exact(
        bits in 1usize..=10,
        trace in prop::collection::vec((any::<u32>(), any::<bool>()), 0..64),
        pc in any::<u32>(),
        high in any::<u32>(),
    ) {
        let mut bp = gshare(bits);
        for (branch_pc, outcome) in branches(&trace) {
            bp.train(branch_pc, outcome);
        }
        let alias = pc ^ (high << bits);
        prop_assert_eq!(bp.index(pc), bp.index(alias));
        prop_assert_eq!(bp.predict(pc), bp.predict(alias));
        prop_assert_eq!(bp.predict(pc), bp.counter(bp.index(pc)).predict());
    }

    /// Every counter stays within [0, 3] and the history within its width.
    #[test]
    fn state_stays_in_range(
        bits in 1usize..=8,
        trace in prop::collection::vec((any::<u32>(), any::<bool>()), 0..256),
    ) {
        let mut bp = gshare(bits);
        for (pc, outcome) in branches(&trace) {
            bp.train(pc, outcome);
        }
        prop_assert!(bp.counters().iter().all(|c| c.value() <= 3));
        prop_assert!(bp.history().value() < (1 << bits));
    }

    /// Predicting twice without training returns the same answer.
    #[test]
    fn predict_is_pure(
        trace in prop::collection::vec((any::<u32>(), any::<bool>()), 0..64),
        pc in any::<u32>(),
    ) {
        let mut bp = gshare(6);
        for (branch_pc, outcome) in branches(&trace) {
            bp.train(branch_pc, outcome);
        }
        let first = bp.predict(pc);
        prop_assert_eq!(first, bp.predict(pc));
    }
}
