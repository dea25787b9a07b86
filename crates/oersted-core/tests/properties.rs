//! Property-based tests for the field geometry and the demo state machines.

use std::time::Duration;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use oersted_core::constants::{FLOW_TICK, NEEDLE_TICK};
use oersted_core::current::{CurrentFieldDemo, NeedleState};
use oersted_core::field::{field_rings, filing_count, ring_count, FieldSnapshot, Intensity};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Counts match ceil(5 + s*8) and ceil(s*100) for every slider value.
    #[test]
    fn counts_follow_formula(i in 0i64..=100) {
        let intensity = Intensity::clamped(i);
        let s = i as f64 / 100.0;
        // whole-percent inputs: compare against the exact rational ceiling
        let expected_rings = 5 + (8 * i as usize).div_ceil(100);
        prop_assert_eq!(ring_count(intensity), expected_rings);
        prop_assert!((expected_rings as f64 - (5.0 + s * 8.0)).abs() < 1.0);
        prop_assert_eq!(filing_count(intensity), i as usize);
    }

    /// Opacity never increases outward.
    #[test]
    fn ring_opacity_non_increasing(i in 0i64..=100) {
        let rings = field_rings(Intensity::clamped(i));
        for pair in rings.windows(2) {
            prop_assert!(pair[1].opacity <= pair[0].opacity);
            prop_assert!(pair[1].radius > pair[0].radius);
        }
    }

    /// Out-of-range inputs clamp rather than fail.
    #[test]
    fn intensity_always_in_range(raw in any::<i64>()) {
        prop_assert!(Intensity::clamped(raw).percent() <= 100);
    }

    /// Filings land in their band for any seed.
    #[test]
    fn filings_in_range(seed in any::<u64>(), i in 0i64..=100) {
        let mut rng = StdRng::seed_from_u64(seed);
        let snap = FieldSnapshot::generate(Intensity::clamped(i), &mut rng);
        prop_assert_eq!(snap.filings.len(), filing_count(snap.intensity));
        for f in &snap.filings {
            prop_assert!((0.0..360.0).contains(&f.angle));
            prop_assert!(f.distance() > 40.0 - 1e-6 && f.distance() < 200.0 + 1e-6);
            prop_assert!((8.0..=16.0).contains(&f.length));
        }
    }

    /// Any starting deflection decays to exactly zero.
    #[test]
    fn needle_decays_to_zero(angle in -90.0f64..90.0) {
        let mut demo = CurrentFieldDemo::with_needle(NeedleState { angle, flow_offset: 0.0 });
        demo.advance(NEEDLE_TICK * 400);
        prop_assert!(demo.needle().angle == 0.0);
        prop_assert_eq!(demo.active_timers(), (0, 0));
    }

    /// Arbitrary interleavings of toggles, reversals and time keep at most
    /// one timer per concern and the offset inside its period.
    #[test]
    fn timers_never_stack(ops in prop::collection::vec(0u8..3, 1..60)) {
        let mut demo = CurrentFieldDemo::new();
        for op in ops {
            match op {
                0 => demo.toggle(),
                1 => { demo.reverse(); }
                _ => demo.advance(FLOW_TICK + Duration::from_millis(3)),
            }
            let (needle, flow) = demo.active_timers();
            prop_assert!(needle <= 1);
            prop_assert_eq!(flow, usize::from(demo.is_on()));
            let offset = demo.needle().flow_offset;
            prop_assert!((0.0..400.0).contains(&offset));
        }
    }
}
