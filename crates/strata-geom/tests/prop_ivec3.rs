use proptest::prelude::*;
use strata_geom::IVec3;

fn small() -> impl Strategy<Value = i32> {
    -100_000i32..=100_000
}

fn arb_ivec3() -> impl Strategy<Value = IVec3> {
    (small(), small(), small()).prop_map(|(x, y, z)| IVec3::new(x, y, z))
}

proptest! {
    #[test]
    fn add_is_commutative(a in arb_ivec3(), b in arb_ivec3()) {
        prop_assert_eq!(a + b, b + a);
    }

    #[test]
    fn negation_cancels(a in arb_ivec3()) {
        prop_assert_eq!(a + -a, IVec3::ZERO);
    }

    #[test]
    fn with_axis_only_touches_that_axis(a in arb_ivec3(), axis in 0usize..3, value in small()) {
        let b = a.with_axis(axis, value);
        for other in 0..3 {
            if other == axis {
                prop_assert_eq!(b.axis(other), value);
            } else {
                prop_assert_eq!(b.axis(other), a.axis(other));
            }
        }
    }
}
