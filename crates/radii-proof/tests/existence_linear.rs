use proptest::prelude::*;
use radii_core::rounding::sub_down;
use radii_core::Interval;
use radii_proof::interval_of_existence;

proptest! {
    #[test]
    fn no_contraction_without_z1_below_one(y in 0.0f64..1.0e6, z1 in 1.0f64..1.0e6, r in 0.0f64..1.0e6) {
        prop_assert!(interval_of_existence(y, z1, r).unwrap().is_empty());
    }

    #[test]
    fn lower_endpoint_is_conservative(
        y in 0.0f64..10.0,
        z1 in 0.0f64..0.999,
        r in 0.0f64..1.0e4,
        samples in prop::collection::vec(0.0f64..=1.0, 1..16),
    ) {
        let certified = interval_of_existence(y, z1, r).unwrap();
        prop_assume!(!certified.is_empty());
        let lower = certified.inf();
        prop_assert_eq!(certified.sup(), r);
        // d <= 1 - z1 exactly, so r * d >= y implies y + (z1 - 1) r <= 0.
        let d = sub_down(1.0, z1);
        for t in samples {
            let radius = (lower + t * (r - lower)).clamp(lower, r);
            // The fused residual has the sign of the exact value.
            prop_assert!(radius.mul_add(d, -y) >= 0.0, "radius {} fails", radius);
        }
    }
}

#[test]
fn textbook_scenario() {
    let certified = interval_of_existence(0.1, 0.2, 1.0).unwrap();
    assert!(certified.inf() >= 0.125);
    assert!(certified.inf() - 0.125 < 1e-15);
    assert_eq!(certified.sup(), 1.0);
}

#[test]
fn zero_residual_is_certified_from_the_origin() {
    let certified = interval_of_existence(0.0, 0.0, 5.0).unwrap();
    assert_eq!(certified, Interval::new(0.0, 5.0).unwrap());
}

#[test]
fn unit_defect_is_empty() {
    for r in [0.0, 1.0, 1.0e9] {
        assert!(interval_of_existence(1.0, 1.0, r).unwrap().is_empty());
    }
}

#[test]
fn threshold_beyond_outer_radius_is_empty() {
    assert!(interval_of_existence(1.0, 0.5, 1.0).unwrap().is_empty());
    assert!(!interval_of_existence(1.0, 0.5, 2.0).unwrap().is_empty());
}

#[test]
fn invalid_inputs_are_domain_errors() {
    let err = interval_of_existence(-1.0, 0.1, 1.0).unwrap_err();
    assert!(err.is_domain());
    assert_eq!(err.info().code, "negative-bound");
    assert_eq!(err.info().context["bound"], "Y");

    let err = interval_of_existence(0.1, f64::NAN, 1.0).unwrap_err();
    assert_eq!(err.info().code, "non-finite-bound");
    assert!(interval_of_existence(0.1, 0.1, f64::INFINITY).unwrap_err().is_domain());
    assert!(interval_of_existence(0.1, 0.1, -0.5).unwrap_err().is_domain());
    // A defect of at least one is not an input error even with large values.
    assert!(interval_of_existence(0.1, 2.0, 1.0).is_ok());
}

#[test]
fn interval_inputs_are_widened_to_their_supremum() {
    let y = Interval::new(0.05, 0.1).unwrap();
    let z1 = Interval::new(0.1, 0.2).unwrap();
    assert_eq!(
        interval_of_existence(y, z1, 1.0).unwrap(),
        interval_of_existence(0.1, 0.2, 1.0).unwrap()
    );
    let straddling = Interval::new(0.9, 1.1).unwrap();
    assert!(interval_of_existence(0.1, straddling, 1.0).unwrap().is_empty());
}
