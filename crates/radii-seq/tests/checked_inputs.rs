use radii_seq::{
    Ell1, Fourier, LinearOperator, Multiplication, Sequence, Taylor, Weight,
};

#[test]
fn weight_deserialisation_enforces_the_rate() {
    let ok: Weight = serde_json::from_str(r#"{"kind":"geometric","rate":1.5}"#).unwrap();
    assert_eq!(ok, Weight::Geometric(1.5));
    let identity: Weight = serde_json::from_str(r#"{"kind":"identity"}"#).unwrap();
    assert_eq!(identity, Weight::Identity);

    for rate in ["-3.0", "0.5", "0.0"] {
        let json = format!(r#"{{"kind":"geometric","rate":{rate}}}"#);
        assert!(serde_json::from_str::<Weight>(&json).is_err(), "rate {rate}");
    }

    let json = serde_json::to_string(&Weight::Geometric(2.0)).unwrap();
    assert_eq!(serde_json::from_str::<Weight>(&json).unwrap(), Weight::Geometric(2.0));
}

#[test]
fn fourier_kernel_norm_bounds_the_projected_operator() {
    // Shift by one mode: under ν = 2 every nonnegative column scales by exactly ν.
    let kernel = Sequence::new(Fourier::new(1, 1.0).unwrap(), vec![0.0, 0.0, 1.0]).unwrap();
    let m = Multiplication::new(kernel);
    let norm = Ell1::geometric(2.0).unwrap();
    let space = Fourier::new(3, 1.0).unwrap();
    let op = m.project(space, space).unwrap();
    assert_eq!(m.opnorm(&norm), 2.0);
    assert_eq!(op.opnorm(&norm), 2.0);
}

#[test]
fn sequence_deserialisation_checks_the_length() {
    let err = serde_json::from_str::<Sequence<Taylor, f64>>(
        r#"{"space":{"order":3},"coefficients":[1.0]}"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("dimension-mismatch"));

    let a: Sequence<Taylor, f64> =
        serde_json::from_str(r#"{"space":{"order":2},"coefficients":[1.0,2.0,3.0]}"#).unwrap();
    assert_eq!(a.get(2), 3.0);
    assert_eq!(a.get(7), 0.0);
}

#[test]
fn fourier_deserialisation_checks_the_frequency() {
    assert!(serde_json::from_str::<Fourier>(r#"{"order":2,"frequency":-1.0}"#).is_err());
    assert!(serde_json::from_str::<Fourier>(r#"{"order":2,"frequency":0.0}"#).is_err());

    let space = Fourier::new(2, 0.5).unwrap();
    let json = serde_json::to_string(&space).unwrap();
    assert_eq!(serde_json::from_str::<Fourier>(&json).unwrap(), space);
}

#[test]
fn writes_through_coefficients_keep_the_operator_shape() {
    let kernel = Sequence::new(Taylor::new(1), vec![1.0, 1.0]).unwrap();
    let m = Multiplication::new(kernel);
    let mut target = LinearOperator::zeros(Taylor::new(2), Taylor::new(2));
    assert_eq!(target.coefficients_mut().len(), 9);
    for slot in target.coefficients_mut() {
        *slot = 4.0;
    }
    assert_eq!(target.entry(0, 2), Some(4.0));

    m.project_into(&mut target).unwrap();
    assert_eq!(target, m.project(Taylor::new(2), Taylor::new(2)).unwrap());
    assert_eq!(target.entry(0, 2), Some(0.0));
}
