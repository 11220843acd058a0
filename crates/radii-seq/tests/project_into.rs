use nalgebra::DMatrix;
use radii_core::Interval;
use radii_seq::{
    Chebyshev, Fourier, LinearOperator, Multiplication, Sequence, Taylor, Univariate,
};

#[test]
fn overwrite_clears_previous_garbage() {
    let kernel = Sequence::new(Taylor::new(1), vec![2.0, -1.0]).unwrap();
    let m = Multiplication::new(kernel);
    let garbage = DMatrix::from_element(4, 4, 7.5);
    let mut target = LinearOperator::from_matrix(Taylor::new(3), Taylor::new(3), garbage).unwrap();
    m.project_into(&mut target).unwrap();
    let fresh = m.project(Taylor::new(3), Taylor::new(3)).unwrap();
    assert_eq!(target, fresh);
    for i in 0..=3isize {
        for j in 0..=3isize {
            let diff = i - j;
            if diff != 0 && diff != 1 {
                assert_eq!(target.entry(i, j).unwrap(), 0.0, "entry ({i}, {j})");
            }
        }
    }
}

#[test]
fn failed_validation_leaves_target_untouched() {
    let kernel_space: Univariate = Taylor::new(1).into();
    let kernel = Sequence::new(kernel_space, vec![1.0, 1.0]).unwrap();
    let m = Multiplication::new(kernel);
    let space: Univariate = Chebyshev::new(2).into();
    let garbage = DMatrix::from_element(3, 3, -3.0);
    let mut target = LinearOperator::from_matrix(space, space, garbage.clone()).unwrap();
    let err = m.project_into(&mut target).unwrap_err();
    assert_eq!(err.info().code, "incompatible-spaces");
    assert_eq!(target.coefficients(), &garbage);
}

#[test]
fn mismatched_families_are_rejected() {
    let taylor: Univariate = Taylor::new(2).into();
    let cheb: Univariate = Chebyshev::new(2).into();
    let kernel = Sequence::new(taylor, vec![1.0, 0.0, 0.0]).unwrap();
    let m = Multiplication::new(kernel);
    assert!(m.project(taylor, cheb).is_err());
    assert!(m.project(cheb, cheb).is_err());
    assert!(m.project(taylor, Taylor::new(5).into()).is_ok());
}

#[test]
fn fourier_frequency_mismatch_is_rejected() {
    let kernel = Sequence::new(Fourier::new(1, 1.0).unwrap(), vec![0.5, 1.0, 0.5]).unwrap();
    let m = Multiplication::new(kernel);
    let other = Fourier::new(2, 2.0).unwrap();
    let err = m.project(other, other).unwrap_err();
    assert_eq!(err.info().code, "incompatible-spaces");
    let same = Fourier::new(2, 1.0).unwrap();
    assert!(m.project(same, other).is_err());
}

#[test]
fn promoted_projection_holds_intervals() {
    let kernel = Sequence::new(Taylor::new(1), vec![0.1, 0.2]).unwrap();
    let m = Multiplication::new(kernel);
    let op = m
        .project_as::<Interval>(Taylor::new(2), Taylor::new(2))
        .unwrap();
    assert_eq!(op.entry(1, 0).unwrap(), Interval::point(0.2));
    assert_eq!(op.entry(0, 1).unwrap(), Interval::point(0.0));

    let mut target = LinearOperator::<Taylor, Taylor, Interval>::zeros(Taylor::new(2), Taylor::new(2));
    m.project_into(&mut target).unwrap();
    assert_eq!(target, op);
}
