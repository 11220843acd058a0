use radii_core::{Interval, Supremum};
use radii_seq::{
    BanachSpace, Chebyshev, Ell1, EllInf, Fourier, LinearOperator, Multiplication, Sequence,
    Taylor, Weight,
};

fn taylor(coefficients: &[f64]) -> Sequence<Taylor, f64> {
    Sequence::new(Taylor::new(coefficients.len() - 1), coefficients.to_vec()).unwrap()
}

#[test]
fn scalar_addition_shifts_the_constant_term() {
    let a = taylor(&[1.0, 2.0, 3.0]);
    assert_eq!((a.clone() + 1.0).coefficients(), &[2.0, 2.0, 3.0]);
    assert_eq!((a.clone() - 1.0).coefficients(), &[0.0, 2.0, 3.0]);
    assert_eq!((a.clone() * 2.0).coefficients(), &[2.0, 4.0, 6.0]);
    assert_eq!((a / 2.0).coefficients(), &[0.5, 1.0, 1.5]);

    let f = Sequence::new(Fourier::new(1, 1.0).unwrap(), vec![1.0, 1.0, 1.0]).unwrap();
    assert_eq!((f + 1.0).coefficients(), &[1.0, 2.0, 1.0]);
}

#[test]
fn pairwise_addition_lands_on_union_space() {
    let a = taylor(&[1.0, 2.0]);
    let b = taylor(&[1.0, 1.0, 1.0]);
    let sum = a.try_add(&b).unwrap();
    assert_eq!(sum.space(), &Taylor::new(2));
    assert_eq!(sum.coefficients(), &[2.0, 3.0, 1.0]);
    let diff = a.try_sub(&b).unwrap();
    assert_eq!(diff.coefficients(), &[0.0, 1.0, -1.0]);
}

#[test]
fn multiplication_arithmetic_acts_on_kernels() {
    let a = Multiplication::new(taylor(&[1.0, 2.0]));
    let b = Multiplication::new(taylor(&[3.0, -1.0]));
    assert_eq!((-a.clone()).sequence().coefficients(), &[-1.0, -2.0]);
    assert_eq!((a.clone() + 1.0).sequence().coefficients(), &[2.0, 2.0]);
    assert_eq!((a.clone() * 3.0).sequence().coefficients(), &[3.0, 6.0]);
    assert_eq!(a.try_add(&b).unwrap().sequence().coefficients(), &[4.0, 1.0]);
    assert_eq!(a.try_sub(&b).unwrap().sequence().coefficients(), &[-2.0, 3.0]);
    assert_eq!(
        a.try_mul(&b).unwrap().sequence().coefficients(),
        &[3.0, 5.0, -2.0]
    );
}

#[test]
fn product_of_multiplications_is_composition_of_projections() {
    let a = Multiplication::new(taylor(&[1.0, 2.0, -1.0]));
    let b = Multiplication::new(taylor(&[3.0, -1.0]));
    let domain = Taylor::new(3);
    let middle = Taylor::new(4);
    let codomain = Taylor::new(6);
    let ab = a.try_mul(&b).unwrap().project(domain, codomain).unwrap();
    let composed = a
        .project(middle, codomain)
        .unwrap()
        .compose(&b.project(domain, middle).unwrap())
        .unwrap();
    assert_eq!(ab, composed);
}

#[test]
fn mismatched_fourier_kernels_cannot_be_combined() {
    let a = Multiplication::new(
        Sequence::new(Fourier::new(0, 1.0).unwrap(), vec![1.0]).unwrap(),
    );
    let b = Multiplication::new(
        Sequence::new(Fourier::new(0, 3.0).unwrap(), vec![1.0]).unwrap(),
    );
    assert_eq!(a.try_add(&b).unwrap_err().info().code, "incompatible-spaces");
    assert!(a.try_mul(&b).is_err());
}

#[test]
fn weighted_norms() {
    let a = taylor(&[1.0, -2.0, 0.5]);
    assert_eq!(Ell1::identity().norm(&a), 3.5);
    assert_eq!(Ell1::geometric(2.0).unwrap().norm(&a), 1.0 + 4.0 + 2.0);
    assert_eq!(EllInf.norm(&a), 2.0);

    let c = Sequence::new(Chebyshev::new(2), vec![1.0, -2.0, 0.5]).unwrap();
    assert_eq!(Ell1::identity().norm(&c), 1.0 + 2.0 * 2.0 + 2.0 * 0.5);

    assert!(Weight::geometric(0.0).unwrap_err().is_domain());
    assert!(Weight::geometric(f64::NAN).is_err());
    assert_eq!(Weight::geometric(0.5).unwrap_err().info().code, "invalid-weight");
    assert!(Ell1::geometric(0.999).is_err());
    assert_eq!(Weight::geometric(1.0).unwrap(), Weight::Geometric(1.0));
}

#[test]
fn multiplication_opnorm_is_kernel_norm() {
    let m = Multiplication::new(taylor(&[1.0, -2.0, 0.5]));
    let x = Ell1::geometric(1.5).unwrap();
    assert_eq!(m.opnorm(&x), x.norm(m.sequence()));

    let op = m.project(Taylor::new(5), Taylor::new(5)).unwrap();
    assert!(op.opnorm(&x) <= m.opnorm(&x) * (1.0 + 1e-12));
    assert!(op.opnorm(&EllInf) <= 3.5);
}

#[test]
fn interval_norms_enclose_float_norms() {
    let a = taylor(&[0.1, 0.2, 0.3]);
    let x = Ell1::geometric(1.1).unwrap();
    let float_norm = x.norm(&a);
    let interval_norm: Interval = x.norm(&a.promote::<Interval>());
    assert!(interval_norm.inf() <= float_norm);
    assert!(float_norm <= interval_norm.supremum());
}

#[test]
fn identity_minus_itself_is_zero() {
    let id = LinearOperator::<Taylor, Taylor, f64>::identity(Taylor::new(3));
    let zero = id.try_sub(&id).unwrap();
    assert_eq!(zero.opnorm(&Ell1::identity()), 0.0);
    assert_eq!(id.opnorm(&Ell1::geometric(2.0).unwrap()), 1.0);
}
