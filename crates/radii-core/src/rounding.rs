//! Directed rounding on top of round-to-nearest hardware arithmetic.
//!
//! Every primitive computes the nearest result first and recovers the exact
//! rounding error with an error-free transformation (TwoSum for addition, an
//! FMA residual for multiplication, division and square roots). The result is
//! stepped by one ulp only when the error points in the requested direction,
//! so exactly representable results come back unchanged.
//!
//! Near the underflow threshold the FMA residual is no longer exact; there the
//! primitives step unconditionally, which is always safe.

/// Magnitude below which FMA residuals may be inexact (2^-969).
const TINY: f64 = 2.004_168_360_008_972_8e-292;

/// Smallest float strictly greater than `x`.
pub fn next_up(x: f64) -> f64 {
    if x.is_nan() || x == f64::INFINITY {
        return x;
    }
    if x == 0.0 {
        return f64::from_bits(1);
    }
    let bits = x.to_bits();
    if x > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

/// Largest float strictly smaller than `x`.
pub fn next_down(x: f64) -> f64 {
    -next_up(-x)
}

fn overflow_up(s: f64, finite_inputs: bool) -> f64 {
    if finite_inputs && s == f64::NEG_INFINITY {
        -f64::MAX
    } else {
        s
    }
}

fn overflow_down(s: f64, finite_inputs: bool) -> f64 {
    if finite_inputs && s == f64::INFINITY {
        f64::MAX
    } else {
        s
    }
}

fn two_sum_error(a: f64, b: f64, s: f64) -> f64 {
    let bb = s - a;
    (a - (s - bb)) + (b - bb)
}

/// `a + b` rounded toward positive infinity.
pub fn add_up(a: f64, b: f64) -> f64 {
    let s = a + b;
    if !s.is_finite() {
        return overflow_up(s, a.is_finite() && b.is_finite());
    }
    if two_sum_error(a, b, s) > 0.0 {
        next_up(s)
    } else {
        s
    }
}

/// `a + b` rounded toward negative infinity.
pub fn add_down(a: f64, b: f64) -> f64 {
    let s = a + b;
    if !s.is_finite() {
        return overflow_down(s, a.is_finite() && b.is_finite());
    }
    if two_sum_error(a, b, s) < 0.0 {
        next_down(s)
    } else {
        s
    }
}

/// `a - b` rounded toward positive infinity.
pub fn sub_up(a: f64, b: f64) -> f64 {
    add_up(a, -b)
}

/// `a - b` rounded toward negative infinity.
pub fn sub_down(a: f64, b: f64) -> f64 {
    add_down(a, -b)
}

fn product_error(a: f64, b: f64, p: f64) -> Option<f64> {
    if a == 0.0 || b == 0.0 {
        return Some(0.0);
    }
    if p.abs() < TINY {
        return None;
    }
    Some(a.mul_add(b, -p))
}

/// `a * b` rounded toward positive infinity. `0 * inf` is taken as zero.
pub fn mul_up(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let p = a * b;
    if !p.is_finite() {
        return overflow_up(p, a.is_finite() && b.is_finite());
    }
    match product_error(a, b, p) {
        Some(err) if err > 0.0 => next_up(p),
        Some(_) => p,
        None => next_up(p),
    }
}

/// `a * b` rounded toward negative infinity. `0 * inf` is taken as zero.
pub fn mul_down(a: f64, b: f64) -> f64 {
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let p = a * b;
    if !p.is_finite() {
        return overflow_down(p, a.is_finite() && b.is_finite());
    }
    match product_error(a, b, p) {
        Some(err) if err < 0.0 => next_down(p),
        Some(_) => p,
        None => next_down(p),
    }
}

// Sign of (a / b - q), or None when the residual cannot be trusted.
fn quotient_error(a: f64, b: f64, q: f64) -> Option<f64> {
    if a == 0.0 {
        return Some(0.0);
    }
    if q.abs() < TINY || a.abs() < TINY {
        return None;
    }
    let r = (-q).mul_add(b, a);
    Some(if b > 0.0 { r } else { -r })
}

/// `a / b` rounded toward positive infinity. `inf / inf` widens to `+inf`.
pub fn div_up(a: f64, b: f64) -> f64 {
    let q = a / b;
    if q.is_nan() {
        return f64::INFINITY;
    }
    if !q.is_finite() || !b.is_finite() || !a.is_finite() {
        return overflow_up(q, a.is_finite() && b.is_finite() && b != 0.0);
    }
    match quotient_error(a, b, q) {
        Some(err) if err > 0.0 => next_up(q),
        Some(_) => q,
        None => next_up(q),
    }
}

/// `a / b` rounded toward negative infinity. `inf / inf` widens to `-inf`.
pub fn div_down(a: f64, b: f64) -> f64 {
    let q = a / b;
    if q.is_nan() {
        return f64::NEG_INFINITY;
    }
    if !q.is_finite() || !b.is_finite() || !a.is_finite() {
        return overflow_down(q, a.is_finite() && b.is_finite() && b != 0.0);
    }
    match quotient_error(a, b, q) {
        Some(err) if err < 0.0 => next_down(q),
        Some(_) => q,
        None => next_down(q),
    }
}

/// Square root rounded toward positive infinity (`NaN` for negative input).
pub fn sqrt_up(x: f64) -> f64 {
    let s = x.sqrt();
    if !s.is_finite() || x == 0.0 {
        return s;
    }
    if x < TINY {
        return next_up(s);
    }
    if (-s).mul_add(s, x) > 0.0 {
        next_up(s)
    } else {
        s
    }
}

/// Square root rounded toward negative infinity (`NaN` for negative input).
pub fn sqrt_down(x: f64) -> f64 {
    let s = x.sqrt();
    if !s.is_finite() || x == 0.0 {
        return s;
    }
    if x < TINY {
        return next_down(s).max(0.0);
    }
    if (-s).mul_add(s, x) < 0.0 {
        next_down(s)
    } else {
        s
    }
}
