//! Evaluation of the Voigt line-shape function.
//!
//! The dimensionless Voigt function H(a, v) is the convolution of a Gaussian
//! (Doppler) and a Lorentzian (damping) profile, with the damping parameter
//! `a` setting the relative weight of the Lorentzian wings and `v` the
//! reduced frequency offset from line center in Doppler widths.
//!
//! For `v < 10` the function is evaluated from a precomputed table of Taylor
//! coefficients in `a` (one cubic per node), blended across three
//! neighboring nodes with a quadratic interpolation in `v`. Beyond `v = 10`
//! the Lorentzian wing dominates and the Harris asymptotic expansion in
//! powers of `1/v^2` takes over. The expansion is accurate for damping
//! parameters well below unity, the regime of thermally broadened
//! absorption lines.

mod table;

use crate::constants::PI;
use lazy_static::lazy_static;
use ndarray::Array1;

/// Floating-point precision to use for Voigt function evaluation.
#[allow(non_camel_case_types)]
pub type fvt = f64;

/// Number of interpolation nodes in the coefficient table.
const N_TABLE_NODES: usize = table::H0.len();

lazy_static! {
    /// Constant factor 1/sqrt(pi) appearing in both evaluation branches.
    static ref ONE_OVER_SQRT_PI: fvt = 1.0 / fvt::sqrt(PI);
}

/// Evaluates the Voigt function H(a, v) at every element of `v`.
///
/// The damping parameter `a` must be non-negative. The offsets in `v` may
/// be signed, since H is even in v.
pub fn voigt(a: fvt, v: &Array1<fvt>) -> Array1<fvt> {
    v.mapv(|v| voigt_point(a, v))
}

/// Evaluates the Voigt function H(a, v) at a single reduced frequency offset.
pub fn voigt_point(a: fvt, v: fvt) -> fvt {
    let v = fvt::abs(v);
    if a == 0.0 {
        // Pure Gaussian profile, no table access needed.
        return fvt::exp(-v * v);
    }
    if v >= 10.0 {
        return far_wing(a, v);
    }
    // Rescale to the finer node spacing of the table.
    let scaled = 20.0 * v;
    let p = scaled as usize;
    if p + 2 > N_TABLE_NODES - 1 {
        // Floating rounding pushed the node index past the edge of the
        // table domain, where the far-wing expansion is already accurate.
        return far_wing(a, v);
    }
    let x = 0.5 * (p as fvt);
    let y = x + 0.5;
    let z = x + 1.0;
    let v1 = 0.5 * scaled;
    2.0 * ((v1 - y) * (v1 - z) * node_polynomial(p, a)
        - 2.0 * (v1 - x) * (v1 - z) * node_polynomial(p + 1, a)
        + (v1 - x) * (v1 - y) * node_polynomial(p + 2, a))
}

/// Evaluates the cubic polynomial in the damping parameter at table node `i`.
fn node_polynomial(i: usize, a: fvt) -> fvt {
    table::H0[i] + a * (table::H1[i] + a * (table::H2[i] + a * table::H3[i]))
}

/// Evaluates the Harris expansion of the Lorentzian-dominated far wing,
/// a rational series in 1/v^2.
fn far_wing(a: fvt, v: fvt) -> fvt {
    let r = 1.0 / (v * v);
    a * r
        * (*ONE_OVER_SQRT_PI)
        * (1.0 + r * (1.5 + r * (3.75 + r * (13.125 + 59.0625 * r)))
            - a * a * r * (1.0 + r * (5.0 + 26.25 * r)))
}
