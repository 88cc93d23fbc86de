//! Powers, logarithms, roots, and the derived transcendentals.

use super::{Category, Quad};
use crate::common::util::ln_factorial;
use core::f64::consts::{LN_2, LOG10_2, LOG2_E};

impl Quad {
    /// Integer power by binary exponentiation. Sentinels propagate through
    /// the multiplication tables.
    pub fn powi(&self, n: i64) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if n == 0 {
            return Self::ONE;
        }
        if n < 0 {
            // -n overflows for i64::MIN; peel one factor off
            return if n == i64::MIN {
                Self::ONE.div(&self.powi(i64::MAX).mul(self))
            } else {
                Self::ONE.div(&self.powi(-n))
            };
        }

        let mut base = *self;
        let mut acc = Self::ONE;
        let mut k = n as u64;
        while k > 1 {
            if k & 1 == 1 {
                acc = acc.mul(&base);
            }
            base = base.mul(&base);
            k >>= 1;
        }
        acc.mul(&base)
    }

    /// Raises `self` to the binary64 power `p`.
    ///
    /// Integer exponents go through binary exponentiation and keep ~63 bits;
    /// the general path falls back to binary64 `powf` on the unit significand
    /// and keeps ~52 bits. A negative base with a non-integer exponent
    /// produces NaN.
    pub fn pow(&self, p: f64) -> Self {
        if p.is_nan() || self.is_nan() {
            return Self::NAN;
        }
        if p == 0.0 {
            return Self::ONE;
        }

        let p_int = p == p.trunc();
        if p_int && p >= i64::MIN as f64 && p <= i64::MAX as f64 {
            return self.powi(p as i64);
        }

        match self.category() {
            Category::Nan => Self::NAN,
            Category::Zero => {
                if p > 0.0 {
                    Self::ZERO
                } else {
                    Self::INFINITY
                }
            }
            // past the powi range, integer exponents are all even; IEEE pow
            // maps both infinities alike for the non-integer rest
            Category::InfPos | Category::InfNeg => {
                if p > 0.0 {
                    Self::INFINITY
                } else {
                    Self::ZERO
                }
            }
            Category::FinNeg => {
                // only a non-integer exponent is a domain error; an integer
                // exponent beyond the i64 range still obeys the parity rule
                if !p_int {
                    return Self::NAN;
                }
                let r = Self::exp2(p * self.abs().log2());
                if (p % 2.0).abs() == 1.0 {
                    r.neg()
                } else {
                    r
                }
            }
            Category::FinPos => Self::exp2(p * self.log2()),
        }
    }

    // 2^x for binary64 x, rescaled into the wide exponent range.
    pub(crate) fn exp2(l2: f64) -> Self {
        if l2.is_nan() {
            return Self::NAN;
        }
        if l2 >= super::EXP_UPPER_BOUND as f64 {
            return Self::INFINITY;
        }
        if l2 <= (super::EXP_LOWER_BOUND + 64) as f64 {
            return Self::ZERO;
        }

        let n = l2.floor();
        let m = Self::from_f64((l2 - n).exp2());
        m.scale_exp(n as i128)
    }

    /// Base-2 logarithm, as binary64. Negative values produce NaN, zero
    /// produces negative infinity.
    pub fn log2(&self) -> f64 {
        match self.category() {
            Category::Zero => f64::NEG_INFINITY,
            Category::InfPos => f64::INFINITY,
            Category::InfNeg | Category::Nan | Category::FinNeg => f64::NAN,
            Category::FinPos => {
                let unit = self.explicit_significand() as f64 * 2f64.powi(-63);
                (self.e + 63) as f64 + unit.log2()
            }
        }
    }

    /// Natural logarithm, as binary64.
    pub fn ln(&self) -> f64 {
        self.log2() * LN_2
    }

    /// Base-10 logarithm, as binary64.
    pub fn log10(&self) -> f64 {
        self.log2() * LOG10_2
    }

    /// Logarithm in the given base, as binary64.
    pub fn log(&self, base: f64) -> f64 {
        self.log2() / base.log2()
    }

    /// e raised to `self`.
    pub fn exp(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self::exp2(self.to_f64() * LOG2_E)
    }

    /// Square root. Negative values produce NaN.
    pub fn sqrt(&self) -> Self {
        match self.category() {
            Category::Zero => Self::ZERO,
            Category::InfPos => Self::INFINITY,
            Category::InfNeg | Category::Nan | Category::FinNeg => Self::NAN,
            Category::FinPos => {
                // binary64 seed on the unit significand, then Newton steps in
                // Quad arithmetic to recover the low bits
                let e2 = self.e + 63;
                let half = e2.div_euclid(2);
                let rem = e2.rem_euclid(2);
                let unit = self.explicit_significand() as f64 * 2f64.powi(-63 + rem as i32);
                let mut r = Self::from_f64(unit.sqrt()).scale_exp(half as i128);
                for _ in 0..2 {
                    r = r.add(&self.div(&r)).scale_exp(-1);
                }
                r
            }
        }
    }

    /// Cube root.
    pub fn cbrt(&self) -> Self {
        match self.category() {
            Category::Zero => Self::ZERO,
            Category::InfPos => Self::INFINITY,
            Category::InfNeg => Self::NEG_INFINITY,
            Category::Nan => Self::NAN,
            Category::FinPos | Category::FinNeg => {
                let neg = self.sign_bit() != 0;
                let a = self.abs();
                let e2 = a.e + 63;
                let third = e2.div_euclid(3);
                let rem = e2.rem_euclid(3);
                let unit = a.explicit_significand() as f64 * 2f64.powi(-63 + rem as i32);
                let mut r = Self::from_f64(unit.cbrt()).scale_exp(third as i128);
                let three = Self::from_u64(3);
                for _ in 0..2 {
                    // r = (2r + a / r^2) / 3
                    r = r
                        .scale_exp(1)
                        .add(&a.div(&r.mul(&r)))
                        .div(&three);
                }
                if neg {
                    r.neg()
                } else {
                    r
                }
            }
        }
    }

    /// Hyperbolic sine.
    pub fn sinh(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        self.exp().sub(&self.neg().exp()).scale_exp(-1)
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        self.exp().add(&self.neg().exp()).scale_exp(-1)
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        if self.is_zero() {
            return Self::ZERO;
        }
        Self::from_f64(self.to_f64().tanh())
    }

    /// Inverse hyperbolic sine, as binary64.
    pub fn asinh(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.mul(self).add(&Self::ONE).sqrt().add(self).ln()
    }

    /// Inverse hyperbolic cosine, as binary64. Values below 1 produce NaN.
    pub fn acosh(&self) -> f64 {
        if *self < Self::ONE {
            return f64::NAN;
        }
        self.mul(self).sub(&Self::ONE).sqrt().add(self).ln()
    }

    /// Inverse hyperbolic tangent, as binary64. Values outside (-1, 1)
    /// produce NaN.
    pub fn atanh(&self) -> f64 {
        if self.abs() >= Self::ONE {
            return f64::NAN;
        }
        0.5 * Self::ONE.add(self).div(&Self::ONE.sub(self)).ln()
    }

    /// `self` factorial by the Stirling series. Negative values produce NaN.
    pub fn factorial(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        let d = self.to_f64();
        if d < 0.0 {
            return Self::NAN;
        }
        if d.is_infinite() {
            return Self::INFINITY;
        }
        Self::exp2(ln_factorial(d) * LOG2_E)
    }
}
