//! Arithmetic and transcendental operations.

use super::BigDouble;
use crate::common::consts::power_of_10;
use crate::common::util::ln_factorial;
use crate::defs::{Exponent, EXP_LIMIT, MAX_SIGNIFICANT_DIGITS};
use core::f64::consts::{LN_10, LOG10_E, LOG2_10};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl BigDouble {
    /// Addition.
    ///
    /// The smaller addend is rescaled to the exponent of the larger one and
    /// the sum is rounded at the 14th digit, which keeps integer sums exact.
    /// An addend more than 17 decimal orders below the other is lost.
    pub fn add(&self, d2: &Self) -> Self {
        if self.m == 0.0 {
            return *d2;
        }
        if d2.m == 0.0 {
            return *self;
        }
        if !self.m.is_finite() || !d2.m.is_finite() {
            return Self::normalize(self.m + d2.m, 0);
        }

        let (big, small) = if self.e >= d2.e { (self, d2) } else { (d2, self) };
        if big.e - small.e > MAX_SIGNIFICANT_DIGITS {
            return *big;
        }

        let scaled =
            (1e14 * big.m + 1e14 * small.m * power_of_10((small.e - big.e) as i32)).round();
        Self::normalize(scaled, big.e - 14)
    }

    /// Subtraction.
    pub fn sub(&self, d2: &Self) -> Self {
        self.add(&-*d2)
    }

    /// Multiplication.
    pub fn mul(&self, d2: &Self) -> Self {
        Self::normalize(self.m * d2.m, self.e + d2.e)
    }

    /// Division. Division by zero produces an infinity of the dividend's
    /// sign; 0/0 produces NaN.
    pub fn div(&self, d2: &Self) -> Self {
        Self::normalize(self.m / d2.m, self.e - d2.e)
    }

    /// Reciprocal.
    pub fn recip(&self) -> Self {
        Self::normalize(1.0 / self.m, -self.e)
    }

    /// 10 raised to the binary64 power `t`.
    pub fn pow10(t: f64) -> Self {
        if t.is_nan() {
            return Self::NAN;
        }
        if t >= EXP_LIMIT as f64 {
            return Self::INFINITY;
        }
        if t <= -(EXP_LIMIT as f64) {
            return Self::ZERO;
        }

        let n = t.trunc();
        Self::normalize(10f64.powf(t - n), n as Exponent)
    }

    /// Raises `self` to the power `p`.
    ///
    /// A negative base with a non-integer exponent produces NaN.
    pub fn pow(&self, p: f64) -> Self {
        if self.is_nan() || p.is_nan() {
            return Self::NAN;
        }
        if p == 0.0 {
            return Self::ONE;
        }
        if self.m == 0.0 {
            return if p > 0.0 { Self::ZERO } else { Self::INFINITY };
        }
        if !self.m.is_finite() || !p.is_finite() {
            return Self::from_f64(self.to_f64().powf(p));
        }

        let p_int = p == p.trunc();

        // a power of ten raised to an integer stays a power of ten
        if p_int && self.m == 1.0 {
            let t = self.e as f64 * p;
            if t.abs() < EXP_LIMIT as f64 {
                return BigDouble {
                    m: 1.0,
                    e: t as Exponent,
                };
            }
            return if t > 0.0 { Self::INFINITY } else { Self::ZERO };
        }

        let t = self.e as f64 * p;
        if t == t.trunc() && t.abs() < EXP_LIMIT as f64 {
            let new_m = self.m.powf(p);
            if new_m.is_finite() && new_m != 0.0 {
                return Self::normalize(new_m, t as Exponent);
            }
        }

        let new_e = t.trunc();
        let new_m = 10f64.powf(p * self.m.log10() + (t - new_e));
        if new_m.is_finite() && new_m != 0.0 && new_e.abs() < EXP_LIMIT as f64 {
            return Self::normalize(new_m, new_e as Exponent);
        }

        // the remaining cases: negative base, or a residual that over- or
        // underflows the binary64 intermediate
        let result = Self::pow10(p * self.abs_log10());
        if self.sign() < 0 {
            if p_int && (p % 2.0).abs() == 1.0 {
                return -result;
            }
            if !p_int {
                return Self::NAN;
            }
        }
        result
    }

    /// Base-10 logarithm of the absolute value, as binary64.
    pub fn abs_log10(&self) -> f64 {
        self.e as f64 + self.m.abs().log10()
    }

    /// Base-10 logarithm, as binary64. Negative values produce NaN, zero
    /// produces negative infinity.
    pub fn log10(&self) -> f64 {
        self.e as f64 + self.m.log10()
    }

    /// Base-2 logarithm, as binary64.
    pub fn log2(&self) -> f64 {
        self.log10() * LOG2_10
    }

    /// Natural logarithm, as binary64.
    pub fn ln(&self) -> f64 {
        self.log10() * LN_10
    }

    /// Logarithm in the given base, as binary64.
    pub fn log(&self, base: f64) -> f64 {
        self.log10() * LN_10 / base.ln()
    }

    /// e raised to `self`.
    pub fn exp(&self) -> Self {
        if self.is_nan() {
            return Self::NAN;
        }
        Self::pow10(self.to_f64() * LOG10_E)
    }

    /// Square root. Negative values produce NaN.
    pub fn sqrt(&self) -> Self {
        if !self.m.is_finite() {
            return Self::normalize(self.m.sqrt(), 0);
        }
        if self.m == 0.0 {
            return Self::ZERO;
        }
        if self.m < 0.0 {
            return Self::NAN;
        }
        if self.e % 2 == 0 {
            Self::normalize(self.m.sqrt(), self.e / 2)
        } else {
            // shift one decimal order into the mantissa to halve the exponent
            Self::normalize((self.m * 10.0).sqrt(), (self.e - 1) / 2)
        }
    }

    /// Cube root.
    pub fn cbrt(&self) -> Self {
        if !self.m.is_finite() {
            return Self::normalize(self.m.cbrt(), 0);
        }
        if self.m == 0.0 {
            return Self::ZERO;
        }
        let r = self.e.rem_euclid(3);
        Self::normalize((self.m * power_of_10(r as i32)).cbrt(), (self.e - r) / 3)
    }

    /// Hyperbolic sine.
    pub fn sinh(&self) -> Self {
        self.exp()
            .sub(&(-*self).exp())
            .div(&Self::from_f64(2.0))
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self) -> Self {
        self.exp()
            .add(&(-*self).exp())
            .div(&Self::from_f64(2.0))
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Self {
        Self::from_f64(self.to_f64().tanh())
    }

    /// Inverse hyperbolic sine, as binary64.
    pub fn asinh(&self) -> f64 {
        self.mul(self).add(&Self::ONE).sqrt().add(self).ln()
    }

    /// Inverse hyperbolic cosine, as binary64. Values below 1 produce NaN.
    pub fn acosh(&self) -> f64 {
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
        Self::pow10(ln_factorial(d) * LOG10_E)
    }
}

impl Neg for BigDouble {
    type Output = BigDouble;

    fn neg(self) -> Self::Output {
        if self.m == 0.0 {
            return BigDouble::ZERO;
        }
        BigDouble {
            m: -self.m,
            e: self.e,
        }
    }
}

impl Neg for &BigDouble {
    type Output = BigDouble;

    fn neg(self) -> Self::Output {
        -*self
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $fn:ident) => {
        impl $trait for BigDouble {
            type Output = BigDouble;

            fn $fn(self, rhs: BigDouble) -> Self::Output {
                BigDouble::$fn(&self, &rhs)
            }
        }

        impl $trait<&BigDouble> for BigDouble {
            type Output = BigDouble;

            fn $fn(self, rhs: &BigDouble) -> Self::Output {
                BigDouble::$fn(&self, rhs)
            }
        }

        impl $trait<BigDouble> for &BigDouble {
            type Output = BigDouble;

            fn $fn(self, rhs: BigDouble) -> Self::Output {
                BigDouble::$fn(self, &rhs)
            }
        }

        impl $trait<&BigDouble> for &BigDouble {
            type Output = BigDouble;

            fn $fn(self, rhs: &BigDouble) -> Self::Output {
                BigDouble::$fn(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add);
impl_binary_op!(Sub, sub);
impl_binary_op!(Mul, mul);
impl_binary_op!(Div, div);

macro_rules! impl_assign_op {
    ($trait:ident, $fn:ident, $op:ident) => {
        impl $trait for BigDouble {
            fn $fn(&mut self, rhs: BigDouble) {
                *self = BigDouble::$op(self, &rhs);
            }
        }

        impl $trait<&BigDouble> for BigDouble {
            fn $fn(&mut self, rhs: &BigDouble) {
                *self = BigDouble::$op(self, rhs);
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, add);
impl_assign_op!(SubAssign, sub_assign, sub);
impl_assign_op!(MulAssign, mul_assign, mul);
impl_assign_op!(DivAssign, div_assign, div);
