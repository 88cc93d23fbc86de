//! Parsing and formatting.

use super::{Category, Quad, FRAC_MASK};
use crate::common::consts::{TEN_100_Q, TEN_10_Q, TEN_19_Q, TEN_3_Q, TEN_5_Q, TEN_Q};
use crate::common::util::{split_exponent, trim_fraction};
use crate::defs::Error;
use core::f64::consts::LOG10_2;
use core::fmt::{self, Display, Formatter, Write as _};
use core::str::FromStr;

/// String form selector for [`Quad::format`].
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum FormatMode {
    /// Exact hex significand with a binary exponent, e.g. `0x1.8p+1`.
    HexExponential,

    /// Decimal mantissa of 17 significant digits with a decimal exponent.
    DecimalExponential,

    /// Decimal mantissa of 9 significant digits with a decimal exponent.
    ScientificApproximate,

    /// Every stored digit, extracted by repeated scaling; round trips through
    /// parsing.
    ScientificExact,
}

impl Quad {
    /// Parses a number from its decimal string form.
    ///
    /// Accepted forms: `[sign] digits [. digits] [(e|E|eE|Ee)[+|-] digits]`
    /// with whitespace around the exponent marker ignored, and the sentinel
    /// strings `NaN`, `Infinity`, `-Infinity`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not a number in an accepted form,
    ///    or an exponent-free part does not fit a 64-bit integer.
    pub fn parse(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "NaN" => return Ok(Self::NAN),
            "Infinity" | "+Infinity" => return Ok(Self::INFINITY),
            "-Infinity" => return Ok(Self::NEG_INFINITY),
            _ => {}
        }

        let (front, exp) = split_exponent(s);
        if front.is_empty() {
            return Err(Error::InvalidArgument);
        }

        match exp {
            None => Self::parse_plain(&front),
            Some(es) => {
                let m: f64 = front.parse().map_err(|_| Error::InvalidArgument)?;
                if !m.is_finite() {
                    return Err(Error::InvalidArgument);
                }
                let e: i64 = es.parse().map_err(|_| Error::InvalidArgument)?;
                Ok(scale_pow10(Self::from_f64(m), e))
            }
        }
    }

    // `[sign] digits [. digits]`, both sides as 64-bit integers combined in
    // Quad arithmetic, so up to 19 fraction digits survive.
    fn parse_plain(front: &str) -> Result<Self, Error> {
        let (neg, digits) = match front.strip_prefix('-') {
            Some(r) => (true, r),
            None => (false, front.strip_prefix('+').unwrap_or(front)),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::InvalidArgument);
        }
        if frac_part.contains('.') || frac_part.len() > 19 {
            return Err(Error::InvalidArgument);
        }

        let ip: u64 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| Error::InvalidArgument)?
        };

        let mut v = Self::from_u64(ip);
        if !frac_part.is_empty() {
            let fp: u64 = frac_part.parse().map_err(|_| Error::InvalidArgument)?;
            let scale = Self::from_u64(10u64.pow(frac_part.len() as u32));
            v = v.add(&Self::from_u64(fp).div(&scale));
        }

        Ok(if neg { v.neg() } else { v })
    }

    /// Formats `self` in the requested mode.
    pub fn format(&self, mode: FormatMode) -> String {
        if let Some(s) = self.sentinel_str() {
            return s.to_string();
        }
        match mode {
            FormatMode::HexExponential => self.fmt_hex(),
            FormatMode::DecimalExponential => self.fmt_from_log10(17),
            FormatMode::ScientificApproximate => self.fmt_from_log10(9),
            FormatMode::ScientificExact => self.fmt_sci_exact(),
        }
    }

    fn sentinel_str(&self) -> Option<&'static str> {
        match self.category() {
            Category::Zero => Some("0"),
            Category::InfPos => Some("Infinity"),
            Category::InfNeg => Some("-Infinity"),
            Category::Nan => Some("NaN"),
            _ => None,
        }
    }

    // sign, "0x1.", the 63 fraction bits as hex, "p", the power of two
    fn fmt_hex(&self) -> String {
        let mut out = String::new();
        if self.sign_bit() != 0 {
            out.push('-');
        }
        let frac = (self.sig & FRAC_MASK) << 1;
        let hex = format!("{:016x}", frac);
        let hex = hex.trim_end_matches('0');
        let hex = if hex.is_empty() { "0" } else { hex };
        let _ = write!(out, "0x1.{}p{:+}", hex, self.e + 63);
        out
    }

    // approximate decimal form from the base-10 logarithm split into its
    // integer and fractional parts
    fn fmt_from_log10(&self, digits: usize) -> String {
        let l10 = self.abs().log2() * LOG10_2;
        let mut k = l10.floor();
        let mut m = 10f64.powf(l10 - k);
        if m >= 10.0 {
            m /= 10.0;
            k += 1.0;
        }

        // rounding at the digit count may carry into the exponent
        let factor = 10f64.powi(digits as i32 - 1);
        if (m * factor).round() >= 10.0 * factor {
            m /= 10.0;
            k += 1.0;
        }

        let mant = format!("{:.*}", digits - 1, m);
        let mant = trim_fraction(&mant, true);
        let sign = if self.sign_bit() != 0 { "-" } else { "" };
        format!("{}{}e{}", sign, mant, k as i64)
    }

    // Exact mode: scale into [1, 10) by batched powers of ten, harvest the
    // first digit, then pull fraction digits in groups of 19 until the
    // fraction is exhausted.
    fn fmt_sci_exact(&self) -> String {
        let mut out = String::new();
        if self.sign_bit() != 0 {
            out.push('-');
        }

        let mut v = self.abs();
        let mut k: i64 = 0;

        // one long jump first, so the batch loops below stay short for
        // extreme exponents
        let est = v.log2() * LOG10_2;
        if est.abs() > 38.0 {
            let k0 = est.floor() as i64;
            v = if k0 > 0 {
                v.div(&TEN_Q.powi(k0))
            } else {
                v.mul(&TEN_Q.powi(-k0))
            };
            k += k0;
        }

        let down: [(&Quad, i64); 5] = [
            (&TEN_19_Q, 19),
            (&TEN_10_Q, 10),
            (&TEN_5_Q, 5),
            (&TEN_3_Q, 3),
            (&TEN_Q, 1),
        ];
        for (p, n) in down {
            while v >= *p {
                v = v.div(p);
                k += n;
            }
        }
        while v < Self::ONE {
            v = v.mul(&TEN_Q);
            k -= 1;
        }

        let first = v.trunc();
        out.push((b'0' + first.to_u64().unwrap_or(0) as u8) as char);
        out.push('.');

        let mut f = v.sub(&first);
        let mut fraction = String::new();
        let mut groups = 0;
        while !f.is_zero() && groups < 5 {
            let scaled = f.mul(&TEN_19_Q);
            let int_part = scaled.trunc();
            let g = int_part
                .to_u64()
                .unwrap_or(0)
                .min(9_999_999_999_999_999_999);
            let _ = write!(fraction, "{:019}", g);
            f = scaled.sub(&int_part);
            groups += 1;
        }

        let fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            out.push('0');
        } else {
            out.push_str(fraction);
        }

        let _ = write!(out, "e{}", k);
        out
    }
}

// multiplies by 10^e with the powers of ten batched; far outside the
// representable range a single saturating power is applied instead
fn scale_pow10(v: Quad, e: i64) -> Quad {
    if v.is_zero() || !v.is_finite() {
        return v;
    }
    // anything past the exponent range saturates anyway
    let e = e.clamp(-4_000_000_000_000_000_000, 4_000_000_000_000_000_000);
    if e.unsigned_abs() > 400 {
        return if e > 0 {
            v.mul(&TEN_Q.powi(e))
        } else {
            v.div(&TEN_Q.powi(-e))
        };
    }

    let mut v = v;
    let mut k = e;
    while k >= 100 {
        v = v.mul(&TEN_100_Q);
        k -= 100;
    }
    while k >= 10 {
        v = v.mul(&TEN_10_Q);
        k -= 10;
    }
    while k >= 1 {
        v = v.mul(&TEN_Q);
        k -= 1;
    }
    while k <= -100 {
        v = v.div(&TEN_100_Q);
        k += 100;
    }
    while k <= -10 {
        v = v.div(&TEN_10_Q);
        k += 10;
    }
    while k <= -1 {
        v = v.div(&TEN_Q);
        k += 1;
    }
    v
}

impl Display for Quad {
    /// The exact scientific form.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(FormatMode::ScientificExact))
    }
}

impl FromStr for Quad {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!("0".parse::<Quad>().unwrap(), Quad::ZERO);
        assert_eq!("42".parse::<Quad>().unwrap(), Quad::from_u64(42));
        assert_eq!("-42".parse::<Quad>().unwrap(), Quad::from_i64(-42));
        assert_eq!("+42".parse::<Quad>().unwrap(), Quad::from_u64(42));

        let q: Quad = "1.5".parse().unwrap();
        assert_eq!(q.to_f64(), 1.5);
        let q: Quad = "-0.25".parse().unwrap();
        assert_eq!(q.to_f64(), -0.25);
        let q: Quad = "3.".parse().unwrap();
        assert_eq!(q.to_f64(), 3.0);
        let q: Quad = ".5".parse().unwrap();
        assert_eq!(q.to_f64(), 0.5);

        let q: Quad = "1.15".parse().unwrap();
        assert_eq!(q.to_f64(), 1.15);

        assert_eq!(
            "18446744073709551615".parse::<Quad>().unwrap(),
            Quad::from_u64(u64::MAX)
        );
    }

    #[test]
    fn test_parse_exponent_forms() {
        // all marker spellings produce the binary64 value
        for s in ["1e308", "1E308", "1e+308", "1E+308"] {
            let q: Quad = s.parse().unwrap();
            assert_eq!(q.to_f64(), 1e308, "parsing {:?}", s);
        }

        let q: Quad = "1e-308".parse().unwrap();
        assert_eq!(q.to_f64(), 1e-308);

        let q: Quad = "2.5e3".parse().unwrap();
        assert_eq!(q.to_f64(), 2500.0);
        let q: Quad = "-2.5e-2".parse().unwrap();
        assert!((q.to_f64() + 0.025).abs() < 1e-17);

        // far beyond binary64
        let q: Quad = "1e100000".parse().unwrap();
        assert!(q.is_finite());
        assert!((q.log10() - 100000.0).abs() < 1e-6);
        let q: Quad = "1e-100000".parse().unwrap();
        assert!(!q.is_zero());
        assert!((q.log10() + 100000.0).abs() < 1e-6);

        // saturation far past the exponent range
        assert!("1e3000000000000000000"
            .parse::<Quad>()
            .unwrap()
            .is_positive_infinity());
        assert!("1e-3000000000000000000".parse::<Quad>().unwrap().is_zero());
    }

    #[test]
    fn test_parse_sentinels() {
        assert!("NaN".parse::<Quad>().unwrap().is_nan());
        assert!("Infinity".parse::<Quad>().unwrap().is_positive_infinity());
        assert!("-Infinity".parse::<Quad>().unwrap().is_negative_infinity());
    }

    #[test]
    fn test_parse_rejects() {
        for s in ["", "abc", "1..2", "1.2.3", "nan", "inf", "1e", "--5", "1e5x"] {
            assert!(s.parse::<Quad>().is_err(), "accepted {:?}", s);
        }
    }

    #[test]
    fn test_sci_exact() {
        assert_eq!(Quad::from_f64(1.0).format(FormatMode::ScientificExact), "1.0e0");
        assert_eq!(Quad::from_f64(2.5).format(FormatMode::ScientificExact), "2.5e0");
        assert_eq!(
            Quad::from_u64(10).format(FormatMode::ScientificExact),
            "1.0e1"
        );

        assert_eq!(Quad::ZERO.format(FormatMode::ScientificExact), "0");
        assert_eq!(Quad::NAN.format(FormatMode::ScientificExact), "NaN");
        assert_eq!(
            Quad::INFINITY.format(FormatMode::ScientificExact),
            "Infinity"
        );
        assert_eq!(
            Quad::NEG_INFINITY.format(FormatMode::ScientificExact),
            "-Infinity"
        );

        let s = Quad::from_i64(-317).format(FormatMode::ScientificExact);
        assert!(s.starts_with("-3.1") && s.ends_with("e2"), "got {}", s);
    }

    #[test]
    fn test_sci_exact_round_trip() {
        let vals = [
            Quad::from_f64(1.0),
            Quad::from_f64(-2.5),
            Quad::from_f64(1.15),
            Quad::from_f64(123456789.123),
            Quad::from_f64(9.87654321e-30),
            Quad::from_f64(1e308),
            Quad::from_f64(5e-324),
            Quad::from_u64(10).powi(1000),
            Quad::from_f64(7.5) << 100_000,
        ];
        for v in vals {
            let s = v.format(FormatMode::ScientificExact);
            let back: Quad = s.parse().unwrap();
            assert!(
                back.eq_tol(&v, 1e-12),
                "round trip of {}: got {}",
                s,
                back.format(FormatMode::ScientificExact)
            );
        }
    }

    #[test]
    fn test_display_is_exact_mode() {
        let q = Quad::from_f64(2.5);
        assert_eq!(format!("{}", q), q.format(FormatMode::ScientificExact));
        assert_eq!(format!("{}", Quad::NAN), "NaN");
    }

    #[test]
    fn test_hex_exponential() {
        assert_eq!(Quad::from_f64(1.0).format(FormatMode::HexExponential), "0x1.0p+0");
        assert_eq!(Quad::from_f64(3.0).format(FormatMode::HexExponential), "0x1.8p+1");
        assert_eq!(
            Quad::from_f64(-0.5).format(FormatMode::HexExponential),
            "-0x1.0p-1"
        );
        assert_eq!(Quad::ZERO.format(FormatMode::HexExponential), "0");
    }

    #[test]
    fn test_approximate_modes() {
        let q = Quad::from_f64(12345.0);
        assert_eq!(q.format(FormatMode::ScientificApproximate), "1.2345e4");

        let q = Quad::from_f64(2.0);
        assert_eq!(q.format(FormatMode::ScientificApproximate), "2.0e0");

        // at 17 digits the binary64 pow noise is visible; check by value
        let s = q.format(FormatMode::DecimalExponential);
        let back: Quad = s.parse().unwrap();
        assert!(back.eq_tol(&q, 1e-14), "got {}", s);

        let q = Quad::from_u64(10).powi(5000);
        let s = q.format(FormatMode::ScientificApproximate);
        assert!(s.ends_with("e5000"), "got {}", s);
        assert!(s.starts_with("1.0"), "got {}", s);

        let q = Quad::from_f64(-1.5e-10);
        let s = q.format(FormatMode::ScientificApproximate);
        assert_eq!(s, "-1.5e-10");
    }
}
