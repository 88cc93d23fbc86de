//! Formatting and parsing.

use super::BigDouble;
use crate::common::util::{split_exponent, to_precision};
use crate::defs::{Error, Exponent, MAX_SIGNIFICANT_DIGITS};
use core::fmt::{self, Display, Formatter, LowerExp, UpperExp};
use core::str::FromStr;

impl BigDouble {
    /// Parses a number from its decimal string form.
    ///
    /// Accepted forms: `[sign] digits [. digits] [(e|E|eE|Ee)[+|-] digits]`
    /// with whitespace around the exponent marker ignored, and the sentinel
    /// strings `NaN`, `Infinity`, `-Infinity`.
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the string is not a number in an accepted form.
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

        let m: f64 = front.parse().map_err(|_| Error::InvalidArgument)?;
        // "inf" and "nan" spellings, and fronts beyond the binary64 range,
        // are not numbers in this format
        if !m.is_finite() {
            return Err(Error::InvalidArgument);
        }

        match exp {
            None => Ok(Self::from_f64(m)),
            Some(es) => {
                let e: Exponent = es.parse().map_err(|_| Error::InvalidArgument)?;
                Ok(Self::normalize(m, e))
            }
        }
    }

    /// Formats using a specifier: `G[n]` (compact), `E[n]` (exponential),
    /// `F[n]` (fixed point), or `R` (round trip).
    ///
    /// ## Errors
    ///
    ///  - InvalidArgument: the specifier is not recognized.
    pub fn format_spec(&self, spec: &str) -> Result<String, Error> {
        let mut chars = spec.chars();
        let kind = chars.next().unwrap_or('G').to_ascii_uppercase();
        let rest = chars.as_str();
        let digits = if rest.is_empty() {
            None
        } else {
            Some(rest.parse::<usize>().map_err(|_| Error::InvalidArgument)?)
        };

        if let Some(s) = self.sentinel_str() {
            return Ok(s.to_string());
        }

        match kind {
            'G' => Ok(self.fmt_g(digits)),
            'E' => Ok(self.fmt_e(digits.unwrap_or(6), true)),
            'F' => Ok(self.fmt_f(digits.unwrap_or(2))),
            'R' => Ok(self.fmt_r()),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn sentinel_str(&self) -> Option<&'static str> {
        if self.m.is_nan() {
            Some("NaN")
        } else if self.m == f64::INFINITY {
            Some("Infinity")
        } else if self.m == f64::NEG_INFINITY {
            Some("-Infinity")
        } else {
            None
        }
    }

    fn fmt_g(&self, digits: Option<usize>) -> String {
        if (-6..=20).contains(&self.e) {
            let v = self.to_f64();
            match digits {
                None => format!("{}", v),
                Some(n) => to_precision(v, n.max(1)),
            }
        } else {
            let mant = match digits {
                None => format!("{}", self.m),
                Some(n) => to_precision(self.m, n.max(1)),
            };
            format!(
                "{}E{}{}",
                mant,
                if self.e < 0 { '-' } else { '+' },
                self.e.unsigned_abs()
            )
        }
    }

    fn fmt_e(&self, digits: usize, upper: bool) -> String {
        let mut m = self.m;
        let mut e = self.e;

        // carry into the exponent when rounding pushes the mantissa to 10
        let factor = 10f64.powi(digits as i32);
        if (m.abs() * factor).round() >= 10.0 * factor {
            m /= 10.0;
            e += 1;
        }

        format!(
            "{:.*}{}{}{}",
            digits,
            m,
            if upper { 'E' } else { 'e' },
            if e < 0 { '-' } else { '+' },
            e.unsigned_abs()
        )
    }

    fn fmt_f(&self, digits: usize) -> String {
        if self.e >= MAX_SIGNIFICANT_DIGITS {
            // past the significant range the mantissa digits are followed by
            // zeros
            let ds: String = format!("{}", self.m.abs())
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            let zeros = (self.e as usize + 1).saturating_sub(ds.len());

            let mut out = String::new();
            if self.m < 0.0 {
                out.push('-');
            }
            out.push_str(&ds);
            out.extend(core::iter::repeat('0').take(zeros));
            if digits > 0 {
                out.push('.');
                out.extend(core::iter::repeat('0').take(digits));
            }
            out
        } else {
            format!("{:.*}", digits, self.to_f64())
        }
    }

    fn fmt_r(&self) -> String {
        if self.m == 0.0 {
            return "0".to_string();
        }
        format!(
            "{}E{}{}",
            self.m,
            if self.e < 0 { '-' } else { '+' },
            self.e.unsigned_abs()
        )
    }
}

impl Display for BigDouble {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.format_spec("G") {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl LowerExp for BigDouble {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.sentinel_str() {
            Some(s) => f.write_str(s),
            None => f.write_str(&self.fmt_e(f.precision().unwrap_or(6), false)),
        }
    }
}

impl UpperExp for BigDouble {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.sentinel_str() {
            Some(s) => f.write_str(s),
            None => f.write_str(&self.fmt_e(f.precision().unwrap_or(6), true)),
        }
    }
}

impl FromStr for BigDouble {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_parse() {
        let d: BigDouble = "317".parse().unwrap();
        assert_eq!(d.mantissa(), 3.17);
        assert_eq!(d.exponent(), 2);

        let d: BigDouble = "-0.05".parse().unwrap();
        assert_eq!(d.mantissa(), -5.0);
        assert_eq!(d.exponent(), -2);

        let d: BigDouble = "1.23456789e1234".parse().unwrap();
        assert_eq!(d.mantissa(), 1.23456789);
        assert_eq!(d.exponent(), 1234);

        // marker variants
        for s in ["1.5e100", "1.5E100", "1.5e+100", "1.5E+100", "1.5eE100", "1.5Ee+100", "1.5 e 100"] {
            let d: BigDouble = s.parse().unwrap();
            assert_eq!(d.mantissa(), 1.5, "parsing {:?}", s);
            assert_eq!(d.exponent(), 100, "parsing {:?}", s);
        }

        let d: BigDouble = "2.5e-3".parse().unwrap();
        assert_eq!(d.mantissa(), 2.5);
        assert_eq!(d.exponent(), -3);

        // sentinels
        assert!("NaN".parse::<BigDouble>().unwrap().is_nan());
        assert!("Infinity"
            .parse::<BigDouble>()
            .unwrap()
            .is_positive_infinity());
        assert!("-Infinity"
            .parse::<BigDouble>()
            .unwrap()
            .is_negative_infinity());

        // rejects
        assert!("".parse::<BigDouble>().is_err());
        assert!("abc".parse::<BigDouble>().is_err());
        assert!("nan".parse::<BigDouble>().is_err());
        assert!("inf".parse::<BigDouble>().is_err());
        assert!("1.5e".parse::<BigDouble>().is_err());
        assert!("1.5ez".parse::<BigDouble>().is_err());
    }

    #[test]
    fn test_display_g() {
        assert_eq!(format!("{}", BigDouble::from_f64(317.0)), "317");
        assert_eq!(format!("{}", BigDouble::from_f64(-2.5)), "-2.5");
        assert_eq!(format!("{}", BigDouble::from_f64(0.0)), "0");
        assert_eq!(
            format!("{}", BigDouble::from_mantissa_exponent(1.23456789, 1234)),
            "1.23456789E+1234"
        );
        assert_eq!(
            format!("{}", BigDouble::from_mantissa_exponent(-1.5, -1234)),
            "-1.5E-1234"
        );
        assert_eq!(format!("{}", BigDouble::NAN), "NaN");
        assert_eq!(format!("{}", BigDouble::INFINITY), "Infinity");
        assert_eq!(format!("{}", BigDouble::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_format_e() {
        let d = BigDouble::from_f64(317.0);
        assert_eq!(d.format_spec("E2").unwrap(), "3.17E+2");
        assert_eq!(d.format_spec("E4").unwrap(), "3.1700E+2");

        let d = BigDouble::from_f64(-0.05);
        assert_eq!(d.format_spec("E1").unwrap(), "-5.0E-2");

        // exponential rounding carries into the exponent
        let d = BigDouble::from_f64(9.996);
        assert_eq!(d.format_spec("E2").unwrap(), "1.00E+1");

        assert_eq!(format!("{:.2e}", BigDouble::from_f64(317.0)), "3.17e+2");
        assert_eq!(format!("{:.2E}", BigDouble::from_f64(317.0)), "3.17E+2");
    }

    #[test]
    fn test_format_f() {
        let d = BigDouble::from_f64(317.25);
        assert_eq!(d.format_spec("F2").unwrap(), "317.25");
        assert_eq!(d.format_spec("F0").unwrap(), "317");
        assert_eq!(d.format_spec("F4").unwrap(), "317.2500");

        // beyond the significant range: mantissa digits then zeros
        let d = BigDouble::from_mantissa_exponent(3.17, 20);
        assert_eq!(d.format_spec("F0").unwrap(), "317000000000000000000");
        assert_eq!(d.format_spec("F2").unwrap(), "317000000000000000000.00");
        let d = BigDouble::from_mantissa_exponent(-3.17, 20);
        assert_eq!(d.format_spec("F0").unwrap(), "-317000000000000000000");
    }

    #[test]
    fn test_format_r_round_trip() {
        let vals = [
            BigDouble::from_f64(317.0),
            BigDouble::from_f64(-0.123456),
            BigDouble::from_mantissa_exponent(1.23456789012345, 4321),
            BigDouble::from_mantissa_exponent(-9.87654321, -4321),
            BigDouble::ZERO,
        ];
        for v in vals {
            let s = v.format_spec("R").unwrap();
            let back: BigDouble = s.parse().unwrap();
            assert_eq!(back, v, "round trip of {}", s);
        }
    }

    #[test]
    fn test_format_g_precision() {
        let d = BigDouble::from_f64(1234.5678);
        assert_eq!(d.format_spec("G4").unwrap(), "1235");
        assert_eq!(d.format_spec("G6").unwrap(), "1234.57");

        let d = BigDouble::from_f64(0.000123456);
        assert_eq!(d.format_spec("G3").unwrap(), "0.000123");

        assert!(d.format_spec("X2").is_err());
        assert!(d.format_spec("G2x").is_err());
    }
}
