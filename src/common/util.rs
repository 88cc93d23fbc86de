//! Auxiliary functions.

/// Number of leading zero bits of a 64-bit value.
#[inline]
pub(crate) fn nlz(x: u64) -> u32 {
    x.leading_zeros()
}

/// ln(n!) for non-negative `n`, by the Stirling series.
///
/// The argument is shifted above 10 with the recurrence ln Γ(x) = ln Γ(x+1) - ln x
/// before the series is applied.
pub(crate) fn ln_factorial(n: f64) -> f64 {
    debug_assert!(n >= 0.0);

    // ln Γ(x) with x = n + 1
    let mut x = n + 1.0;
    let mut shift = 0.0f64;
    while x < 10.0 {
        shift += x.ln();
        x += 1.0;
    }

    let x2 = x * x;
    let mut l = 0.9189385332046727; // ln sqrt(2*pi)
    l += (x - 0.5) * x.ln() - x;
    let mut xp = x;
    l += 1.0 / (12.0 * xp);
    xp *= x2;
    l -= 1.0 / (360.0 * xp);
    xp *= x2;
    l += 1.0 / (1260.0 * xp);
    xp *= x2;
    l -= 1.0 / (1680.0 * xp);
    xp *= x2;
    l += 1.0 / (1188.0 * xp);
    l - shift
}

/// Drops trailing fractional zeros from a formatted number, preserving an
/// `e`-exponent suffix.
///
/// With `keep_one` the fraction keeps one digit (and `.0` is appended when
/// there is no fraction at all); otherwise the dot is dropped together with
/// the zeros.
pub(crate) fn trim_fraction(s: &str, keep_one: bool) -> String {
    let (num, exp) = match s.find('e') {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    };
    if !num.contains('.') {
        return if keep_one {
            format!("{}.0{}", num, exp)
        } else {
            s.to_string()
        };
    }

    let t = num.trim_end_matches('0');
    if keep_one {
        if t.ends_with('.') {
            format!("{}0{}", t, exp)
        } else {
            format!("{}{}", t, exp)
        }
    } else {
        format!("{}{}", t.trim_end_matches('.'), exp)
    }
}

/// `n` significant digits of a binary64 value, in fixed notation where the
/// magnitude allows and exponential notation otherwise.
pub(crate) fn to_precision(x: f64, n: usize) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let exp = x.abs().log10().floor() as i32;
    if exp >= -5 && exp < n as i32 {
        let decimals = (n as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, x), false)
    } else {
        let s = trim_fraction(&format!("{:.*e}", n - 1, x), false);
        // e-notation with an explicit exponent sign
        match s.find('e') {
            Some(i) if !s[i + 1..].starts_with('-') => format!("{}e+{}", &s[..i], &s[i + 1..]),
            _ => s,
        }
    }
}

/// Splits a numeric literal into its front part and an optional exponent part.
///
/// The exponent markers `e`, `E`, `eE`, and `Ee` are recognized, and any
/// whitespace around the marker is dropped. The parts themselves are not
/// validated.
pub(crate) fn split_exponent(s: &str) -> (String, Option<String>) {
    let chars: Vec<char> = s.trim().chars().collect();

    let marker = chars.iter().position(|c| *c == 'e' || *c == 'E');

    match marker {
        None => (chars.iter().collect(), None),
        Some(idx) => {
            let front: String = chars[..idx].iter().collect();

            let mut rest = idx + 1;
            if rest < chars.len() && (chars[rest] == 'e' || chars[rest] == 'E') {
                rest += 1;
            }
            let exp: String = chars[rest..].iter().collect();

            (
                front.trim_end().to_string(),
                Some(exp.trim_start().to_string()),
            )
        }
    }
}
