//! Static constants.

use crate::defs::{F64_EXP_MAX, F64_EXP_MIN};
use crate::quad::Quad;
use lazy_static::lazy_static;

lazy_static! {

    /// 10^k for k in [-323, 308], obtained by parsing, since pow(10, k)
    /// is systematically imprecise for large |k|.
    static ref POWERS_OF_10: Vec<f64> = (F64_EXP_MIN + 1..=F64_EXP_MAX)
        .map(|k| format!("1e{}", k).parse().expect("Powers of ten table initialization."))
        .collect();

    /// 10
    pub(crate) static ref TEN_Q: Quad = Quad::from_u64(10);

    /// 10^3
    pub(crate) static ref TEN_3_Q: Quad = Quad::from_u64(1_000);

    /// 10^5
    pub(crate) static ref TEN_5_Q: Quad = Quad::from_u64(100_000);

    /// 10^10
    pub(crate) static ref TEN_10_Q: Quad = Quad::from_u64(10_000_000_000);

    /// 10^19
    pub(crate) static ref TEN_19_Q: Quad = Quad::from_u64(10_000_000_000_000_000_000);

    /// 10^100
    pub(crate) static ref TEN_100_Q: Quad = Quad::from_u64(10).powi(100);
}

/// 10^k. `k` must lie in [-323, 308].
#[inline]
pub(crate) fn power_of_10(k: i32) -> f64 {
    POWERS_OF_10[(k - (F64_EXP_MIN + 1)) as usize]
}
