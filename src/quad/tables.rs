//! Sentinel dispatch tables.
//!
//! Operands are classified into `{0, +inf, -inf, NaN, +finite, -finite}` and
//! each arithmetic or relational operator probes a 6x6 table. Only pairs of
//! finite operands fall through to the arithmetic paths; every other entry is
//! resolved by the table alone, with contents matching IEEE-754 binary64.

use super::Quad;
use lazy_static::lazy_static;

/// Outcome of a table probe for `+ - * /`.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Disp {
    /// Both operands are finite nonzero; run the arithmetic path.
    Both,
    /// The result is the left operand.
    Lhs,
    /// The result is the right operand.
    Rhs,
    /// The result is the negated right operand.
    NegRhs,
    /// A fixed result.
    Fix(Quad),
}

/// Outcome of a table probe for `> >= < <=`.
#[derive(Clone, Copy, Debug)]
pub(crate) enum CmpDisp {
    /// Both operands are finite nonzero with equal signs; compare magnitudes.
    Both,
    /// A fixed verdict.
    Fix(bool),
}

use CmpDisp::Fix as C;
use Disp::{Both, Lhs, NegRhs, Rhs};

const Z: Disp = Disp::Fix(Quad::ZERO);
const P: Disp = Disp::Fix(Quad::INFINITY);
const N: Disp = Disp::Fix(Quad::NEG_INFINITY);
const Q: Disp = Disp::Fix(Quad::NAN);

const T: CmpDisp = C(true);
const F: CmpDisp = C(false);

// row: left operand category, column: right operand category,
// in the order 0, +inf, -inf, NaN, +finite, -finite

pub(crate) static ADD: [[Disp; 6]; 6] = [
    [Z, P, N, Q, Rhs, Rhs],
    [P, P, Q, Q, P, P],
    [N, Q, N, Q, N, N],
    [Q, Q, Q, Q, Q, Q],
    [Lhs, P, N, Q, Both, Both],
    [Lhs, P, N, Q, Both, Both],
];

pub(crate) static SUB: [[Disp; 6]; 6] = [
    [Z, N, P, Q, NegRhs, NegRhs],
    [P, Q, P, Q, P, P],
    [N, N, Q, Q, N, N],
    [Q, Q, Q, Q, Q, Q],
    [Lhs, N, P, Q, Both, Both],
    [Lhs, N, P, Q, Both, Both],
];

pub(crate) static MUL: [[Disp; 6]; 6] = [
    [Z, Q, Q, Q, Z, Z],
    [Q, P, N, Q, P, N],
    [Q, N, P, Q, N, P],
    [Q, Q, Q, Q, Q, Q],
    [Z, P, N, Q, Both, Both],
    [Z, N, P, Q, Both, Both],
];

pub(crate) static DIV: [[Disp; 6]; 6] = [
    [Q, Z, Z, Q, Z, Z],
    [P, Q, Q, Q, P, N],
    [N, Q, Q, Q, N, P],
    [Q, Q, Q, Q, Q, Q],
    [P, Z, Z, Q, Both, Both],
    [N, Z, Z, Q, Both, Both],
];

pub(crate) static GT: [[CmpDisp; 6]; 6] = [
    [F, F, T, F, F, T],
    [T, F, T, F, T, T],
    [F, F, F, F, F, F],
    [F, F, F, F, F, F],
    [T, F, T, F, CmpDisp::Both, T],
    [F, F, T, F, F, CmpDisp::Both],
];

pub(crate) static GE: [[CmpDisp; 6]; 6] = [
    [T, F, T, F, F, T],
    [T, T, T, F, T, T],
    [F, F, T, F, F, F],
    [F, F, F, F, F, F],
    [T, F, T, F, CmpDisp::Both, T],
    [F, F, T, F, F, CmpDisp::Both],
];

lazy_static! {

    /// `a < b` is `b > a`.
    pub(crate) static ref LT: [[CmpDisp; 6]; 6] = transpose(&GT);

    /// `a <= b` is `b >= a`.
    pub(crate) static ref LE: [[CmpDisp; 6]; 6] = transpose(&GE);
}

fn transpose(t: &[[CmpDisp; 6]; 6]) -> [[CmpDisp; 6]; 6] {
    let mut out = [[F; 6]; 6];
    for (i, row) in t.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            out[j][i] = *v;
        }
    }
    out
}
