// Copyright (C) 2023  Alex Crawford
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Postfix evaluation over `i64`.

use std::fmt;

use crate::stack::BoundedStack;
use crate::token::{Operator, Token};
use crate::MAX_TOKENS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvalError {
    UnaryUnderflow,
    BinaryUnderflow,
    DivisionByZero,
    ModuloByZero,
    InvalidExponent,
    InvalidNumber,
    ValueStackOverflow,
    OperandMismatch,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EvalError::*;

        f.write_str(match *self {
            UnaryUnderflow => "Not enough operands for unary minus",
            BinaryUnderflow => "Not enough operands for binary operator",
            DivisionByZero => "Division by zero",
            ModuloByZero => "Modulo by zero",
            InvalidExponent => "Invalid or overflow in exponentiation",
            InvalidNumber => "Invalid number in postfix",
            ValueStackOverflow => "Value stack overflow",
            OperandMismatch => "Extra operands or insufficient operators",
        })
    }
}

impl std::error::Error for EvalError {}

/// Raises `base` to a non-negative `exp` by repeated squaring.
///
/// Every multiplication is checked against `i64::MAX` by magnitude before it
/// happens, so this is slightly conservative: `(-2)^63` is refused even though
/// `i64::MIN` could hold it. Negative exponents yield `None`.
pub fn checked_pow(base: i64, exp: i64) -> Option<i64> {
    fn fits(x: i64, y: i64) -> bool {
        y == 0 || x.unsigned_abs() <= i64::MAX.unsigned_abs() / y.unsigned_abs()
    }

    if exp < 0 {
        return None;
    }

    let (mut base, mut exp, mut result) = (base, exp, 1i64);
    while exp != 0 {
        if exp & 1 == 1 {
            if !fits(result, base) {
                return None;
            }
            result *= base;
        }
        exp >>= 1;
        if exp != 0 {
            if !fits(base, base) {
                return None;
            }
            base *= base;
        }
    }
    Some(result)
}

fn parse_numeral(digits: &str) -> Result<i64, EvalError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EvalError::InvalidNumber);
    }
    digits.parse().map_err(|_| EvalError::InvalidNumber)
}

fn apply(op: Operator, values: &mut BoundedStack<i64>) -> Result<i64, EvalError> {
    use EvalError::*;
    use Operator::*;

    if values.len() < op.arity() {
        return Err(match op.arity() {
            1 => UnaryUnderflow,
            _ => BinaryUnderflow,
        });
    }

    // right operand is on top
    macro_rules! binary {
        (|$a:ident, $b:ident| $body:expr) => {
            match (values.pop(), values.pop()) {
                (Some($b), Some($a)) => $body,
                _ => Err(BinaryUnderflow),
            }
        };
    }

    match op {
        Neg => values.pop().map(i64::wrapping_neg).ok_or(UnaryUnderflow),
        Add => binary!(|a, b| Ok(a.wrapping_add(b))),
        Sub => binary!(|a, b| Ok(a.wrapping_sub(b))),
        Mul => binary!(|a, b| Ok(a.wrapping_mul(b))),
        Div => binary!(|a, b| match b {
            0 => Err(DivisionByZero),
            b => Ok(a.wrapping_div(b)),
        }),
        Rem => binary!(|a, b| match b {
            0 => Err(ModuloByZero),
            b => Ok(a.wrapping_rem(b)),
        }),
        Pow => binary!(|a, b| checked_pow(a, b).ok_or(InvalidExponent)),
    }
}

/// Evaluates a postfix sequence. The sequence is not trusted to come from
/// [`infix_to_postfix`](crate::infix_to_postfix): malformed numerals and
/// arity mismatches are reported, never assumed away.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<i64, EvalError> {
    let mut values = BoundedStack::with_capacity(MAX_TOKENS);

    for token in postfix {
        let value = match token {
            Token::Numeral(digits) => parse_numeral(digits)?,
            Token::Operator(op) => apply(*op, &mut values)?,
        };
        values
            .push(value)
            .map_err(|_| EvalError::ValueStackOverflow)?;
    }

    match (values.pop(), values.is_empty()) {
        (Some(result), true) => Ok(result),
        _ => Err(EvalError::OperandMismatch),
    }
}
