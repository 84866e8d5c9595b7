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

//! Integer expression calculator.
//!
//! Each expression is converted to postfix with [`infix_to_postfix`] and the
//! result is computed by [`evaluate_postfix`]. Nothing is shared between
//! calls.

use std::fmt;

pub mod eval;
pub mod parser;
pub mod stack;
pub mod token;

pub use eval::{checked_pow, evaluate_postfix, EvalError};
pub use parser::{infix_to_postfix, is_separator, Mode, ParseError};
pub use token::{Assoc, Operator, Postfix, Token};

/// Upper bound on postfix tokens, operator stack depth and value stack depth.
pub const MAX_TOKENS: usize = 4096;

/// Upper bound on the number of digits in a single numeral.
pub const MAX_NUMERAL_LEN: usize = 63;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
    Eval(EvalError),
}

impl Error {
    /// Name of the phase that failed, as shown to the user.
    pub fn phase(&self) -> &'static str {
        match self {
            Error::Parse(_) => "infix->postfix",
            Error::Eval(_) => "evaluate",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "{err}"),
            Error::Eval(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Eval(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Error::Eval(err)
    }
}

pub fn evaluate(expr: &str) -> Result<i64, Error> {
    let postfix = infix_to_postfix(expr)?;
    Ok(evaluate_postfix(&postfix)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases() {
        let err = evaluate("(1+2").unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::MismatchedParentheses));
        assert_eq!(err.phase(), "infix->postfix");

        let err = evaluate("5/0").unwrap_err();
        assert_eq!(err, Error::Eval(EvalError::DivisionByZero));
        assert_eq!(err.phase(), "evaluate");
        assert_eq!(err.to_string(), "Division by zero");
    }

    #[test]
    fn evaluates() {
        assert_eq!(evaluate("-3 + 4*(2-1) ^ 3"), Ok(1));
        assert_eq!(evaluate("2*-5 + (7 - -(3))"), Ok(0));
    }
}
