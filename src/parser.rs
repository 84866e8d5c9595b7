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

//! Infix to postfix conversion with the shunting-yard algorithm.

use std::fmt;

use crate::stack::BoundedStack;
use crate::token::{Assoc, Operator, Postfix, Token};
use crate::{MAX_NUMERAL_LEN, MAX_TOKENS};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidCharacter(char),
    NumberTooLong,
    TooManyTokens,
    OperatorStackOverflow,
    UnexpectedOperator,
    MismatchedParentheses,
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseError::*;

        match *self {
            InvalidCharacter(c) => write!(f, "Invalid character: '{c}'"),
            NumberTooLong => f.write_str("Number token too long"),
            TooManyTokens => f.write_str("Too many tokens"),
            OperatorStackOverflow => f.write_str("Operator stack overflow"),
            UnexpectedOperator => f.write_str("Unexpected operator"),
            MismatchedParentheses => f.write_str("Mismatched parentheses"),
            UnexpectedEnd => f.write_str("Expression ends unexpectedly"),
        }
    }
}

impl std::error::Error for ParseError {}

/// What the parser is prepared to accept next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Start of input, or right after `(` or any operator.
    ExpectOperand,
    /// Right after a numeral or `)`.
    ExpectOperatorOrEnd,
}

impl Mode {
    /// Decides which operator an operator character stands for in this mode.
    /// A `-` where an operand belongs is unary minus; any other operator there
    /// is an error.
    pub fn resolve(self, op: Operator) -> Result<Operator, ParseError> {
        match (self, op) {
            (Mode::ExpectOperand, Operator::Sub) => Ok(Operator::Neg),
            (Mode::ExpectOperand, _) => Err(ParseError::UnexpectedOperator),
            (Mode::ExpectOperatorOrEnd, op) => Ok(op),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Entry {
    Operator(Operator),
    OpenParen,
}

/// Characters skipped between tokens: ASCII space, tab, newline, vertical
/// tab, form feed and carriage return.
pub fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

// `top` leaves the operator stack before `incoming` is pushed
fn yields_to(top: Operator, incoming: Operator) -> bool {
    top.precedence() > incoming.precedence()
        || (top.precedence() == incoming.precedence() && incoming.assoc() == Assoc::Left)
}

pub fn infix_to_postfix(expr: &str) -> Result<Postfix, ParseError> {
    use ParseError::*;

    let mut output = BoundedStack::with_capacity(MAX_TOKENS);
    let mut ops = BoundedStack::with_capacity(MAX_TOKENS);
    let mut mode = Mode::ExpectOperand;
    let mut chars = expr.char_indices().peekable();

    macro_rules! emit {
        ($token:expr) => {
            output
                .push(Token::from($token))
                .map_err(|_| TooManyTokens)?
        };
    }

    while let Some((start, c)) = chars.next() {
        match c {
            c if is_separator(c) => (),
            '0'..='9' => {
                let mut end = start + 1;
                while let Some(&(i, '0'..='9')) = chars.peek() {
                    chars.next();
                    end = i + 1;
                }

                let digits = &expr[start..end];
                if digits.len() > MAX_NUMERAL_LEN {
                    return Err(NumberTooLong);
                }
                emit!(Token::Numeral(digits.to_owned()));
                mode = Mode::ExpectOperatorOrEnd;
            }
            '(' => {
                ops.push(Entry::OpenParen)
                    .map_err(|_| OperatorStackOverflow)?;
                mode = Mode::ExpectOperand;
            }
            ')' => {
                loop {
                    match ops.pop() {
                        Some(Entry::OpenParen) => break,
                        Some(Entry::Operator(op)) => emit!(op),
                        None => return Err(MismatchedParentheses),
                    }
                }
                mode = Mode::ExpectOperatorOrEnd;
            }
            c => {
                let op = Operator::from_char(c).ok_or(InvalidCharacter(c))?;
                let op = mode.resolve(op)?;

                while let Some(&Entry::Operator(top)) = ops.peek() {
                    if !yields_to(top, op) {
                        break;
                    }
                    ops.pop();
                    emit!(top);
                }
                ops.push(Entry::Operator(op))
                    .map_err(|_| OperatorStackOverflow)?;

                // unary minus still waits for its operand, like any binary operator
                mode = Mode::ExpectOperand;
            }
        }
    }

    while let Some(entry) = ops.pop() {
        match entry {
            Entry::Operator(op) => emit!(op),
            Entry::OpenParen => return Err(MismatchedParentheses),
        }
    }

    if mode == Mode::ExpectOperand {
        return Err(UnexpectedEnd);
    }

    Ok(Postfix::from(output.into_vec()))
}
