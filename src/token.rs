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

use std::fmt;
use std::ops::Deref;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// The closed set of operators understood by the parser and the evaluator.
///
/// Unary minus is its own variant so that a postfix sequence never has to
/// guess whether `-` takes one operand or two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Neg,
}

impl Operator {
    /// Maps an input character to its binary operator. Unary minus has no
    /// character of its own; the parser derives it from `-` by context.
    pub fn from_char(c: char) -> Option<Self> {
        use Operator::*;

        Some(match c {
            '+' => Add,
            '-' => Sub,
            '*' => Mul,
            '/' => Div,
            '%' => Rem,
            '^' => Pow,
            _ => return None,
        })
    }

    pub fn precedence(self) -> u8 {
        use Operator::*;

        match self {
            Neg => 4,
            Pow => 3,
            Mul | Div | Rem => 2,
            Add | Sub => 1,
        }
    }

    pub fn assoc(self) -> Assoc {
        match self {
            Operator::Pow | Operator::Neg => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Operator::Neg => 1,
            _ => 2,
        }
    }

    pub fn symbol(self) -> char {
        use Operator::*;

        match self {
            Add => '+',
            Sub => '-',
            Mul => '*',
            Div => '/',
            Rem => '%',
            Pow => '^',
            Neg => '~',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Decimal digits exactly as they appeared in the input.
    Numeral(String),
    Operator(Operator),
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Token::Operator(op)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Numeral(digits) => f.write_str(digits),
            Token::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// Tokens in Reverse Polish order, as handed from the parser to the evaluator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Postfix(Vec<Token>);

impl From<Vec<Token>> for Postfix {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl Deref for Postfix {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.0
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
        }
        tokens.try_for_each(|token| write!(f, " {token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_table() {
        use Operator::*;

        assert!(Neg.precedence() > Pow.precedence());
        assert!(Pow.precedence() > Mul.precedence());
        assert_eq!(Mul.precedence(), Div.precedence());
        assert_eq!(Div.precedence(), Rem.precedence());
        assert!(Rem.precedence() > Add.precedence());
        assert_eq!(Add.precedence(), Sub.precedence());
    }

    #[test]
    fn associativity() {
        assert_eq!(Operator::Pow.assoc(), Assoc::Right);
        assert_eq!(Operator::Neg.assoc(), Assoc::Right);
        assert_eq!(Operator::Sub.assoc(), Assoc::Left);
        assert_eq!(Operator::Neg.arity(), 1);
        assert_eq!(Operator::Rem.arity(), 2);
    }

    #[test]
    fn only_binary_operators_have_characters() {
        assert_eq!(Operator::from_char('-'), Some(Operator::Sub));
        assert_eq!(Operator::from_char('~'), None);
        assert_eq!(Operator::from_char('u'), None);
        assert_eq!(Operator::from_char('('), None);
    }

    #[test]
    fn postfix_display() {
        let postfix = Postfix::from(vec![
            Token::Numeral("2".into()),
            Operator::Neg.into(),
            Token::Numeral("2".into()),
            Operator::Pow.into(),
        ]);
        assert_eq!(postfix.to_string(), "2 ~ 2 ^");
        assert_eq!(Postfix::default().to_string(), "");
    }
}
