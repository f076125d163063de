use std::fmt::{self, Display, Formatter};

use itertools::Itertools;

use super::{error::ParseError, flatten};
use crate::lexeme::Lexeme;

/// A prefix-order expression stored as a flat array.
///
/// Every operator is immediately followed by its (left) operand; a binary
/// operator's right operand starts `second_operand_offset` lexemes after it.
/// Moving a `FlatExpr` hands exclusive ownership of the whole expression to
/// the receiver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlatExpr {
    lexemes: Vec<Lexeme>,
}

impl FlatExpr {
    /// Flattens a classified infix sequence.
    pub fn new(mut lexemes: Vec<Lexeme>) -> Result<Self, ParseError> {
        flatten(&mut lexemes)?;
        Ok(Self { lexemes })
    }

    pub fn as_slice(&self) -> &[Lexeme] {
        &self.lexemes
    }

    pub fn len(&self) -> usize {
        self.lexemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexemes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Lexeme> {
        self.lexemes.iter()
    }

    pub fn into_lexemes(self) -> Vec<Lexeme> {
        self.lexemes
    }

    pub fn root(&self) -> Option<&Lexeme> {
        self.lexemes.first()
    }

    pub fn get(&self, index: usize) -> Option<&Lexeme> {
        self.lexemes.get(index)
    }

    /// Index of the operand following the operator at `index`.
    pub fn left_operand(&self, index: usize) -> Option<usize> {
        match self.lexemes.get(index)? {
            Lexeme::Unary(_) | Lexeme::Binary(_) if index + 1 < self.len() => Some(index + 1),
            _ => None,
        }
    }

    /// Index of the second operand of the binary operator at `index`.
    pub fn right_operand(&self, index: usize) -> Option<usize> {
        match self.lexemes.get(index)? {
            Lexeme::Binary(binary) if binary.second_operand_offset > 0 => {
                let right = index + binary.second_operand_offset as usize;
                (right < self.len()).then_some(right)
            }
            _ => None,
        }
    }

    /// One past the last lexeme of the subtree rooted at `index`.
    pub fn subtree_end(&self, index: usize) -> Option<usize> {
        let mut i = index;
        loop {
            match self.lexemes.get(i)? {
                Lexeme::Unary(_) => i += 1,
                Lexeme::Binary(_) => i = self.right_operand(i)?,
                _ => return Some(i + 1),
            }
        }
    }

    /// Renders the expression as a fully parenthesized prefix tree, e.g.
    /// `(+ 2 (* 3 4))`. Returns `None` unless the lexemes form exactly one tree.
    pub fn to_sexpr(&self) -> Option<String> {
        if self.subtree_end(0)? != self.len() {
            return None;
        }

        let mut out = String::new();
        // Open operators with the number of operands still to come.
        let mut open: Vec<(usize, u8)> = Vec::new();

        for (i, lexeme) in self.lexemes.iter().enumerate() {
            if let Some(&(parent, 1)) = open.last()
                && self.lexemes[parent].as_binary().is_some()
                && self.right_operand(parent) != Some(i)
            {
                return None;
            }
            if !out.is_empty() {
                out.push(' ');
            }

            match lexeme {
                Lexeme::Unary(_) => {
                    out.push_str(&format!("({lexeme}"));
                    open.push((i, 1));
                    continue;
                }
                Lexeme::Binary(_) => {
                    out.push_str(&format!("({lexeme}"));
                    open.push((i, 2));
                    continue;
                }
                _ => out.push_str(&lexeme.to_string()),
            }

            while let Some(top) = open.last_mut() {
                top.1 -= 1;
                if top.1 > 0 {
                    break;
                }
                open.pop();
                out.push(')');
            }
        }

        open.is_empty().then_some(out)
    }
}

impl Display for FlatExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexemes.iter().join(" "))
    }
}

impl From<FlatExpr> for Vec<Lexeme> {
    fn from(expr: FlatExpr) -> Self {
        expr.lexemes
    }
}

impl<'a> IntoIterator for &'a FlatExpr {
    type Item = &'a Lexeme;
    type IntoIter = std::slice::Iter<'a, Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.iter()
    }
}

impl IntoIterator for FlatExpr {
    type Item = Lexeme;
    type IntoIter = std::vec::IntoIter<Lexeme>;

    fn into_iter(self) -> Self::IntoIter {
        self.lexemes.into_iter()
    }
}
