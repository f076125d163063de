//! Flattening of infix lexeme sequences into prefix order.
//!
//! The parser never builds a tree. It picks the weakest operator of a span as
//! the pivot, reduces both sides, then rotates the pivot in front of its left
//! operand and records on it how far ahead the right operand starts:
//!
//! ```text
//! 2 + 3 * 4      infix
//! 2 + * 3 4      right side reduced
//! + 2 * 3 4      pivot rotated, second operand offset = 2
//! ```
//!
//! Every binary kind has a tier of its own (`= + - * / ^`, weakest first),
//! so `8 - 4 + 2` pivots on `+`. Parenthesized groups are atomic operands for
//! the surrounding search and are reduced on their own; the markers are
//! dropped once every offset has been corrected for them.
pub mod error;
pub mod flat;

use std::mem;

use error::ParseError;

use crate::lexeme::{BinaryOp, Lexeme};

/// Deepest parenthesis nesting accepted; each level costs a bounded number of
/// stack frames during reduction.
pub const MAX_NESTING: usize = 256;

/// Rewrites a classified infix sequence into prefix order, in place.
///
/// Sequences shorter than three lexemes cannot hold a binary operation and
/// are left untouched. On error the sequence is in an unspecified state.
pub fn flatten(lexemes: &mut Vec<Lexeme>) -> Result<(), ParseError> {
    if lexemes.len() < 3 {
        return Ok(());
    }

    let has_parens = validate(lexemes)?;
    reduce(lexemes, 0)?;

    if has_parens {
        strip_parens(lexemes);
    }

    log::debug!("flattened {} lexemes", lexemes.len());
    Ok(())
}

/// Checks that the sequence reads `operand (binary operand)*` where an operand
/// is any number of unary operators followed by a value or a parenthesized
/// expression. Returns whether any parenthesis was seen.
fn validate(lexemes: &[Lexeme]) -> Result<bool, ParseError> {
    let mut expect_operand = true;
    let mut depth = 0usize;
    let mut outermost_open = 0;
    let mut has_parens = false;

    for (i, lexeme) in lexemes.iter().enumerate() {
        match (expect_operand, lexeme) {
            (true, Lexeme::Unary(_)) => {}
            (true, Lexeme::OpenParen) => {
                if depth == 0 {
                    outermost_open = i;
                }
                if depth == MAX_NESTING {
                    return Err(ParseError::NestingTooDeep(i));
                }
                depth += 1;
                has_parens = true;
            }
            (true, lexeme) if lexeme.is_value() => expect_operand = false,
            (false, Lexeme::Binary(_)) => expect_operand = true,
            (false, Lexeme::CloseParen) if depth > 0 => depth -= 1,
            (_, Lexeme::CloseParen) if depth == 0 => return Err(ParseError::UnbalancedParens(i)),
            _ => return Err(ParseError::MalformedExpression(i)),
        }
    }

    if expect_operand {
        return Err(ParseError::MalformedExpression(lexemes.len()));
    }
    if depth > 0 {
        return Err(ParseError::UnbalancedParens(outermost_open));
    }

    Ok(has_parens)
}

/// Reduces `view`, which starts at `base` in the sequence being flattened.
///
/// Left halves only hold stronger tiers, so recursion on them is bounded by
/// the tier count and the group nesting; right halves are handled in the loop.
fn reduce(mut view: &mut [Lexeme], mut base: usize) -> Result<(), ParseError> {
    while let Some((pos, op)) = find_pivot(view) {
        let (head, right) = mem::take(&mut view).split_at_mut(pos + 1);
        reduce(&mut head[..pos], base)?;
        commit(head, op, base)?;

        view = right;
        base += pos + 1;
    }

    reduce_operand(view, base)
}

/// Finds the leftmost operator of the weakest tier outside any group.
///
/// Both halves around a pivot only hold operators of the pivot's tier or
/// stronger, so this is the same as scanning tiers upward from the pivot's.
fn find_pivot(view: &[Lexeme]) -> Option<(usize, BinaryOp)> {
    let mut depth = 0usize;
    let mut pivot: Option<(usize, BinaryOp)> = None;

    for (i, lexeme) in view.iter().enumerate() {
        match lexeme {
            Lexeme::OpenParen => depth += 1,
            Lexeme::CloseParen => depth = depth.saturating_sub(1),
            Lexeme::Binary(binary) if depth == 0 => {
                if pivot.is_none_or(|(_, weakest)| binary.op < weakest) {
                    pivot = Some((i, binary.op));
                }
            }
            _ => {}
        }
    }

    pivot
}

/// Moves the pivot ending `head` in front of its reduced left operand.
fn commit(head: &mut [Lexeme], op: BinaryOp, base: usize) -> Result<(), ParseError> {
    let pos = head.len() - 1;

    // `^` only moves ahead of the single term on its left.
    let start = match op {
        BinaryOp::Exp => pos - left_term_len(&head[..pos]),
        _ => 0,
    };

    // Parenthesis markers are dropped once flattening is done.
    let markers = head[start..pos].iter().filter(|lexeme| lexeme.is_paren()).count();
    let offset =
        u8::try_from(pos - start - markers + 1).map_err(|_| ParseError::OperandTooFar(base + pos))?;

    head[start..].rotate_right(1);
    if let Some(binary) = head[start].as_binary_mut() {
        binary.second_operand_offset = offset;
    }

    log::trace!(
        "committed `{}` at {} with second operand offset {}",
        op.symbol(),
        base + start,
        offset
    );
    Ok(())
}

/// Length of the value or parenthesized group that ends `left`.
fn left_term_len(left: &[Lexeme]) -> usize {
    match left.last() {
        Some(Lexeme::CloseParen) => {
            let mut depth = 0usize;
            for (i, lexeme) in left.iter().enumerate().rev() {
                match lexeme {
                    Lexeme::CloseParen => depth += 1,
                    Lexeme::OpenParen => {
                        depth -= 1;
                        if depth == 0 {
                            return left.len() - i;
                        }
                    }
                    _ => {}
                }
            }
            left.len()
        }
        Some(_) => 1,
        None => 0,
    }
}

/// Reduces an operand: unary prefixes followed by a value or a group.
fn reduce_operand(view: &mut [Lexeme], base: usize) -> Result<(), ParseError> {
    let Some(atom) = view.iter().position(|lexeme| !matches!(lexeme, Lexeme::Unary(_))) else {
        return Ok(());
    };

    let is_group = matches!(view[atom], Lexeme::OpenParen)
        && matches!(view.last(), Some(Lexeme::CloseParen))
        && view.len() - atom >= 2;

    if is_group {
        let close = view.len() - 1;
        reduce(&mut view[atom + 1..close], base + atom + 1)
    } else {
        Ok(())
    }
}

/// Removes parenthesis markers. Offsets recorded during reduction already
/// leave them out.
fn strip_parens(lexemes: &mut Vec<Lexeme>) {
    lexemes.retain(|lexeme| !lexeme.is_paren());
}
