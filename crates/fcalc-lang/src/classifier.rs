pub mod error;

use std::mem;

use error::ClassifyError;

use crate::compact::CompactString;
use crate::lexeme::{BinaryOp, Constant, Lexeme, UnaryOp};
use crate::number::Number;

/// Turns a raw [`Lexeme::Token`] into a typed lexeme.
///
/// Rules are tried in order: number literal, constant, operator or
/// parenthesis, and finally variable. Lexemes that are already classified are
/// returned as they are.
pub fn classify(lexeme: Lexeme) -> Result<Lexeme, ClassifyError> {
    match lexeme {
        Lexeme::Token(text) => classify_token(text),
        classified => Ok(classified),
    }
}

fn classify_token(text: CompactString) -> Result<Lexeme, ClassifyError> {
    if text.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_number(&text)
            .map(Lexeme::Number)
            .ok_or(ClassifyError::MalformedNumber(text));
    }

    if let Some(constant) = Constant::from_symbol(&text) {
        return Ok(Lexeme::Constant(constant));
    }

    if let Some(op) = BinaryOp::from_symbol(&text) {
        return Ok(Lexeme::binary(op));
    }

    if let Some(op) = UnaryOp::from_symbol(&text) {
        return Ok(Lexeme::Unary(op));
    }

    Ok(match text.as_str() {
        "(" => Lexeme::OpenParen,
        ")" => Lexeme::CloseParen,
        _ => Lexeme::Variable(text),
    })
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_number(text: &str) -> Option<Number> {
    match text.split_once('.') {
        None => parse_digits(text).map(Number::from_unsigned),
        Some((int, frac)) => {
            let int_part = parse_digits(int)?;
            let frac_part = parse_digits(frac)?;
            let frac_digits = u32::try_from(frac.len()).ok()?;
            // The scale must stay a positive `i64` denominator.
            10i64.checked_pow(frac_digits)?;
            Some(Number::from_decimal(int_part, frac_part, frac_digits))
        }
    }
}

/// Rewrites every `-` that does not follow an operand into unary negation.
///
/// An operand ends with a value or a closing parenthesis.
pub fn resolve_unary_minus(lexemes: &mut [Lexeme]) {
    let mut after_operand = false;

    for lexeme in lexemes.iter_mut() {
        if !after_operand && lexeme.is_binary_op(BinaryOp::Sub) {
            *lexeme = Lexeme::Unary(UnaryOp::Negate);
        }
        after_operand = lexeme.is_value() || matches!(lexeme, Lexeme::CloseParen);
    }
}

/// Classifies every lexeme in place, then resolves unary minus.
pub fn classify_all(lexemes: &mut [Lexeme]) -> Result<(), ClassifyError> {
    for lexeme in lexemes.iter_mut() {
        *lexeme = classify(mem::take(lexeme))?;
    }
    resolve_unary_minus(lexemes);
    Ok(())
}
