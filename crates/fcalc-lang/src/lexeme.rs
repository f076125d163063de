use std::fmt::{self, Display, Formatter};

use crate::compact::CompactString;
use crate::number::Number;

/// A named mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Tau,
    I,
}

impl Constant {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "pi" | "π" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            "tau" | "τ" => Some(Constant::Tau),
            "i" => Some(Constant::I),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Constant::Pi => "π",
            Constant::E => "e",
            Constant::Tau => "τ",
            Constant::I => "i",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Sqrt,
}

impl UnaryOp {
    /// Only `√` is unary by spelling; negation comes from rewriting a `-`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "√" => Some(UnaryOp::Sqrt),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::Sqrt => "√",
        }
    }
}

/// Binary operator kinds, declared from the weakest to the strongest tier.
///
/// Every kind has its own tier: `Add` binds weaker than `Sub` and `Mul`
/// weaker than `Div`. The derived `Ord` is the tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryOp {
    Assign,
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinaryOp {
    pub const TIERS: [BinaryOp; 6] = [
        BinaryOp::Assign,
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Exp,
    ];

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(BinaryOp::Assign),
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            "^" => Some(BinaryOp::Exp),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Assign => "=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Exp => "^",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Assign => "assign",
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
            BinaryOp::Exp => "exp",
        }
    }

    /// Precedence tier, `0` being the weakest.
    #[inline]
    pub fn tier(&self) -> u8 {
        *self as u8
    }
}

/// A binary operator together with the position of its second operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Binary {
    pub op: BinaryOp,
    /// Distance from the operator to the first lexeme of its right operand.
    /// Zero until the sequence has been flattened.
    pub second_operand_offset: u8,
}

impl Binary {
    pub const fn new(op: BinaryOp) -> Self {
        Self {
            op,
            second_operand_offset: 0,
        }
    }
}

impl From<BinaryOp> for Binary {
    fn from(op: BinaryOp) -> Self {
        Binary::new(op)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexemeKind {
    Token,
    Number,
    Constant,
    Variable,
    Unary,
    Binary,
    OpenParen,
    CloseParen,
}

impl LexemeKind {
    pub fn name(&self) -> &'static str {
        match self {
            LexemeKind::Token => "Token",
            LexemeKind::Number => "Number",
            LexemeKind::Constant => "Constant",
            LexemeKind::Variable => "Variable",
            LexemeKind::Unary => "Unary",
            LexemeKind::Binary => "Binary",
            LexemeKind::OpenParen => "OpenParen",
            LexemeKind::CloseParen => "CloseParen",
        }
    }
}

impl Display for LexemeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(self.name())
    }
}

/// One lexical or semantic unit of an expression.
///
/// A lexeme starts life as a raw [`Lexeme::Token`] produced by the lexer and
/// is replaced by one of the classified variants before flattening.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Lexeme {
    Token(CompactString),
    Number(Number),
    Constant(Constant),
    Variable(CompactString),
    Unary(UnaryOp),
    Binary(Binary),
    OpenParen,
    CloseParen,
}

impl Lexeme {
    pub fn token(text: &str) -> Self {
        Lexeme::Token(CompactString::new(text))
    }

    pub fn variable(name: &str) -> Self {
        Lexeme::Variable(CompactString::new(name))
    }

    pub fn number(numerator: u64, denominator: i64) -> Self {
        Lexeme::Number(Number::new(numerator, denominator))
    }

    pub fn binary(op: BinaryOp) -> Self {
        Lexeme::Binary(Binary::new(op))
    }

    pub fn kind(&self) -> LexemeKind {
        match self {
            Lexeme::Token(_) => LexemeKind::Token,
            Lexeme::Number(_) => LexemeKind::Number,
            Lexeme::Constant(_) => LexemeKind::Constant,
            Lexeme::Variable(_) => LexemeKind::Variable,
            Lexeme::Unary(_) => LexemeKind::Unary,
            Lexeme::Binary(_) => LexemeKind::Binary,
            Lexeme::OpenParen => LexemeKind::OpenParen,
            Lexeme::CloseParen => LexemeKind::CloseParen,
        }
    }

    /// Numbers, constants and variables.
    #[inline]
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Lexeme::Number(_) | Lexeme::Constant(_) | Lexeme::Variable(_)
        )
    }

    #[inline]
    pub fn is_paren(&self) -> bool {
        matches!(self, Lexeme::OpenParen | Lexeme::CloseParen)
    }

    pub fn is_binary_op(&self, op: BinaryOp) -> bool {
        matches!(self, Lexeme::Binary(b) if b.op == op)
    }

    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Lexeme::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_binary_mut(&mut self) -> Option<&mut Binary> {
        match self {
            Lexeme::Binary(b) => Some(b),
            _ => None,
        }
    }
}

impl Default for Lexeme {
    fn default() -> Self {
        Lexeme::Token(CompactString::default())
    }
}

impl From<Number> for Lexeme {
    fn from(n: Number) -> Self {
        Lexeme::Number(n)
    }
}

impl From<Constant> for Lexeme {
    fn from(c: Constant) -> Self {
        Lexeme::Constant(c)
    }
}

impl From<UnaryOp> for Lexeme {
    fn from(op: UnaryOp) -> Self {
        Lexeme::Unary(op)
    }
}

impl From<BinaryOp> for Lexeme {
    fn from(op: BinaryOp) -> Self {
        Lexeme::binary(op)
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Lexeme::Token(text) => write!(f, "{}", text),
            Lexeme::Number(n) => write!(f, "{}", n),
            Lexeme::Constant(c) => write!(f, "{}", c.symbol()),
            Lexeme::Variable(name) => write!(f, "({})", name),
            Lexeme::Unary(op) => write!(f, "{}", op.symbol()),
            Lexeme::Binary(b) => write!(f, "{}", b.op.symbol()),
            Lexeme::OpenParen => write!(f, "("),
            Lexeme::CloseParen => write!(f, ")"),
        }
    }
}
