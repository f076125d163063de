#![no_main]

use arbitrary::Arbitrary;
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Clone, Arbitrary)]
enum Operand {
    Number(u32, Option<u16>),
    Constant(u8),
    Variable(char),
    Negate(Box<Operand>),
    Sqrt(Box<Operand>),
    Group(Box<ArbitraryExpr>),
}

#[derive(Debug, Clone, Arbitrary)]
struct ArbitraryExpr {
    first: Operand,
    rest: Vec<(u8, Operand)>,
}

impl Operand {
    fn to_code(&self) -> String {
        match self {
            Operand::Number(int, None) => int.to_string(),
            Operand::Number(int, Some(frac)) => format!("{int}.{frac}"),
            Operand::Constant(n) => ["pi", "e", "tau", "i", "π", "τ"][*n as usize % 6].to_string(),
            Operand::Variable(c) => c.to_string(),
            Operand::Negate(operand) => format!("-{}", operand.to_code()),
            Operand::Sqrt(operand) => format!("√{}", operand.to_code()),
            Operand::Group(expr) => format!("({})", expr.to_code()),
        }
    }
}

impl ArbitraryExpr {
    fn to_code(&self) -> String {
        std::iter::once(self.first.to_code())
            .chain(self.rest.iter().map(|(op, operand)| {
                let op = ["=", "+", "-", "*", "/", "^"][*op as usize % 6];
                format!("{op} {}", operand.to_code())
            }))
            .join(" ")
    }
}

#[derive(Debug, Clone, Arbitrary)]
struct Context {
    raw_code: Option<String>,
    generated: Option<ArbitraryExpr>,
}

fuzz_target!(|context: Context| {
    let code = match (&context.raw_code, &context.generated) {
        (Some(raw), _) => raw.clone(),
        (_, Some(generated)) => generated.to_code(),
        _ => "".to_string(),
    };

    let Ok(engine) = fcalc_lang::Engine::new(fcalc_lang::LexerOptions::default()) else {
        return;
    };

    let Ok(expr) = engine.parse(&code) else {
        return;
    };

    // Anything long enough to be validated flattens into exactly one tree.
    if engine.tokenize(&code).is_ok_and(|lexemes| lexemes.len() >= 3) {
        assert_eq!(expr.subtree_end(0), Some(expr.len()));
    }
});
