//! Flattens every command line argument and prints its prefix form.
//!
//! ```text
//! RUST_LOG=trace cargo run --example flatten -- "2 + 3 * 4" "x = -(1 + 2) ^ 2"
//! ```
use fcalc_lang::{Engine, LexerOptions};

fn main() -> miette::Result<()> {
    env_logger::init();

    let engine = Engine::new(LexerOptions::default())?;

    for code in std::env::args().skip(1) {
        let expr = engine.parse(&code)?;
        println!("{code}");
        println!("  prefix: {expr}");
        if let Some(tree) = expr.to_sexpr() {
            println!("  tree:   {tree}");
        }
    }

    Ok(())
}
