//! # Command line calculator
//!
//! Evaluates a single binary operation on two arbitrary precision integers:
//!
//! ```text
//! relp-bigint --radix 16 -- -ff '*' 10
//! ```
use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, ValueEnum};
use num::{Num, ToPrimitive};
use tracing_subscriber::EnvFilter;

use relp_bigint::SignedBigInteger;
use relp_bigint::data::number_types::integer::big::{BITS_IN_WORD, MAXIMUM_WORD_SIZE};
use relp_bigint::io::radix::{MAXIMUM_RADIX, MINIMUM_RADIX};

#[derive(Parser, Debug)]
#[command(author, version, about = "Arbitrary precision integer calculator", long_about = None)]
struct Args {
    /// Left operand, optionally preceded by a sign
    #[arg(allow_hyphen_values = true)]
    lhs: String,

    /// Operation to apply
    #[arg(value_enum, allow_hyphen_values = true)]
    operator: Operator,

    /// Right operand, optionally preceded by a sign
    #[arg(allow_hyphen_values = true)]
    rhs: String,

    /// Radix of the operands
    #[arg(short, long, default_value_t = 10)]
    radix: u32,

    /// Radix of the output, same as the operands when not specified
    #[arg(short, long)]
    output_radix: Option<u32>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
enum Operator {
    #[value(name = "+")]
    Add,
    #[value(name = "-")]
    Subtract,
    #[value(name = "*")]
    Multiply,
    /// Prints both the quotient and the remainder
    #[value(name = "/")]
    Divide,
    #[value(name = "%")]
    Remainder,
    #[value(name = "&")]
    And,
    #[value(name = "|")]
    Or,
    #[value(name = "^")]
    Xor,
    #[value(name = "<<")]
    ShiftLeft,
    #[value(name = ">>")]
    ShiftRight,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let output_radix = args.output_radix.unwrap_or(args.radix);
    if !(MINIMUM_RADIX..=MAXIMUM_RADIX).contains(&output_radix) {
        bail!("output radix {} is not supported, use a radix from {} up to and including {}", output_radix, MINIMUM_RADIX, MAXIMUM_RADIX);
    }

    let span = tracing::info_span!("evaluate", operator = ?args.operator, radix = args.radix);
    let _guard = span.enter();

    let lhs = parse(&args.lhs, args.radix, "left")?;
    let rhs = parse(&args.rhs, args.radix, "right")?;
    for value in evaluate(&lhs, args.operator, &rhs)? {
        println!("{}", value.to_base(output_radix));
    }

    Ok(())
}

fn parse(text: &str, radix: u32, side: &str) -> Result<SignedBigInteger> {
    SignedBigInteger::from_str_radix(text, radix)
        .with_context(|| format!("could not read the {} operand \"{}\"", side, text))
}

/// Apply the operator.
///
/// # Errors
///
/// When the result is invalid, or when the shift amount is negative or too large.
fn evaluate(lhs: &SignedBigInteger, operator: Operator, rhs: &SignedBigInteger) -> Result<Vec<SignedBigInteger>> {
    let results = match operator {
        Operator::Add => vec![lhs + rhs],
        Operator::Subtract => vec![lhs - rhs],
        Operator::Multiply => vec![lhs * rhs],
        Operator::Divide => {
            let (quotient, remainder) = lhs.divided_by(rhs).into_parts();
            vec![quotient, remainder]
        },
        Operator::Remainder => vec![lhs % rhs],
        Operator::And => vec![lhs & rhs],
        Operator::Or => vec![lhs | rhs],
        Operator::Xor => vec![lhs ^ rhs],
        Operator::ShiftLeft => vec![lhs << shift_amount(rhs)?],
        Operator::ShiftRight => vec![lhs >> shift_amount(rhs)?],
    };

    if results.iter().any(SignedBigInteger::is_invalid) {
        bail!("the result is invalid, is the right operand zero?");
    }
    tracing::debug!(count = results.len(), "evaluated");

    Ok(results)
}

/// Shift amounts that fit a `usize` and stay below the largest supported magnitude.
fn shift_amount(value: &SignedBigInteger) -> Result<usize> {
    let maximum = MAXIMUM_WORD_SIZE * BITS_IN_WORD;
    value.to_usize()
        .filter(|&amount| amount < maximum)
        .ok_or_else(|| anyhow!("can't shift by {} bits, use an amount below {}", value, maximum))
}
