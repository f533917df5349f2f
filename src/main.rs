use std::io::Read;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use toolbelt::{
    convert_case, decode_base64, encode_base64, km_to_miles, miles_to_km, tokenize, CaseVariant,
};

#[derive(Parser)]
#[command(name = "toolbelt", version, about = "Case conversion, Base64 and unit conversion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to a case variant (reads stdin when TEXT is omitted)
    Case {
        /// Variant name or label, e.g. camel, snake, "Title Case"
        #[arg(value_parser = parse_variant)]
        variant: CaseVariant,
        text: Vec<String>,
    },
    /// Print the word tokens of the text, one per line
    Tokens { text: Vec<String> },
    /// List supported case variants
    Variants,
    /// Standard Base64 encode/decode
    Base64 {
        #[command(subcommand)]
        action: Base64Action,
    },
    /// Convert miles to kilometers
    MilesToKm {
        #[arg(allow_negative_numbers = true)]
        miles: f64,
    },
    /// Convert kilometers to miles
    KmToMiles {
        #[arg(allow_negative_numbers = true)]
        km: f64,
    },
}

#[derive(Subcommand)]
enum Base64Action {
    /// Encode text (reads stdin when TEXT is omitted)
    Encode { text: Vec<String> },
    /// Decode Base64 to text (reads stdin when INPUT is omitted)
    Decode { input: Option<String> },
}

fn parse_variant(name: &str) -> Result<CaseVariant, String> {
    CaseVariant::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = CaseVariant::ALL.iter().map(|v| v.name()).collect();
        format!("unknown case variant '{}' (expected one of: {})", name, known.join(", "))
    })
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Join positional words, or fall back to stdin without its trailing newline.
fn input_text(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read stdin")?;
    let trimmed = buf.strip_suffix('\n').unwrap_or(&buf);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Case { variant, text } => {
            println!("{}", convert_case(&input_text(text)?, variant));
        }
        Command::Tokens { text } => {
            for token in tokenize(&input_text(text)?) {
                println!("{}", token);
            }
        }
        Command::Variants => {
            for variant in CaseVariant::ALL {
                println!("{:<8}{}", variant.name(), variant.label());
            }
        }
        Command::Base64 { action } => match action {
            Base64Action::Encode { text } => println!("{}", encode_base64(&input_text(text)?)),
            Base64Action::Decode { input } => {
                let encoded = input_text(input.into_iter().collect())?;
                println!("{}", decode_base64(&encoded)?);
            }
        },
        Command::MilesToKm { miles } => println!("{}", miles_to_km(miles)?),
        Command::KmToMiles { km } => println!("{}", km_to_miles(km)?),
    }
    Ok(())
}

fn main() -> Result<()> {
    init_tracing();
    run(Cli::parse())
}
