//! chisel CLI
//!
//! Build selector strings and inspect rectangle records from the terminal.

mod steps;

use anyhow::{Context, Result};
use chisel_record::{Rectangle, decode_record, encode_record, make_rectangle};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

/// chisel - CSS selector builder with grammar-order checks
#[derive(Parser, Debug)]
#[command(name = "chisel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Compound selector
    chisel selector element=div id=main class=container

    # Attribute clause (everything after the first '=' is kept)
    chisel selector element=a 'attr=href$=".png"' pseudo-class=focus

    # Combinators: +, ~, > or descendant
    chisel selector element=ul '>' element=li pseudo-class=first-child

    # Rectangle area, or its JSON encoding
    chisel rect --width 10 --height 20
    chisel rect --width 10 --height 20 --json

    # Decode a rectangle by field position
    chisel decode '{"width":10,"height":20}'
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a selector from `kind=value` steps and combinator tokens
    Selector {
        /// Steps in call order
        #[arg(value_name = "STEP", required = true, allow_hyphen_values = true)]
        steps: Vec<String>,
    },

    /// Create a rectangle and print its area
    Rect {
        /// Horizontal extent
        #[arg(long)]
        width: f64,

        /// Vertical extent
        #[arg(long)]
        height: f64,

        /// Print the encoded record instead of the area
        #[arg(long)]
        json: bool,
    },

    /// Decode a rectangle from JSON text
    Decode {
        /// Record text, e.g. '{"width":10,"height":20}'
        #[arg(value_name = "JSON")]
        text: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Selector { steps } => {
            let selector = steps::build_selector(&steps)?;
            println!("{selector}");
        }
        Command::Rect {
            width,
            height,
            json,
        } => {
            let rect = make_rectangle(width, height);
            if json {
                println!("{}", encode_record(&rect)?);
            } else {
                println!("{}", rect.area());
            }
        }
        Command::Decode { text } => {
            let rect: Rectangle =
                decode_record(&text).with_context(|| format!("cannot decode {text:?}"))?;
            println!(
                "{} {}  {} {}  {} {}",
                "width".bold(),
                rect.width,
                "height".bold(),
                rect.height,
                "area".bold(),
                rect.area()
            );
        }
    }
    Ok(())
}
