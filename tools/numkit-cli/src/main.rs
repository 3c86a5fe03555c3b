//! numkit - binary value codec and numeral conversion tool
//!
//! Thin command-line front end over the `numkit` library: every subcommand
//! maps onto one library operation and prints a single result.

mod commands;
mod logging;

use crate::commands::{parse_order, resolve_reverse, NumType};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use numkit::bytes::ByteOrder;
use numkit::config::{load_config, load_config_from_file};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "numkit")]
#[command(about = "numkit - binary value codec and numeral conversion tool")]
#[command(long_about = "numkit - binary value codec and numeral conversion tool

Byte Conversion:
  encode      Convert a number to its bytes (hex)
  decode      Convert bytes (hex) to a number
  read        Read numbers from a binary file
  binary      Show a number's bytes in base 2

Numerals:
  hex         Convert a hex numeral to decimal
  check       Check whether text is a decimal numeral

Misc:
  endian      Show the host byte order
  random      Draw a random number from a range

Examples:
  numkit encode u32 305419896 --order be     # 12345678
  numkit decode i16 FFFE --order be          # -2
  numkit read f32 data.bin --offset 8 --count 4
  numkit hex 1A                              # 26

Use 'numkit <command> --help' for more information on a specific command.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: numkit.toml / numkit.yaml in the current directory)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a number to its bytes, printed as hex
    Encode {
        /// Numeric type
        #[arg(value_enum)]
        ty: NumType,

        /// Value to encode
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Byte order: be, le or native
        #[arg(short, long, value_parser = parse_order)]
        order: Option<ByteOrder>,

        /// Reverse the native bytes (overrides --order)
        #[arg(short, long)]
        reverse: bool,
    },

    /// Convert bytes given as hex (e.g. "12 34 AB") to a number
    Decode {
        /// Numeric type
        #[arg(value_enum)]
        ty: NumType,

        /// Hex byte string; fewer bytes than the type width are zero-padded
        bytes: String,

        /// Byte order: be, le or native
        #[arg(short, long, value_parser = parse_order)]
        order: Option<ByteOrder>,

        /// Reverse the bytes before decoding (overrides --order)
        #[arg(short, long)]
        reverse: bool,
    },

    /// Read consecutive numbers from a binary file
    Read {
        /// Numeric type
        #[arg(value_enum)]
        ty: NumType,

        /// Input file
        file: PathBuf,

        /// Start offset in bytes
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Number of values to read
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Byte order: be, le or native
        #[arg(short, long, value_parser = parse_order)]
        order: Option<ByteOrder>,

        /// Reverse the bytes read (overrides --order)
        #[arg(short, long)]
        reverse: bool,

        /// Read one value without advancing the cursor
        #[arg(long)]
        peek: bool,
    },

    /// Convert a hex numeral to decimal
    Hex {
        /// Hex numeral, e.g. 1A or ff
        numeral: String,

        /// Reject empty numerals and validate every digit
        #[arg(long)]
        strict: bool,
    },

    /// Show a number's bytes in base 2, most significant byte first
    Binary {
        /// Numeric type
        #[arg(value_enum)]
        ty: NumType,

        /// Value to render
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Show the host byte order
    Endian,

    /// Draw a random number from an inclusive range
    Random {
        /// Lower bound
        #[arg(allow_hyphen_values = true)]
        low: String,

        /// Upper bound
        #[arg(allow_hyphen_values = true)]
        high: String,

        /// Decimal places; draws a float when given
        #[arg(short, long)]
        precision: Option<u32>,
    },

    /// Check whether text is a decimal numeral
    Check {
        /// Text to check
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

fn run(cli: Cli) -> Result<String> {
    let config = match &cli.config {
        Some(path) => load_config_from_file(path),
        None => load_config(),
    }
    .context("Failed to load configuration")?;
    debug!("Configuration: {:?}", config);

    match cli.command {
        Commands::Encode {
            ty,
            value,
            order,
            reverse,
        } => commands::encode(ty, &value, resolve_reverse(order, reverse, &config), &config),
        Commands::Decode {
            ty,
            bytes,
            order,
            reverse,
        } => commands::decode(ty, &bytes, resolve_reverse(order, reverse, &config)),
        Commands::Read {
            ty,
            file,
            offset,
            count,
            order,
            reverse,
            peek,
        } => commands::read(
            ty,
            &file,
            offset,
            count,
            resolve_reverse(order, reverse, &config),
            peek,
        ),
        Commands::Hex { numeral, strict } => commands::hex(&numeral, strict, &config),
        Commands::Binary { ty, value } => commands::binary(ty, &value),
        Commands::Endian => Ok(commands::endian()),
        Commands::Random {
            low,
            high,
            precision,
        } => commands::random(&low, &high, precision, &config),
        Commands::Check { text } => Ok(commands::check(&text)),
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    if let Err(e) = logging::init(cli.verbose, !cli.no_color) {
        eprintln!("{} {:#}", "Warning:".yellow().bold(), e);
    }

    match run(cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_encode_args() {
        let cli = Cli::parse_from(["numkit", "encode", "i32", "-5", "--order", "le"]);
        match cli.command {
            Commands::Encode {
                ty, value, order, ..
            } => {
                assert_eq!(ty, NumType::I32);
                assert_eq!(value, "-5");
                assert_eq!(order, Some(ByteOrder::LittleEndian));
            },
            _ => panic!("expected encode command"),
        }
    }

    #[test]
    fn test_run_with_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numkit.toml");
        std::fs::write(&path, "default_order = \"LE\"\nuppercase = false\n").unwrap();

        let cli = Cli::parse_from([
            "numkit",
            "--config",
            path.to_str().unwrap(),
            "encode",
            "u16",
            "43981",
        ]);
        assert_eq!(run(cli).unwrap(), "cdab");
    }
}
