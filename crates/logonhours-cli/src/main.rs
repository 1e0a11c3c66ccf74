//! Logonhours - command-line front end for the weekly logon-hours codec.
//!
//! Packs window specs from the command line into the 21-byte directory
//! mask and unpacks a hex mask back into local windows. A `demo`
//! subcommand runs a built-in schedule through both directions.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use logonhours_core::{decode, encode, LogonMask, LogonWindow, Weekday};
use tracing_subscriber::EnvFilter;

/// Logonhours - weekly permitted logon hours codec
#[derive(Parser, Debug)]
#[command(name = "logonhours", version)]
#[command(about = "Convert weekly logon windows to and from the 21-byte directory mask")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack logon windows into a mask, printed as 42 hex digits
    Encode {
        /// Window spec DAY:BEGIN-END, repeatable (e.g. --window mon:8-17)
        #[arg(long = "window", value_name = "SPEC", required = true)]
        windows: Vec<String>,

        /// Whole hours the windows' local clock runs ahead of UTC
        #[arg(
            long,
            value_name = "HOURS",
            default_value_t = 0,
            allow_negative_numbers = true
        )]
        offset: i32,

        /// Also print the mask bytes day by day
        #[arg(long)]
        verbose: bool,
    },

    /// Unpack a hex mask into local logon windows
    Decode {
        /// Mask as hex digits, two per byte
        #[arg(long, value_name = "HEX")]
        mask: String,

        /// Whole hours the output's local clock runs ahead of UTC
        #[arg(
            long,
            value_name = "HOURS",
            default_value_t = 0,
            allow_negative_numbers = true
        )]
        offset: i32,
    },

    /// Encode a sample schedule and verify it decodes back intact
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Encode {
            windows,
            offset,
            verbose,
        } => cmd_encode(&windows, offset, verbose),
        Commands::Decode { mask, offset } => cmd_decode(&mask, offset),
        Commands::Demo => cmd_demo(),
    }
}

/// Initialize console logging, honoring RUST_LOG when set.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("logonhours={},warn", level)));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn cmd_encode(specs: &[String], offset: i32, verbose: bool) -> Result<()> {
    let windows = specs
        .iter()
        .map(|spec| parse_window(spec, offset))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!("encoding {} windows at UTC{:+}", windows.len(), offset);

    let mask = encode(&windows);
    println!("{}", mask);
    if verbose {
        print_day_table(&mask);
    }
    Ok(())
}

fn cmd_decode(hex: &str, offset: i32) -> Result<()> {
    let bytes = parse_hex(hex)?;
    let mask = LogonMask::from_bytes(&bytes)?;
    tracing::debug!("mask grants {} of 168 hours", mask.hour_count());

    let windows = mask.windows(offset);
    if windows.is_empty() {
        println!("no permitted hours");
        return Ok(());
    }
    for window in &windows {
        println!("{}", window);
    }
    Ok(())
}

fn cmd_demo() -> Result<()> {
    // Office schedule in Pacific time: Monday 08:00-10:00 and Wednesday
    // 13:00-16:00 local, UTC-8.
    let offset = -8;
    let windows = vec![
        LogonWindow::new(Weekday::Monday, 8, 10, offset)?,
        LogonWindow::new(Weekday::Wednesday, 13, 16, offset)?,
    ];

    println!("schedule:");
    for window in &windows {
        println!("  {}", window);
    }

    let mask = encode(&windows);
    println!("mask: {}", mask);
    print_day_table(&mask);

    let decoded = decode(mask.as_bytes(), offset)?;
    println!("decoded:");
    for window in &decoded {
        println!("  {}", window);
    }

    if decoded != windows {
        anyhow::bail!("round trip changed the schedule");
    }
    println!("round trip ok");
    Ok(())
}

/// Prints the mask bytes as one row per day, Sunday first.
fn print_day_table(mask: &LogonMask) {
    for (day, row) in Weekday::all().into_iter().zip(mask.as_bytes().chunks(3)) {
        println!("  {:<9}  {:02x} {:02x} {:02x}", day, row[0], row[1], row[2]);
    }
}

/// Parses a window spec of the form `DAY:BEGIN-END`, e.g. `mon:8-17`.
fn parse_window(spec: &str, offset: i32) -> Result<LogonWindow> {
    let (day_part, hours_part) = spec
        .split_once(':')
        .with_context(|| format!("window '{}' must look like DAY:BEGIN-END", spec))?;
    let (begin_part, end_part) = hours_part
        .split_once('-')
        .with_context(|| format!("window '{}' must look like DAY:BEGIN-END", spec))?;

    let day = parse_day(day_part)?;
    let begin: u8 = begin_part
        .trim()
        .parse()
        .with_context(|| format!("bad begin hour '{}'", begin_part))?;
    let end: u8 = end_part
        .trim()
        .parse()
        .with_context(|| format!("bad end hour '{}'", end_part))?;

    LogonWindow::new(day, begin, end, offset).with_context(|| format!("window '{}'", spec))
}

/// Parses a day name; any prefix of at least three letters works.
fn parse_day(name: &str) -> Result<Weekday> {
    let lower = name.trim().to_lowercase();
    if lower.len() < 3 {
        anyhow::bail!("unknown day '{}'", name);
    }
    Weekday::all()
        .into_iter()
        .find(|day| day.as_str().starts_with(&lower))
        .with_context(|| format!("unknown day '{}'", name))
}

/// Parses hex digits into bytes, two digits per byte.
fn parse_hex(hex: &str) -> Result<Vec<u8>> {
    let hex = hex.trim();
    if !hex.is_ascii() {
        anyhow::bail!("hex mask contains non-hex characters");
    }
    if hex.len() % 2 != 0 {
        anyhow::bail!("hex mask has an odd number of digits ({})", hex.len());
    }
    (0..hex.len())
        .step_by(2)
        .map(|index| {
            u8::from_str_radix(&hex[index..index + 2], 16)
                .with_context(|| format!("bad hex byte '{}'", &hex[index..index + 2]))
        })
        .collect()
}
