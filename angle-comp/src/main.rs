//! angle-comp - decode an MCAngleCompSin reply and print its compensation table
//!
//! Usage:
//!   angle-comp --ascii "sRA MCAngleCompSin 765 FFFCC9B9 FFFFFF0B"
//!   angle-comp --payload "00000765 FFFCC9B9 FFFFFF0B" --output table.csv
//!   angle-comp --config angle-comp.toml   # uses the configured calibration

use angle_comp::error::{Error, Result};
use angle_comp::report::{max_deviation_deg, write_compensation_table};
use angle_comp::{AngleCompensator, Config, ReplyFormat};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Angle compensation table generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// ASCII reply text
    #[arg(short, long, conflicts_with = "payload")]
    ascii: Option<String>,

    /// Binary payload as 24 hex digits (whitespace ignored)
    #[arg(short, long)]
    payload: Option<String>,

    /// Output file for the table (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Parse hex digit pairs into bytes.
fn parse_hex_bytes(text: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        return Err(Error::InvalidParameter(format!(
            "odd number of hex digits in {:?}",
            text
        )));
    }

    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| Error::InvalidParameter(format!("invalid hex byte in {:?}", text)))
        })
        .collect()
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    let mut compensator = AngleCompensator::with_raw(&config.calibration);

    if let Some(reply) = &args.ascii {
        compensator.parse_reply(ReplyFormat::Ascii, reply.as_bytes())?;
    } else if let Some(payload) = &args.payload {
        let mut reply = config.reply.header.as_bytes().to_vec();
        reply.extend(parse_hex_bytes(payload)?);
        compensator.parse_reply(ReplyFormat::Binary, &reply)?;
    } else {
        log::info!("No reply given, using configured calibration");
    }

    let params = compensator.parameters();
    log::info!(
        "Amplitude {:.4}, phase {:.4} deg, offset {:.4} deg",
        params.amplitude,
        params.phase_deg,
        params.offset_deg
    );
    log::debug!(
        "Max deg/rad disagreement: {:e} deg",
        max_deviation_deg(&compensator, &config.table)?
    );

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let rows = write_compensation_table(&compensator, &config.table, &mut out)?;

    if let Some(path) = &args.output {
        log::info!("Wrote {} rows to {}", rows, path.display());
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("angle-comp: {}", e);
        std::process::exit(e.status_code());
    }
}
