use anyhow::bail;
use clap::Parser;
use ruuvi_rs::logging::log_debug;
use ruuvi_rs::{decode, decode_format3, decode_format5, init_logger, log_info};

#[derive(Parser)]
#[command(name = "ruuvi-cli")]
#[command(about = "Decode RuuviTag BLE advertisements from hex input")]
struct Cli {
    /// Advertisement bytes as a hex string, prefix included
    hex: String,

    /// Decode as a specific data format (3 or 5) instead of dispatching
    #[arg(short, long)]
    format: Option<u8>,

    /// Print compact JSON on a single line
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    log_debug(&format!("Decoding {} hex characters", cli.hex.len()));

    let measurement = match cli.format {
        Some(3) => decode_format3(&cli.hex)?,
        Some(5) => decode_format5(&cli.hex)?,
        Some(format) => bail!("unsupported data format: {format} (expected 3 or 5)"),
        None => decode(&cli.hex)?,
    };
    log_info(&format!(
        "Decoded data format {} advertisement",
        measurement.data_format
    ));

    let output = if cli.compact {
        serde_json::to_string(&measurement)?
    } else {
        serde_json::to_string_pretty(&measurement)?
    };
    println!("{output}");

    Ok(())
}
