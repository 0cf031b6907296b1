//! temp-rom: write the MSB/LSB EEPROM test images
//!
//! Usage: temp-rom [--stats]

use clap::Parser;
use std::process;

use temp_rom::commands::{GenerateCommand, GenerateConfig};

#[derive(Parser)]
#[command(name = "temp-rom")]
#[command(version)]
#[command(
    about = "Write msb-rom.bin (Knight-Rider sweep) and lsb-rom.bin (0x00-0xff counter) to the current directory",
    long_about = None
)]
struct Cli {
    /// Print generation statistics to stderr
    #[arg(long)]
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    match GenerateCommand::new(GenerateConfig::default()).run() {
        Ok(result) => {
            if cli.stats {
                eprintln!("Generate stats: {}", result);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
