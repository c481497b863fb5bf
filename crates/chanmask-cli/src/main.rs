//! Channel Mask Command-Line Interface
//!
//! Diagnostic tool for working with 802.15.4 channel masks:
//! - Inspecting a mask (member channels, count, raw bitmask)
//! - Drawing uniform random channels from a mask
//! - Converting between raw bitmasks and channel lists
//!
//! Masks can be given either as a raw bitmask (`--mask 0x07fff800`) or as
//! a channel list (`--channels "11,12,15-20"`).

use anyhow::{bail, Context, Result};
use chanmask_core::ChannelMask;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "chanmask")]
#[command(author, version, about = "Radio channel mask inspector", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the channels enabled by a mask
    Show {
        /// Raw bitmask (hex like 0x07fff800, or decimal)
        #[arg(short, long)]
        mask: Option<String>,

        /// Channel list (e.g. "11,12,15-20")
        #[arg(short, long)]
        channels: Option<String>,
    },

    /// Draw uniform random channels from a mask
    Pick {
        /// Raw bitmask (hex like 0x07fff800, or decimal)
        #[arg(short, long)]
        mask: Option<String>,

        /// Channel list (e.g. "11,12,15-20")
        #[arg(short, long)]
        channels: Option<String>,

        /// Number of channels to draw
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// RNG seed for reproducible draws (system entropy if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parse a raw bitmask argument (0x-prefixed hex or decimal)
fn parse_raw_mask(s: &str) -> Result<u32> {
    let bits = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    bits.with_context(|| format!("invalid bitmask: {}", s))
}

/// Build a mask from the --mask / --channels arguments
fn resolve_mask(mask: Option<String>, channels: Option<String>) -> Result<ChannelMask> {
    match (mask, channels) {
        (Some(_), Some(_)) => bail!("use either --mask or --channels, not both"),
        (None, None) => bail!("missing mask: pass --mask or --channels"),
        (Some(raw), None) => {
            let bits = parse_raw_mask(&raw)?;
            let mask = ChannelMask::from_bits(bits);
            if mask.bits() != bits {
                debug!(
                    "dropped out-of-window bits: {:#010x} -> {:#010x}",
                    bits,
                    mask.bits()
                );
            }
            Ok(mask)
        }
        (None, Some(list)) => list
            .parse()
            .with_context(|| format!("invalid channel list: {}", list)),
    }
}

fn cmd_show(mask: Option<String>, channels: Option<String>, verbose: u8) -> Result<()> {
    let mask = resolve_mask(mask, channels)?;

    println!("Channels: {}", mask);
    println!("Count:    {}", mask.len());
    println!("Mask:     {:#010x}", mask.bits());

    if verbose > 0 {
        println!();
        for channel in ChannelMask::MIN_CHANNEL..=ChannelMask::MAX_CHANNEL {
            let state = if mask.contains(channel) { "on" } else { "off" };
            println!("  {:2}  {}", channel, state);
        }
    }

    Ok(())
}

fn cmd_pick(
    mask: Option<String>,
    channels: Option<String>,
    count: usize,
    seed: Option<u64>,
) -> Result<()> {
    let mask = resolve_mask(mask, channels)?;

    if mask.is_empty() {
        bail!("cannot pick from an empty channel mask");
    }

    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => {
            info!("using seeded RNG (seed {})", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    };

    for _ in 0..count {
        // Non-empty mask checked above, so choose always yields a channel
        if let Some(channel) = mask.choose(&mut *rng) {
            println!("{}", channel);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Show { mask, channels } => cmd_show(mask, channels, cli.verbose),

        Commands::Pick {
            mask,
            channels,
            count,
            seed,
        } => cmd_pick(mask, channels, count, seed),

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
            Ok(())
        }
    }
}
