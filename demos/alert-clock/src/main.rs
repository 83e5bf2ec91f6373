//! Alert-clock demo
//!
//! Plays the embedded application's role against a live bridge: prints the
//! startup configuration, requests the current time over `getNow`, and
//! raises error dialogs over `showError`, all through the in-process port.
//!
//! ## Usage
//!
//! ```bash
//! # Ask the host for the time (optionally more than once)
//! alert-clock clock --count 3
//!
//! # Raise a blocking error dialog
//! alert-clock alert "disk full"
//!
//! # Scripted run of both
//! alert-clock demo
//! ```

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use hostbridge::Bridge;
use hostbridge_core::{InProcessPort, MessagePort, Payload, channel};

/// Exercise the host bridge from the application side
#[derive(Parser)]
#[command(name = "alert-clock")]
#[command(about = "Drive the host bridge's showError and getNow channels")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request the current time over the `getNow` channel
    Clock {
        /// Number of requests to send
        #[arg(short, long, default_value_t = 1)]
        count: u32,
    },
    /// Raise an error dialog with the given message
    Alert {
        /// Message to display
        message: String,
    },
    /// Scripted run: two clock reads, then an alert
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let bridge = Bridge::new();
    let port = Arc::new(InProcessPort::new());
    bridge.attach(port.clone());

    let config = bridge.startup_config();
    println!(
        "{} {}",
        "startup config:".dimmed(),
        serde_json::to_string(&config)?
    );

    // Delivery is synchronous, so a reply sits in the receiver as soon as
    // the emit returns.
    let mut now_rx = port.subscribe(channel::NOW);

    match cli.command {
        Commands::Clock { count } => {
            for _ in 0..count {
                port.emit(channel::GET_NOW, Payload::Empty);
                if let Some(stamp) = now_rx.try_recv()? {
                    println!("{} {}", "now:".cyan(), stamp.into_text());
                }
            }
        }
        Commands::Alert { message } => {
            port.emit(channel::SHOW_ERROR, Payload::text(message));
        }
        Commands::Demo => {
            port.emit(channel::GET_NOW, Payload::Empty);
            port.emit(channel::GET_NOW, Payload::Empty);
            while let Some(stamp) = now_rx.try_recv()? {
                println!("{} {}", "now:".cyan(), stamp.into_text());
            }
            port.emit(
                channel::SHOW_ERROR,
                Payload::text("demo error: nothing is actually wrong"),
            );
        }
    }

    Ok(())
}
