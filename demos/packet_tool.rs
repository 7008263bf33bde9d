//! CLI for inspecting LIFX packet bodies.
//!
//! This example demonstrates:
//! - Listing every registered packet with its type code and size
//! - Decoding a hex-encoded body by packet name or type code
//! - Encoding a JSON body back to hex
//!
//! Run with: cargo run --example packet_tool -- --help

use clap::{Parser, Subcommand};
use lifx_packets_rs::{PacketBody, registry};

#[derive(Parser)]
#[command(name = "packet-tool")]
#[command(about = "Decode and encode LIFX packet bodies", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all known packets
    List,

    /// Decode a hex body and print it as JSON
    Decode {
        /// Registry key or packet name (e.g. stateZone, stateColorZone) or numeric type code
        packet: String,
        /// Body bytes as hex, without the protocol header
        body: String,
    },

    /// Encode a JSON body, as printed by `decode`, to hex
    Encode {
        /// JSON of the form {"type": "<key>", "body": {...}}
        json: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            println!("{:>5}  {:<22} {:<12} flags", "type", "name", "size");
            for definition in registry::definitions() {
                let mut flags = Vec::new();
                if definition.legacy {
                    flags.push("legacy");
                }
                if definition.tagged {
                    flags.push("tagged");
                }
                println!(
                    "{:>5}  {:<22} {:<12} {}",
                    definition.type_code,
                    definition.name,
                    definition.size.to_string(),
                    flags.join(",")
                );
            }
        }
        Commands::Decode { packet, body } => {
            let definition = match packet.parse::<u16>() {
                Ok(type_code) => registry::by_type(type_code)?,
                Err(_) => registry::by_name(&packet)?,
            };
            let buf = hex::decode(body.trim())?;
            let decoded = definition.decode(&buf)?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
        Commands::Encode { json } => {
            let body: PacketBody = serde_json::from_str(&json)?;
            let buf = body.encode()?;
            println!("{}", hex::encode(&buf));
        }
    }

    Ok(())
}
