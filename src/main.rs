use anyhow::{Context, Result};
use btc_keyaddr::prelude::*;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "btc-keyaddr")]
#[command(about = "Secp256k1 key derivation and Base58Check address encoding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive the public key and address for one private key
    Derive {
        /// Private key as a hex string
        #[arg(short, long)]
        key: String,
        /// Network: mainnet or testnet
        #[arg(short, long, default_value = "mainnet")]
        network: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Derive addresses for every key in a JSON config file
    Batch {
        /// Path to the JSON configuration
        #[arg(short, long)]
        config: String,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Verify the checksum of a Base58Check address
    Verify {
        /// The address string
        #[arg(short, long)]
        address: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Derive { key, network, json } => {
            let network: Network = network.parse().context("Invalid network name")?;
            let generator = AddressGenerator::new(network);
            let derived = generator
                .derive_from_hex(&key)
                .context("Address derivation failed")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&derived)?);
            } else {
                print_derived(&derived);
            }
        }
        Commands::Batch { config, json } => {
            let config = BatchConfig::from_file(&config).context("Failed to load configuration")?;
            let generator = AddressGenerator::new(config.network()?);
            let batch = config.to_batch();

            let outcome = if config.parallel {
                generator.process_batch_parallel(&batch)
            } else {
                generator.process_batch(&batch)
            };

            for (index, error) in &outcome.errors {
                eprintln!("key #{}: {}", index, error);
            }

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.derived)?);
            } else {
                for derived in &outcome.derived {
                    println!("{}  {}", derived.private_key, derived.address);
                }
            }
            eprintln!(
                "{} derived, {} failed",
                outcome.success_count(),
                outcome.error_count()
            );
        }
        Commands::Verify { address } => {
            let parsed = Address::from_base58(&address).context("Invalid address")?;
            println!("version:         0x{:02x}", parsed.version());
            match parsed.network() {
                Some(network) => println!("network:         {}", network.name()),
                None => println!("network:         unknown"),
            }
            println!("public_key_hash: {}", hex::encode(parsed.pubkey_hash()));
            println!("checksum:        OK");
        }
    }

    Ok(())
}

fn print_derived(derived: &DerivedAddress) {
    println!("private_key:           {}", derived.private_key);
    println!("public_key_x:          {}", derived.public_key_x);
    println!("public_key_y:          {}", derived.public_key_y);
    println!("compressed_public_key: {}", derived.compressed_public_key);
    println!("public_key_hash:       {}", derived.public_key_hash);
    println!("checksum:              {}", derived.checksum);
    println!("address:               {}", derived.address);
}
