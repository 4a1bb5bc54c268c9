//! solmint (v0.1)
//!
//! A CLI for minting and updating Metaplex NFTs on Solana, built with
//! Tokio.
//!
//! # Pipeline Overview
//!
//! ```text
//!   config file ──▶ config ──▶ chain client ──▶ wallet (env/file/generated)
//!                                │
//!        image file ──▶ storage upload ──▶ metadata document upload ──▶ URI
//!                                │
//!                                ▼
//!              CreateV1 + MintV1 (mint) / UpdateV1 (update)
//!                                │
//!                                ▼
//!              finalized signature + explorer links on stdout
//! ```
//!
//! Every subcommand is a single linear flow; any failure logs the error
//! and exits with status 1.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use solana_sdk::native_token::{lamports_to_sol, sol_to_lamports};
use solana_sdk::pubkey::Pubkey;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solmint::chain::types::ChainError;
use solmint::chain::{ChainClient, Wallet};
use solmint::config::loader;
use solmint::nft::{self, CollectionDescriptor, NftDescriptor};
use solmint::storage::BundlrStorage;

#[derive(Parser)]
#[command(name = "solmint")]
#[command(about = "Mint and update Metaplex NFTs on Solana", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./solmint.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload image and metadata, then mint a new NFT
    Mint {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Path to the image file
        #[arg(long)]
        image: PathBuf,
        /// Resale royalty in basis points
        #[arg(long, default_value_t = 0)]
        seller_fee_bps: u16,
        /// Mint into this collection (the wallet must be its authority)
        #[arg(long)]
        collection: Option<String>,
    },
    /// Mint a sized collection parent NFT
    CreateCollection {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value_t = 0)]
        seller_fee_bps: u16,
    },
    /// Point an existing NFT's metadata at a new URI
    Update {
        /// Mint address of the token to update
        #[arg(long)]
        mint: String,
        /// Use this URI directly instead of uploading new metadata
        #[arg(long)]
        uri: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        symbol: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long, default_value_t = 0)]
        seller_fee_bps: u16,
    },
    /// Upload image and metadata only, printing the resulting URI
    Upload {
        #[arg(long)]
        name: String,
        #[arg(long)]
        symbol: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image: PathBuf,
        #[arg(long, default_value_t = 0)]
        seller_fee_bps: u16,
    },
    /// Show the wallet address and balance
    Balance,
    /// Request an airdrop (devnet/testnet only)
    Airdrop {
        #[arg(long, default_value_t = 2.0)]
        sol: f64,
    },
}

fn parse_pubkey(s: &str) -> Result<Pubkey, ChainError> {
    Pubkey::from_str(s).map_err(|_| ChainError::InvalidAddress(s.to_string()))
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = loader::load_or_default(cli.config.as_deref())?;
    tracing::info!(
        cluster = %config.rpc.cluster,
        storage = %config.storage.address,
        "configuration loaded"
    );

    let client = ChainClient::new(config.rpc.clone()).await?;
    let wallet = Wallet::load(&config.wallet)?;

    match cli.command {
        Commands::Mint {
            name,
            symbol,
            description,
            image,
            seller_fee_bps,
            collection,
        } => {
            wallet.ensure_funded(&client, &config.wallet).await?;
            let storage = BundlrStorage::new(&config.storage)?;
            let descriptor = NftDescriptor {
                name,
                symbol,
                description,
                seller_fee_basis_points: seller_fee_bps,
                image_file: image,
            };

            let uri = nft::upload_metadata(&storage, &descriptor).await?;
            let minted = match collection {
                Some(parent) => {
                    let parent = parse_pubkey(&parent)?;
                    nft::create_nft_in_collection(&client, &wallet, &descriptor, &uri, &parent)
                        .await?
                }
                None => nft::create_nft(&client, &wallet, &descriptor, &uri).await?,
            };

            println!("Token Mint: {}", client.cluster().explorer_address(&minted.mint));
            println!("Transaction: {}", client.cluster().explorer_tx(&minted.signature));
        }
        Commands::CreateCollection {
            name,
            symbol,
            description,
            image,
            seller_fee_bps,
        } => {
            wallet.ensure_funded(&client, &config.wallet).await?;
            let storage = BundlrStorage::new(&config.storage)?;
            let descriptor = CollectionDescriptor {
                name,
                symbol,
                description,
                seller_fee_basis_points: seller_fee_bps,
                image_file: image,
                is_collection: true,
                collection_authority: wallet.pubkey(),
            };

            let uri = nft::upload_metadata(&storage, &descriptor.as_nft()).await?;
            let minted = nft::create_collection_nft(&client, &wallet, &descriptor, &uri).await?;

            println!("Collection Mint: {}", client.cluster().explorer_address(&minted.mint));
            println!("Transaction: {}", client.cluster().explorer_tx(&minted.signature));
        }
        Commands::Update {
            mint,
            uri,
            name,
            symbol,
            description,
            image,
            seller_fee_bps,
        } => {
            let mint = parse_pubkey(&mint)?;
            let uri = match (uri, name, symbol, image) {
                (Some(uri), ..) => uri,
                (None, Some(name), Some(symbol), Some(image)) => {
                    let storage = BundlrStorage::new(&config.storage)?;
                    let descriptor = NftDescriptor {
                        name,
                        symbol,
                        description,
                        seller_fee_basis_points: seller_fee_bps,
                        image_file: image,
                    };
                    nft::upload_metadata(&storage, &descriptor).await?
                }
                _ => {
                    return Err(
                        "update needs either --uri or all of --name, --symbol, --image".into(),
                    )
                }
            };

            let updated = nft::update_nft_uri(&client, &wallet, &mint, &uri).await?;

            println!("Token Mint: {}", client.cluster().explorer_address(&updated.mint));
            println!("Transaction: {}", client.cluster().explorer_tx(&updated.signature));
        }
        Commands::Upload {
            name,
            symbol,
            description,
            image,
            seller_fee_bps,
        } => {
            let storage = BundlrStorage::new(&config.storage)?;
            let descriptor = NftDescriptor {
                name,
                symbol,
                description,
                seller_fee_basis_points: seller_fee_bps,
                image_file: image,
            };

            let uri = nft::upload_metadata(&storage, &descriptor).await?;
            println!("Metadata URI: {}", uri);
        }
        Commands::Balance => {
            let lamports = client.balance(&wallet.pubkey()).await?;
            println!("Address: {}", wallet.pubkey());
            println!("Balance: {} SOL ({} lamports)", lamports_to_sol(lamports), lamports);
        }
        Commands::Airdrop { sol } => {
            let signature = client
                .request_airdrop(&wallet.pubkey(), sol_to_lamports(sol))
                .await?;
            let lamports = client.balance(&wallet.pubkey()).await?;
            println!("Airdrop: {}", client.cluster().explorer_tx(&signature));
            println!("Balance: {} SOL", lamports_to_sol(lamports));
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solmint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("solmint v0.1.0 starting");

    if let Err(error) = run().await {
        tracing::error!(error = %error, "aborting");
        std::process::exit(1);
    }

    tracing::info!("finished successfully");
}
