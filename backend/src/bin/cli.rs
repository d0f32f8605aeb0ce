#![forbid(unsafe_code)]

use std::path::{Path, PathBuf};

use airdrop_merkle::merkle_tree::utils::parse_hash;
use airdrop_merkle::merkle_tree::{parse_address, verify_proof};
use airdrop_merkle::{AirdropConfig, AllowlistTree, TreeDump};
use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use airdrop_backend::apis::{Campaign, ClaimPackage};
use airdrop_backend::{load_from_file, save_to_file};

#[derive(Parser, Debug)]
#[command(name = "airdrop-cli")]
#[command(about = "Merkle allow-list airdrop tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the allow-list tree from a CSV file with an `address` column
    BuildTree {
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the tree dump
        #[arg(short, long)]
        output: PathBuf,

        /// Optional output file for the bare root
        #[arg(short, long)]
        root_output: Option<PathBuf>,
    },
    /// Write the claim package of one address
    Proof {
        #[arg(short, long)]
        tree: PathBuf,

        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long)]
        address: String,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Write the claim packages of every allow-listed address
    ExportProofs {
        #[arg(short, long)]
        tree: PathBuf,

        #[arg(short, long)]
        config: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Check a claim package against a published root
    Verify {
        /// The published root (hex)
        #[arg(short, long)]
        root: String,

        #[arg(short, long)]
        package: PathBuf,
    },
}

fn load_campaign(tree: &Path, config: &Path) -> Result<Campaign> {
    let dump: TreeDump = load_from_file(tree)
        .map_err(|e| anyhow!(e))
        .context("Failed to load tree dump")?;
    let config: AirdropConfig = load_from_file(config)
        .map_err(|e| anyhow!(e))
        .context("Failed to load airdrop config")?;
    Campaign::from_dump(config, dump).context("Invalid tree dump")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::BuildTree {
            input,
            output,
            root_output,
        } => {
            info!("Reading allow-list from {:?}", input);
            let tree = AllowlistTree::from_csv(&input)
                .context("Failed to build the allow-list tree")?;

            info!(
                "Built tree of {} addresses, root {:?}",
                tree.entries().len(),
                tree.root()
            );
            save_to_file(&output, &tree.dump())
                .map_err(|e| anyhow!(e))
                .context("Failed to write tree dump")?;

            if let Some(root_output) = root_output {
                std::fs::write(&root_output, format!("{:?}\n", tree.root()))
                    .context("Failed to write root")?;
            }
        }
        Commands::Proof {
            tree,
            config,
            address,
            output,
        } => {
            let campaign = load_campaign(&tree, &config)?;
            let address = parse_address(&address).context("Invalid address")?;
            let package = campaign
                .claim_package(&address)
                .context("Address not found in the allow-list")?;

            save_to_file(&output, &package)
                .map_err(|e| anyhow!(e))
                .context("Failed to write claim package")?;
            info!(
                "Wrote claim package of {:?} ({} proof nodes) to {:?}",
                address,
                package.proof.len(),
                output
            );
        }
        Commands::ExportProofs {
            tree,
            config,
            output,
        } => {
            let campaign = load_campaign(&tree, &config)?;
            campaign
                .export_claim_packages(&output)
                .map_err(|e| anyhow!(e))
                .context("Failed to export claim packages")?;
            info!(
                "Exported {} claim packages to {:?}",
                campaign.tree().entries().len(),
                output
            );
        }
        Commands::Verify { root, package } => {
            let root = parse_hash(&root).context("Invalid root")?;
            let package: ClaimPackage = load_from_file(&package)
                .map_err(|e| anyhow!(e))
                .context("Failed to load claim package")?;

            if package.root != root {
                anyhow::bail!("Claim package was generated for another root");
            }
            if !verify_proof(root, &package.claimant, &package.proof) {
                anyhow::bail!("{:?} is not eligible under root {:?}", package.claimant, root);
            }
            info!("{:?} is eligible for {} base units", package.claimant, package.amount);
        }
    }

    Ok(())
}
