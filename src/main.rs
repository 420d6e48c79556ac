use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{error, info};
use serde_json::json;

use vcc_chainparams::chainparams::{self, ChainParams, NetworkDefinition};
use vcc_chainparams::chainparams::genesis::mine_genesis;
use vcc_chainparams::chainparams::summary::ParamsSummary;
use vcc_chainparams::config::{CommandLineFlags, EnvFlags, FlagReader, NodeConfig};

/// VCC chain parameters: inspect the compiled-in networks or mine a genesis nonce.
#[derive(Parser, Debug)]
#[command(name = "vcc_chainparams")]
#[command(version, about, long_about = None)]
struct Args {
    /// Use the test network (falls back to the TESTNET environment variable)
    #[arg(long, global = true)]
    testnet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Print the active network's parameters as JSON (default)
    Show,
    /// Search the genesis nonce of the selected network from zero
    MineGenesis,
}

impl Args {
    fn flags(&self) -> CommandLineFlags<EnvFlags> {
        CommandLineFlags {
            testnet: self.testnet,
            fallback: EnvFlags,
        }
    }
}

fn main() -> ExitCode {
    let _ = dotenv();
    env_logger::init();

    let args = Args::parse();
    let flags = args.flags();
    match args.command.unwrap_or(Command::Show) {
        Command::Show => show(&flags),
        Command::MineGenesis => mine(NodeConfig::from_flags(&flags)),
    }
}

fn show(flags: &impl FlagReader) -> ExitCode {
    chainparams::initialize();
    let network = chainparams::select_params_from_flags(flags);
    info!("⛓️ active network: {network}");

    let summary = ParamsSummary::from(chainparams::params());
    match serde_json::to_string_pretty(&summary) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("could not render parameters: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Offline search for the genesis nonce of the configured network.
fn mine(config: NodeConfig) -> ExitCode {
    let def: &NetworkDefinition = ChainParams::definition(config.network());
    let unpinned = NetworkDefinition {
        expected_genesis: None,
        ..*def
    };
    let params = match ChainParams::build(&unpinned) {
        Ok(params) => params,
        Err(err) => {
            error!("could not build {} parameters: {err}", def.network);
            return ExitCode::FAILURE;
        }
    };

    let Some(mined) = mine_genesis(&params.genesis.header) else {
        error!("nonce space exhausted without meeting the target");
        return ExitCode::FAILURE;
    };

    let out = json!({
        "network": def.network.to_string(),
        "hash": mined.hash.to_string(),
        "merkle_root": params.genesis.header.merkle_root.to_string(),
        "time": params.genesis.header.time,
        "bits": format!("{:08x}", params.genesis.header.bits),
        "nonce": mined.nonce,
        "attempts": mined.attempts,
    });
    println!("{out:#}");
    if mined.nonce != def.genesis.nonce {
        info!(
            "compiled-in nonce is {}, update the definition to {}",
            def.genesis.nonce, mined.nonce
        );
    }
    ExitCode::SUCCESS
}
