//! The process-wide active network.
//!
//! Both parameter sets are built once, on first use. The selection is a
//! network id published with release ordering; readers acquire it and get a
//! `&'static ChainParams` that never changes. Select once during startup,
//! before worker threads exist.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicU8, Ordering};

use log::{debug, info};

use crate::config::{FlagReader, NodeConfig};
use crate::error::fatal;

use super::params::{MAINNET, NetworkDefinition, TESTNET};
use super::{ChainParams, Network};

static MAINNET_PARAMS: LazyLock<ChainParams> = LazyLock::new(|| build_or_abort(&MAINNET));

static TESTNET_PARAMS: LazyLock<ChainParams> = LazyLock::new(|| build_or_abort(&TESTNET));

static ACTIVE: AtomicU8 = AtomicU8::new(Network::Main as u8);

/// A definition that fails its own genesis check terminates the process.
fn build_or_abort(def: &NetworkDefinition) -> ChainParams {
    ChainParams::build(def).unwrap_or_else(|err| fatal(err))
}

fn get(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => &MAINNET_PARAMS,
        Network::Test => &TESTNET_PARAMS,
    }
}

/// Build every parameter set now so startup checks run before anything else.
pub fn initialize() {
    for network in Network::ALL {
        let params = get(network);
        debug!("{network} parameters ready, genesis {}", params.genesis_hash);
    }
}

/// Parameters of the active network.
pub fn params() -> &'static ChainParams {
    // only valid ids are ever stored
    let network = Network::try_from(ACTIVE.load(Ordering::Acquire)).unwrap_or(Network::Main);
    get(network)
}

pub fn select_network(network: Network) {
    let params = get(network);
    ACTIVE.store(network.id(), Ordering::Release);
    info!(
        "selected {network} network (port {}, genesis {})",
        params.default_port, params.genesis_hash
    );
}

/// Select by raw id. An unknown id terminates the process.
pub fn select_network_id(id: u8) {
    match Network::try_from(id) {
        Ok(network) => select_network(network),
        Err(err) => fatal(err),
    }
}

/// Select from the `testnet` startup flag.
pub fn select_params_from_flags(flags: &impl FlagReader) -> Network {
    let network = NodeConfig::from_flags(flags).network();
    select_network(network);
    network
}
