use log::info;
use primitive_types::U256;
use serde::Serialize;

use crate::blockchain::{Block, to_compact};
use crate::error::Result;
use crate::hash::Hash256;

use super::genesis::{ExpectedGenesis, GenesisTemplate, build_genesis_block, verify_genesis};
use super::prefixes::AddressPrefixes;
use super::seeds::{MAINNET_FIXED_SEEDS, PeerSeedEntry, TESTNET_FIXED_SEEDS, convert_seeds_now};
use super::Network;

/// A DNS seed: display name and host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DnsSeed {
    pub name: &'static str,
    pub host: &'static str,
}

/// Compiled-in description of a network, before anything is derived from it.
#[derive(Debug, Clone, Copy)]
pub struct NetworkDefinition {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pub_key: &'static str,
    pub default_port: u16,
    pub rpc_port: u16,
    /// Proof-of-work limit is `U256::MAX >> pow_limit_shift`.
    pub pow_limit_shift: u32,
    pub genesis: GenesisTemplate,
    /// When set, the rebuilt genesis must reproduce these values.
    pub expected_genesis: Option<ExpectedGenesis>,
    pub address_prefixes: AddressPrefixes,
    pub seed_hostnames: &'static [DnsSeed],
    pub packed_fixed_seeds: &'static [u32],
    pub pool_max_transactions: u32,
    pub pool_dummy_address: &'static str,
    pub last_pow_height: u32,
    pub pos_start_height: u32,
    pub data_dir: &'static str,
}

pub const MAINNET: NetworkDefinition = NetworkDefinition {
    network: Network::Main,
    message_start: [0xaf, 0x1b, 0xcf, 0x65],
    alert_pub_key: "0425b474f33e3d56692ba8c04f752a15850e574e33cf1484692c1035c6627c42a2b7ff5d1ce8606d38a5ed959f2935827d9a8333ebd1cc3f3f7c6f1189c8434e48",
    default_port: 23346,
    rpc_port: 23347,
    pow_limit_shift: 20,
    genesis: GenesisTemplate {
        label: "VCC Genesis",
        version: 1,
        time: 1523833200,
        nonce: 751050,
    },
    expected_genesis: Some(ExpectedGenesis {
        hash: "0000092fa0d904cdf3ede53f44d3e42e16402883c724b8466430d25b65722b0e",
        merkle_root: "a7cf34a559e86b8480d698cb329363cf7a6344340db7eb12566fea5d7ba5c1fe",
    }),
    address_prefixes: AddressPrefixes::new([
        &[10],
        &[43],
        &[147],
        &[188],
        &[0x04, 0x88, 0xb2, 0x1e],
        &[0x04, 0x88, 0xad, 0xe4],
    ]),
    seed_hostnames: &[
        DnsSeed {
            name: "0",
            host: "45.77.206.142",
        },
        DnsSeed {
            name: "1",
            host: "45.77.147.162",
        },
    ],
    packed_fixed_seeds: MAINNET_FIXED_SEEDS,
    pool_max_transactions: 3,
    pool_dummy_address: "CEuDqDZwKQnWQky9Sq9ys6AB2sPPm4SCUx",
    last_pow_height: 1000,
    pos_start_height: 2,
    data_dir: "",
};

/// The test network: main network values with these overrides.
pub const TESTNET: NetworkDefinition = NetworkDefinition {
    network: Network::Test,
    message_start: [0xbf, 0x2b, 0xcf, 0x65],
    alert_pub_key: "040124d14e569bd4176927884504f782d12c94b6ec332259ad50d861d3020bdde158cde46201908e18b4cf366e7bd03b61121104f3caad746e88f5cf2daf94e14c",
    default_port: 22346,
    rpc_port: 22347,
    genesis: GenesisTemplate {
        label: "VCC Genesis Test",
        nonce: 0,
        ..MAINNET.genesis
    },
    // The test genesis ships nonce 0 and is not pinned.
    expected_genesis: None,
    address_prefixes: AddressPrefixes::new([
        &[11],
        &[66],
        &[29],
        &[150],
        &[0x04, 0x35, 0x87, 0xcf],
        &[0x04, 0x35, 0x83, 0x94],
    ]),
    seed_hostnames: &[],
    packed_fixed_seeds: TESTNET_FIXED_SEEDS,
    last_pow_height: 300,
    data_dir: "testnet",
    ..MAINNET
};

/// Immutable parameters of one network.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub network: Network,
    pub message_start: [u8; 4],
    pub alert_pub_key: Vec<u8>,
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: U256,
    pub genesis: Block,
    pub genesis_hash: Hash256,
    pub address_prefixes: AddressPrefixes,
    pub seed_hostnames: Vec<DnsSeed>,
    pub fixed_seeds: Vec<PeerSeedEntry>,
    pub pool_max_transactions: u32,
    pub pool_dummy_address: &'static str,
    pub last_pow_height: u32,
    pub pos_start_height: u32,
    pub data_dir: &'static str,
}

impl ChainParams {
    /// Derive a parameter set from its definition.
    ///
    /// Fails if the definition pins a genesis that the rebuilt block does not
    /// reproduce, or if a hex constant is malformed.
    pub fn build(def: &NetworkDefinition) -> Result<Self> {
        let proof_of_work_limit = U256::MAX >> def.pow_limit_shift as usize;
        let genesis = build_genesis_block(&def.genesis, to_compact(proof_of_work_limit));

        let genesis_hash = match &def.expected_genesis {
            Some(expected) => verify_genesis(def.network, &genesis, expected)?,
            None => genesis.hash(),
        };
        info!(
            "{} network genesis {} (merkle {})",
            def.network, genesis_hash, genesis.header.merkle_root
        );

        Ok(Self {
            network: def.network,
            message_start: def.message_start,
            alert_pub_key: hex::decode(def.alert_pub_key)?,
            default_port: def.default_port,
            rpc_port: def.rpc_port,
            proof_of_work_limit,
            genesis,
            genesis_hash,
            address_prefixes: def.address_prefixes,
            seed_hostnames: def.seed_hostnames.to_vec(),
            fixed_seeds: convert_seeds_now(def.packed_fixed_seeds, def.default_port),
            pool_max_transactions: def.pool_max_transactions,
            pool_dummy_address: def.pool_dummy_address,
            last_pow_height: def.last_pow_height,
            pos_start_height: def.pos_start_height,
            data_dir: def.data_dir,
        })
    }

    pub fn mainnet() -> Result<Self> {
        Self::build(&MAINNET)
    }

    pub fn testnet() -> Result<Self> {
        Self::build(&TESTNET)
    }

    pub fn definition(network: Network) -> &'static NetworkDefinition {
        match network {
            Network::Main => &MAINNET,
            Network::Test => &TESTNET,
        }
    }

    /// Compact bits of the proof-of-work limit, as stored in the genesis header.
    pub fn pow_limit_bits(&self) -> u32 {
        to_compact(self.proof_of_work_limit)
    }

    /// Whether `height` is still in the proof-of-work phase.
    pub fn is_pow_height(&self, height: u32) -> bool {
        height <= self.last_pow_height
    }

    /// Whether proof-of-stake blocks are accepted at `height`.
    pub fn is_pos_height(&self, height: u32) -> bool {
        height >= self.pos_start_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chainparams::AddressPrefixKind;
    use crate::error::ChainParamsError;

    #[test]
    fn mainnet_constants() {
        let params = ChainParams::mainnet().unwrap();
        assert_eq!(params.message_start, [0xaf, 0x1b, 0xcf, 0x65]);
        assert_eq!(params.default_port, 23346);
        assert_eq!(params.rpc_port, 23347);
        assert_eq!(params.alert_pub_key.len(), 65);
        assert_eq!(params.pow_limit_bits(), 0x1e0f_ffff);
        assert_eq!(params.genesis.header.bits, 0x1e0f_ffff);
        assert_eq!(params.genesis.header.nonce, 751050);
        assert_eq!(params.genesis.header.time, 1523833200);
        assert_eq!(params.genesis_hash, params.genesis.hash());
        assert_eq!(
            params.genesis_hash.to_string(),
            "0000092fa0d904cdf3ede53f44d3e42e16402883c724b8466430d25b65722b0e"
        );
        assert_eq!(params.address_prefixes.get(AddressPrefixKind::PublicKeyHash), &[10]);
        assert_eq!(
            params.address_prefixes.get(AddressPrefixKind::ExtendedPrivateKey),
            &[0x04, 0x88, 0xad, 0xe4]
        );
        assert_eq!(params.seed_hostnames.len(), 2);
        assert_eq!(params.fixed_seeds.len(), 2);
        assert!(params.fixed_seeds.iter().all(|s| s.port == 23346));
        assert_eq!(params.last_pow_height, 1000);
        assert_eq!(params.pos_start_height, 2);
        assert_eq!(params.data_dir, "");
    }

    #[test]
    fn testnet_overrides_and_inherits() {
        let params = ChainParams::testnet().unwrap();
        assert_eq!(params.network, Network::Test);
        assert_eq!(params.message_start, [0xbf, 0x2b, 0xcf, 0x65]);
        assert_eq!(params.default_port, 22346);
        assert_eq!(params.rpc_port, 22347);
        assert_eq!(params.data_dir, "testnet");
        assert_eq!(params.last_pow_height, 300);
        assert!(params.seed_hostnames.is_empty());
        assert!(params.fixed_seeds.is_empty());
        assert_eq!(params.address_prefixes.get(AddressPrefixKind::ScriptHash), &[66]);
        assert_eq!(
            params.address_prefixes.get(AddressPrefixKind::ExtendedPublicKey),
            &[0x04, 0x35, 0x87, 0xcf]
        );
        // inherited
        assert_eq!(params.pool_max_transactions, 3);
        assert_eq!(params.pool_dummy_address, "CEuDqDZwKQnWQky9Sq9ys6AB2sPPm4SCUx");
        assert_eq!(params.pos_start_height, 2);
        assert_eq!(params.pow_limit_bits(), 0x1e0f_ffff);
        assert_eq!(params.genesis.header.time, 1523833200);
    }

    #[test]
    fn testnet_genesis_is_trusted_not_pinned() {
        let params = ChainParams::testnet().unwrap();
        assert_eq!(params.genesis.header.nonce, 0);
        assert_eq!(params.genesis.transactions.len(), 1);
        assert_eq!(
            params.genesis.header.merkle_root.to_string(),
            "8e00a17ed1ee5dd49fd7bd32f58a51184760876b695b38e7dd416765bc817dd9"
        );
        assert_eq!(params.genesis_hash, params.genesis.hash());
        assert_ne!(params.genesis_hash, ChainParams::mainnet().unwrap().genesis_hash);
    }

    #[test]
    fn pinned_genesis_mismatch_fails_build() {
        let def = NetworkDefinition {
            genesis: GenesisTemplate {
                nonce: 751051,
                ..MAINNET.genesis
            },
            ..MAINNET
        };
        assert!(matches!(
            ChainParams::build(&def),
            Err(ChainParamsError::GenesisMismatch { network: Network::Main, .. })
        ));
    }

    #[test]
    fn pinning_can_be_enabled_for_testnet() {
        let def = NetworkDefinition {
            expected_genesis: MAINNET.expected_genesis,
            ..TESTNET
        };
        assert!(ChainParams::build(&def).is_err());
    }

    #[test]
    fn malformed_alert_key_is_an_error() {
        let def = NetworkDefinition {
            alert_pub_key: "04zz",
            ..TESTNET
        };
        assert!(matches!(
            ChainParams::build(&def),
            Err(ChainParamsError::InvalidHex(_))
        ));
    }

    #[test]
    fn consensus_phase_heights() {
        let params = ChainParams::mainnet().unwrap();
        assert!(params.is_pow_height(1000));
        assert!(!params.is_pow_height(1001));
        assert!(!params.is_pos_height(1));
        assert!(params.is_pos_height(2));
    }
}
