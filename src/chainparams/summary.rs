use serde::Serialize;

use super::{AddressPrefixKind, ChainParams, DnsSeed};

/// JSON view of a parameter set, printed at startup.
#[derive(Debug, Serialize)]
pub struct ParamsSummary {
    pub network: String,
    pub message_start: String,
    pub default_port: u16,
    pub rpc_port: u16,
    pub proof_of_work_limit: String,
    pub pow_limit_bits: String,
    pub genesis: GenesisSummary,
    pub address_prefixes: Vec<PrefixSummary>,
    pub seed_hostnames: Vec<DnsSeed>,
    pub fixed_seeds: Vec<FixedSeedSummary>,
    pub last_pow_height: u32,
    pub pos_start_height: u32,
    pub pool_max_transactions: u32,
    pub data_dir: String,
}

#[derive(Debug, Serialize)]
pub struct GenesisSummary {
    pub hash: String,
    pub merkle_root: String,
    pub time: u32,
    pub bits: String,
    pub nonce: u32,
}

#[derive(Debug, Serialize)]
pub struct PrefixSummary {
    pub kind: AddressPrefixKind,
    pub bytes: String,
}

#[derive(Debug, Serialize)]
pub struct FixedSeedSummary {
    pub addr: String,
    pub last_seen: i64,
}

impl From<&ChainParams> for ParamsSummary {
    fn from(params: &ChainParams) -> Self {
        let header = &params.genesis.header;
        Self {
            network: params.network.to_string(),
            message_start: hex::encode(params.message_start),
            default_port: params.default_port,
            rpc_port: params.rpc_port,
            proof_of_work_limit: format!("{:#x}", params.proof_of_work_limit),
            pow_limit_bits: format!("{:08x}", params.pow_limit_bits()),
            genesis: GenesisSummary {
                hash: params.genesis_hash.to_string(),
                merkle_root: header.merkle_root.to_string(),
                time: header.time,
                bits: format!("{:08x}", header.bits),
                nonce: header.nonce,
            },
            address_prefixes: params
                .address_prefixes
                .iter()
                .map(|(kind, bytes)| PrefixSummary {
                    kind,
                    bytes: hex::encode(bytes),
                })
                .collect(),
            seed_hostnames: params.seed_hostnames.clone(),
            fixed_seeds: params
                .fixed_seeds
                .iter()
                .map(|seed| FixedSeedSummary {
                    addr: seed.socket_addr().to_string(),
                    last_seen: seed.last_seen,
                })
                .collect(),
            last_pow_height: params.last_pow_height,
            pos_start_height: params.pos_start_height,
            pool_max_transactions: params.pool_max_transactions,
            data_dir: params.data_dir.to_string(),
        }
    }
}
