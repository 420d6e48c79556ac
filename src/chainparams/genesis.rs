use log::{debug, info};

use crate::blockchain::{Block, BlockHeader, target};
use crate::error::{ChainParamsError, Result};
use crate::hash::Hash256;
use crate::transaction::{Script, Transaction, TxInput, TxOutput};

use super::Network;

/// Arbitrary integer pushed into the genesis input script next to the label.
pub const GENESIS_SCRIPT_NUMBER: i64 = 42;

/// Literal inputs of a network's genesis block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisTemplate {
    pub label: &'static str,
    pub version: i32,
    pub time: u32,
    pub nonce: u32,
}

/// Values a recomputed genesis must reproduce (display-order hex).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpectedGenesis {
    pub hash: &'static str,
    pub merkle_root: &'static str,
}

/// The genesis coinbase: one input carrying only payload, one empty output.
/// Nothing is paid to anyone, so it can never be spent.
pub fn genesis_transaction(template: &GenesisTemplate) -> Transaction {
    let script_sig = Script::new()
        .push_int(0)
        .push_num(GENESIS_SCRIPT_NUMBER)
        .push_slice(template.label.as_bytes());
    Transaction::new(
        1,
        template.time,
        vec![TxInput::coinbase(script_sig)],
        vec![TxOutput::empty()],
        0,
    )
}

pub fn build_genesis_block(template: &GenesisTemplate, bits: u32) -> Block {
    Block::new(
        template.version,
        vec![genesis_transaction(template)],
        Hash256::ZERO,
        template.time,
        bits,
        template.nonce,
    )
}

/// Recompute hash and merkle root and compare against `expected`.
/// Returns the block hash.
pub fn verify_genesis(network: Network, block: &Block, expected: &ExpectedGenesis) -> Result<Hash256> {
    let hash = block.hash();
    check(network, "hash", hash, expected.hash)?;
    check(network, "merkle root", block.build_merkle_root(), expected.merkle_root)?;
    check(network, "header merkle root", block.header.merkle_root, expected.merkle_root)?;
    debug!("{network} genesis verified: {hash}");
    Ok(hash)
}

fn check(network: Network, field: &'static str, actual: Hash256, expected: &str) -> Result<()> {
    let expected = Hash256::from_hex(expected)?;
    if actual != expected {
        return Err(ChainParamsError::GenesisMismatch {
            network,
            field,
            actual,
            expected,
        });
    }
    Ok(())
}

/// Outcome of a nonce search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinedHeader {
    pub nonce: u32,
    pub hash: Hash256,
    pub attempts: u64,
}

const PROGRESS_INTERVAL: u64 = 100_000;

/// Try nonces `start, start + 1, ...` until the header hash is within the
/// target decoded from its bits. The first hit wins.
///
/// Returns `None` only once the 32-bit nonce space above `start` is used up.
pub fn search_nonce(header: &BlockHeader, start: u32) -> Option<MinedHeader> {
    let limit = target::from_compact(header.bits);
    let mut candidate = *header;
    let mut attempts: u64 = 0;
    for nonce in start..=u32::MAX {
        candidate.nonce = nonce;
        attempts += 1;
        let hash = candidate.hash();
        if target::meets_target(&hash, &limit) {
            return Some(MinedHeader {
                nonce,
                hash,
                attempts,
            });
        }
        if attempts % PROGRESS_INTERVAL == 0 {
            info!("nonce search: {attempts} attempts, at nonce {nonce}");
        }
    }
    None
}

/// Offline genesis mining: search from nonce 0. Not run at startup.
pub fn mine_genesis(header: &BlockHeader) -> Option<MinedHeader> {
    info!(
        "mining genesis: time={} bits={:#010x} merkle={}",
        header.time, header.bits, header.merkle_root
    );
    search_nonce(header, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAIN: GenesisTemplate = GenesisTemplate {
        label: "VCC Genesis",
        version: 1,
        time: 1523833200,
        nonce: 751050,
    };

    const MAIN_EXPECTED: ExpectedGenesis = ExpectedGenesis {
        hash: "0000092fa0d904cdf3ede53f44d3e42e16402883c724b8466430d25b65722b0e",
        merkle_root: "a7cf34a559e86b8480d698cb329363cf7a6344340db7eb12566fea5d7ba5c1fe",
    };

    #[test]
    fn main_genesis_matches_literals() {
        let block = build_genesis_block(&MAIN, 0x1e0f_ffff);
        let hash = verify_genesis(Network::Main, &block, &MAIN_EXPECTED).unwrap();
        assert_eq!(hash.to_string(), MAIN_EXPECTED.hash);
        assert!(block.header.prev_block.is_zero());
    }

    #[test]
    fn genesis_coinbase_is_unspendable() {
        let tx = genesis_transaction(&MAIN);
        assert!(tx.is_coinbase());
        assert_eq!(tx.outputs.len(), 1);
        assert!(tx.outputs[0].is_empty());
    }

    #[test]
    fn wrong_nonce_is_reported() {
        let block = build_genesis_block(&GenesisTemplate { nonce: 0, ..MAIN }, 0x1e0f_ffff);
        match verify_genesis(Network::Main, &block, &MAIN_EXPECTED) {
            Err(ChainParamsError::GenesisMismatch { field, expected, .. }) => {
                assert_eq!(field, "hash");
                assert_eq!(expected.to_string(), MAIN_EXPECTED.hash);
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn wrong_label_breaks_merkle_root() {
        let block = build_genesis_block(&GenesisTemplate { label: "VCC", ..MAIN }, 0x1e0f_ffff);
        let err = check(
            Network::Main,
            "merkle root",
            block.build_merkle_root(),
            MAIN_EXPECTED.merkle_root,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("main genesis merkle root mismatch"));
    }

    #[test]
    fn stale_header_root_is_named() {
        let mut block = build_genesis_block(&MAIN, 0x1e0f_ffff);
        block.header.merkle_root = Hash256::ZERO;
        // hash and transactions still agree; only the header field is stale
        let hash = block.hash().to_string();
        let expected = ExpectedGenesis {
            hash: Box::leak(hash.into_boxed_str()),
            ..MAIN_EXPECTED
        };
        match verify_genesis(Network::Main, &block, &expected) {
            Err(ChainParamsError::GenesisMismatch { field, actual, .. }) => {
                assert_eq!(field, "header merkle root");
                assert!(actual.is_zero());
            }
            other => panic!("expected mismatch, got {other:?}"),
        }
    }

    #[test]
    fn search_reproduces_recorded_nonce() {
        let header = build_genesis_block(&MAIN, 0x1e0f_ffff).header;
        let mined = search_nonce(&header, 751_000).unwrap();
        assert_eq!(mined.nonce, 751_050);
        assert_eq!(mined.attempts, 51);
        assert_eq!(mined.hash.to_string(), MAIN_EXPECTED.hash);
    }

    #[test]
    fn easy_target_is_met_immediately() {
        let header = build_genesis_block(&MAIN, 0x207f_ffff).header;
        let mined = mine_genesis(&header).unwrap();
        assert_eq!(mined.nonce, 0);
        assert_eq!(mined.attempts, 1);
    }

    #[test]
    fn found_nonce_satisfies_target() {
        let header = build_genesis_block(&MAIN, 0x200f_ffff).header;
        let mined = mine_genesis(&header).unwrap();
        assert_eq!(mined.nonce, 9);
        assert_eq!(
            mined.hash.to_string(),
            "03cc26c0900baea58f3d45a052693bf189495bd34b52d32cc430128b8e505c03"
        );
        let solved = BlockHeader {
            nonce: mined.nonce,
            ..header
        };
        assert!(solved.has_valid_pow());
        assert_eq!(solved.hash(), mined.hash);
    }
}
