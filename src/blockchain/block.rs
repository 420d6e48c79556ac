use primitive_types::U256;

use crate::encoding::{Encodable, Encoder};
use crate::hash::{Hash256, scrypt_hash};
use crate::transaction::Transaction;

use super::merkle::merkle_root;
use super::target::{from_compact, meets_target};

/// The 80-byte part of a block that is hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32, // Unix timestamp (UTC)
    pub bits: u32, // compact target
    pub nonce: u32,
}

impl BlockHeader {
    /// Scrypt hash of the serialized header. This is both the block id and
    /// the proof-of-work hash.
    pub fn hash(&self) -> Hash256 {
        scrypt_hash(&self.to_bytes())
    }

    /// Target decoded from `bits`.
    pub fn target(&self) -> U256 {
        from_compact(self.bits)
    }

    /// Check the header hash against its own `bits`.
    pub fn has_valid_pow(&self) -> bool {
        meets_target(&self.hash(), &self.target())
    }
}

impl Encodable for BlockHeader {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_i32(self.version);
        enc.write_slice(self.prev_block.as_bytes());
        enc.write_slice(self.merkle_root.as_bytes());
        enc.write_u32(self.time);
        enc.write_u32(self.bits);
        enc.write_u32(self.nonce);
    }
}

/// A header with its transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub header: BlockHeader,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Assemble a block; the merkle root is computed from `transactions`.
    pub fn new(
        version: i32,
        transactions: Vec<Transaction>,
        prev_block: Hash256,
        time: u32,
        bits: u32,
        nonce: u32,
    ) -> Self {
        let mut block = Self {
            header: BlockHeader {
                version,
                prev_block,
                merkle_root: Hash256::ZERO,
                time,
                bits,
                nonce,
            },
            transactions,
        };
        block.header.merkle_root = block.build_merkle_root();
        block
    }

    /// Recompute the merkle root from the current transaction list.
    pub fn build_merkle_root(&self) -> Hash256 {
        let txids: Vec<Hash256> = self.transactions.iter().map(Transaction::txid).collect();
        merkle_root(&txids)
    }

    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Whether the stored merkle root still matches the transactions.
    pub fn merkle_root_matches(&self) -> bool {
        self.header.merkle_root == self.build_merkle_root()
    }
}
