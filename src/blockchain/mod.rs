pub mod block;
pub mod merkle;
pub mod target;

pub use block::{Block, BlockHeader};
pub use merkle::merkle_root;
pub use target::{from_compact, to_compact};

/// Serialized header length: version, prev hash, merkle root, time, bits, nonce.
pub const HEADER_SIZE: usize = 80;
