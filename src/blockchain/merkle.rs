use crate::hash::{Hash256, sha256d};

/// Bitcoin-style merkle root over transaction ids.
///
/// Odd levels duplicate their last node. A single leaf is its own root and
/// an empty list yields the zero hash.
pub fn merkle_root(leaves: &[Hash256]) -> Hash256 {
    if leaves.is_empty() {
        return Hash256::ZERO;
    }
    let mut level: Vec<Hash256> = leaves.to_vec();
    while level.len() > 1 {
        level = level
            .chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                let mut buf = [0u8; 64];
                buf[..32].copy_from_slice(left.as_bytes());
                buf[32..].copy_from_slice(right.as_bytes());
                sha256d(&buf)
            })
            .collect();
    }
    level[0]
}
