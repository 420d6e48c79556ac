use std::net::{Ipv4Addr, SocketAddrV4};

use chrono::{DateTime, Utc};
use log::debug;
use rand::Rng;

pub const ONE_WEEK: i64 = 7 * 24 * 60 * 60;

/// Main network fixed seeds, one packed word per address (see [`unpack_ipv4`]).
/// Packed from the two DNS seed hosts; not a crawled seed table.
pub const MAINNET_FIXED_SEEDS: &[u32] = &[
    0x2d4d_ce8e, // 45.77.206.142
    0x2d4d_93a2, // 45.77.147.162
];

pub const TESTNET_FIXED_SEEDS: &[u32] = &[];

/// A compiled-in bootstrap peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerSeedEntry {
    pub octets: [u8; 4],
    pub port: u16,
    /// Unix seconds; always one to two weeks in the past at construction.
    pub last_seen: i64,
}

impl PeerSeedEntry {
    pub fn ip(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.octets)
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.ip(), self.port)
    }

    pub fn last_seen_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.last_seen, 0)
    }
}

/// Recover IPv4 octets from a packed seed word.
///
/// Each byte of the word is moved to the mirrored position and the result is
/// read in memory order of the little-endian host the table was generated on.
pub fn unpack_ipv4(word: u32) -> [u8; 4] {
    let t = (word & 0x0000_00ff) << 24
        | (word & 0x0000_ff00) << 8
        | (word & 0x00ff_0000) >> 8
        | (word & 0xff00_0000) >> 24;
    t.to_le_bytes()
}

/// Inverse of [`unpack_ipv4`], for generating seed tables.
pub fn pack_ipv4(octets: [u8; 4]) -> u32 {
    let t = u32::from_le_bytes(octets);
    (t & 0x0000_00ff) << 24 | (t & 0x0000_ff00) << 8 | (t & 0x00ff_0000) >> 8 | (t & 0xff00_0000) >> 24
}

/// Decode a packed seed table. Every entry gets `port` and a `last_seen`
/// uniformly drawn from `(now - 2 weeks, now - 1 week]`, so fixed seeds rank
/// below peers learned from the network.
pub fn convert_seeds<R: Rng>(
    packed: &[u32],
    port: u16,
    now: i64,
    rng: &mut R,
) -> Vec<PeerSeedEntry> {
    packed
        .iter()
        .map(|&word| PeerSeedEntry {
            octets: unpack_ipv4(word),
            port,
            last_seen: now - rng.gen_range(0..ONE_WEEK) - ONE_WEEK,
        })
        .collect()
}

/// [`convert_seeds`] against the wall clock and the thread RNG.
pub fn convert_seeds_now(packed: &[u32], port: u16) -> Vec<PeerSeedEntry> {
    let seeds = convert_seeds(packed, port, Utc::now().timestamp(), &mut rand::thread_rng());
    debug!("converted {} fixed seeds on port {port}", seeds.len());
    seeds
}
