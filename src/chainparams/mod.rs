//! Per-network protocol constants, genesis construction and the process-wide
//! active network.

pub mod alert;
pub mod genesis;
pub mod params;
pub mod prefixes;
pub mod seeds;
pub mod selector;
pub mod summary;

use std::fmt;

use crate::error::ChainParamsError;

pub use params::{ChainParams, DnsSeed, NetworkDefinition};
pub use prefixes::{AddressPrefixKind, AddressPrefixes};
pub use seeds::PeerSeedEntry;
pub use selector::{initialize, params, select_network, select_network_id, select_params_from_flags};

/// Networks the node knows how to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Network {
    Main = 0,
    Test = 1,
}

impl Network {
    pub const ALL: [Network; 2] = [Network::Main, Network::Test];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
        }
    }
}

impl TryFrom<u8> for Network {
    type Error = ChainParamsError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Network::Main),
            1 => Ok(Network::Test),
            other => Err(ChainParamsError::UnknownNetwork(other)),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
