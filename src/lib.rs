//! Chain parameters for the VCC node: per-network constants, the genesis
//! block, fixed bootstrap seeds and the process-wide active network.

pub mod blockchain;
pub mod chainparams;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod transaction;

pub use chainparams::{ChainParams, Network, params, select_network};
pub use error::{ChainParamsError, Result};
