use thiserror::Error;

use crate::chainparams::Network;
use crate::hash::Hash256;

/// Chain parameter errors.
#[derive(Error, Debug)]
pub enum ChainParamsError {
    /// Recomputed genesis value disagrees with the compiled-in constant.
    #[error("{network} genesis {field} mismatch: computed {actual}, expected {expected}")]
    GenesisMismatch {
        network: Network,
        field: &'static str,
        actual: Hash256,
        expected: Hash256,
    },

    /// Network id outside the known set.
    #[error("unknown network id {0}")]
    UnknownNetwork(u8),

    /// Malformed hex constant.
    #[error("invalid hex constant: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Alert key or signature rejected by secp256k1.
    #[error("invalid alert key or signature: {0}")]
    InvalidAlertKey(#[from] secp256k1::Error),
}

pub type Result<T> = std::result::Result<T, ChainParamsError>;

/// Terminate the process for an unrecoverable startup error.
///
/// Used only before any network or disk side effect; the node must not keep
/// running on a forked or undefined chain.
pub fn fatal(err: ChainParamsError) -> ! {
    if log::log_enabled!(log::Level::Error) {
        log::error!("fatal: {err}");
    } else {
        eprintln!("fatal: {err}");
    }
    std::process::abort()
}
