use std::env;

use log::warn;

use crate::chainparams::Network;

/// Named boolean startup flags.
pub trait FlagReader {
    fn get_bool(&self, name: &str, default: bool) -> bool;
}

/// Flags taken from the process environment (after `.env` is loaded).
/// `testnet` is read from `TESTNET`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvFlags;

impl FlagReader for EnvFlags {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        let key = name.to_ascii_uppercase();
        match env::var(&key) {
            Ok(raw) => parse_bool(&raw).unwrap_or_else(|| {
                warn!("ignoring unparsable value {raw:?} for {key}, using {default}");
                default
            }),
            Err(_) => default,
        }
    }
}

/// Flags given on the command line. A flag that was not passed falls back
/// to another reader, normally [`EnvFlags`].
#[derive(Debug, Clone, Copy)]
pub struct CommandLineFlags<F> {
    pub testnet: bool,
    pub fallback: F,
}

impl<F: FlagReader> FlagReader for CommandLineFlags<F> {
    fn get_bool(&self, name: &str, default: bool) -> bool {
        match name {
            "testnet" if self.testnet => true,
            _ => self.fallback.get_bool(name, default),
        }
    }
}

/// A present-but-empty flag counts as set, like a bare `-testnet`.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let v = raw.trim().to_ascii_lowercase();
    match v.as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => other.parse::<i64>().ok().map(|n| n != 0),
    }
}

/// Startup configuration for the chain parameter layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeConfig {
    pub testnet: bool,
}

impl NodeConfig {
    pub fn from_flags(flags: &impl FlagReader) -> Self {
        Self {
            testnet: flags.get_bool("testnet", false),
        }
    }

    pub fn network(&self) -> Network {
        if self.testnet {
            Network::Test
        } else {
            Network::Main
        }
    }
}
