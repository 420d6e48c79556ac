use crate::encoding::{Encodable, Encoder};
use crate::hash::{Hash256, sha256d};

use super::script::Script;

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutPoint {
    pub txid: Hash256,
    pub vout: u32,
}

impl OutPoint {
    /// The prevout of a coinbase input: zero hash, index `u32::MAX`.
    pub fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

impl Encodable for OutPoint {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_slice(self.txid.as_bytes());
        enc.write_u32(self.vout);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxInput {
    pub prevout: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

impl TxInput {
    /// Input that spends nothing and only carries `script_sig` payload.
    pub fn coinbase(script_sig: Script) -> Self {
        Self {
            prevout: OutPoint::null(),
            script_sig,
            sequence: u32::MAX,
        }
    }
}

impl Encodable for TxInput {
    fn encode(&self, enc: &mut Encoder) {
        self.prevout.encode(enc);
        self.script_sig.encode(enc);
        enc.write_u32(self.sequence);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutput {
    pub value: i64,
    pub script_pubkey: Script,
}

impl TxOutput {
    /// Zero value, empty script: pays nobody.
    pub fn empty() -> Self {
        Self {
            value: 0,
            script_pubkey: Script::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0 && self.script_pubkey.is_empty()
    }
}

impl Encodable for TxOutput {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_i64(self.value);
        self.script_pubkey.encode(enc);
    }
}

/// Transaction in the proof-of-stake layout, which carries its own timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    pub fn new(
        version: i32,
        time: u32,
        inputs: Vec<TxInput>,
        outputs: Vec<TxOutput>,
        lock_time: u32,
    ) -> Self {
        Self {
            version,
            time,
            inputs,
            outputs,
            lock_time,
        }
    }

    /// Double SHA-256 of the serialized transaction.
    pub fn txid(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }
}

impl Encodable for Transaction {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_i32(self.version);
        enc.write_u32(self.time);
        enc.write_list(&self.inputs);
        enc.write_list(&self.outputs);
        enc.write_u32(self.lock_time);
    }
}
