use secp256k1::{Message, PublicKey, Secp256k1, ecdsa::Signature};

use crate::error::Result;

use super::ChainParams;

impl ChainParams {
    /// The network alert key as a secp256k1 point.
    pub fn alert_key(&self) -> Result<PublicKey> {
        Ok(PublicKey::from_slice(&self.alert_pub_key)?)
    }

    /// Verify a DER-encoded ECDSA signature over a 32-byte alert digest.
    /// A malformed signature is an error; a well-formed one by another key is `Ok(false)`.
    pub fn verify_alert_signature(&self, msg32: [u8; 32], sig_der: &[u8]) -> Result<bool> {
        let secp = Secp256k1::verification_only();
        let sig = Signature::from_der(sig_der)?;
        let msg = Message::from_digest_slice(&msg32)?;
        let key = self.alert_key()?;
        Ok(secp.verify_ecdsa(&msg, &sig, &key).is_ok())
    }
}
