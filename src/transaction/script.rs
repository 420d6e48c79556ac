use crate::encoding::{Encodable, Encoder};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;

/// Raw script bytes with a builder for the push forms the genesis input needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script(Vec<u8>);

impl Script {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Push an integer using the small-number opcodes where possible.
    pub fn push_int(mut self, n: i64) -> Self {
        match n {
            0 => self.0.push(OP_0),
            -1 => self.0.push(OP_1NEGATE),
            1..=16 => self.0.push(OP_1 + (n as u8) - 1),
            _ => return self.push_num(n),
        }
        self
    }

    /// Push an integer as minimally encoded script-number bytes, never as an opcode.
    pub fn push_num(self, n: i64) -> Self {
        let bytes = encode_script_num(n);
        self.push_slice(&bytes)
    }

    /// Push arbitrary data with the shortest length prefix.
    pub fn push_slice(mut self, data: &[u8]) -> Self {
        let len = data.len();
        if len < OP_PUSHDATA1 as usize {
            self.0.push(len as u8);
        } else if len <= 0xff {
            self.0.push(OP_PUSHDATA1);
            self.0.push(len as u8);
        } else if len <= 0xffff {
            self.0.push(OP_PUSHDATA2);
            self.0.extend_from_slice(&(len as u16).to_le_bytes());
        } else {
            self.0.push(OP_PUSHDATA4);
            self.0.extend_from_slice(&(len as u32).to_le_bytes());
        }
        self.0.extend_from_slice(data);
        self
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Encodable for Script {
    fn encode(&self, enc: &mut Encoder) {
        enc.write_var_bytes(&self.0);
    }
}

/// Little-endian sign-magnitude encoding; zero is the empty vector.
fn encode_script_num(n: i64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let negative = n < 0;
    let mut abs = n.unsigned_abs();
    let mut out = Vec::new();
    while abs > 0 {
        out.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    // top bit is the sign; add a byte if the magnitude already uses it
    let last = out.len() - 1;
    if out[last] & 0x80 != 0 {
        out.push(if negative { 0x80 } else { 0x00 });
    } else if negative {
        out[last] |= 0x80;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genesis_style_script_sig() {
        let script = Script::new()
            .push_int(0)
            .push_num(42)
            .push_slice(b"VCC Genesis");
        assert_eq!(
            hex::encode(script.as_bytes()),
            "00012a0b5643432047656e65736973"
        );
    }

    #[test]
    fn small_ints_use_opcodes() {
        let script = Script::new().push_int(1).push_int(16).push_int(-1).push_int(17);
        assert_eq!(script.as_bytes(), &[0x51, 0x60, 0x4f, 0x01, 0x11]);
    }

    #[test]
    fn script_numbers_keep_sign_bit_free() {
        assert_eq!(encode_script_num(0x80), vec![0x80, 0x00]);
        assert_eq!(encode_script_num(-1), vec![0x81]);
        assert_eq!(encode_script_num(-0x80), vec![0x80, 0x80]);
        assert_eq!(encode_script_num(0x1234), vec![0x34, 0x12]);
    }

    #[test]
    fn long_pushes_use_pushdata() {
        let data = vec![7u8; 80];
        let script = Script::new().push_slice(&data);
        assert_eq!(&script.as_bytes()[..2], &[OP_PUSHDATA1, 80]);
        assert_eq!(script.len(), 82);
    }
}
