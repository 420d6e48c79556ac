/// Serialization in the node's consensus byte layout: little-endian integers
/// and CompactSize length prefixes.
pub trait Encodable {
    fn encode(&self, enc: &mut Encoder);

    /// Serialize into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut enc = Encoder::new();
        self.encode(&mut enc);
        enc.into_inner()
    }
}

/// Append-only byte sink used by [`Encodable`] impls.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    /// Raw bytes, no length prefix.
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// CompactSize: 1, 3, 5 or 9 bytes depending on magnitude.
    pub fn write_compact_size(&mut self, n: u64) {
        match n {
            0..=0xfc => self.write_u8(n as u8),
            0xfd..=0xffff => {
                self.write_u8(0xfd);
                self.write_u16(n as u16);
            }
            0x1_0000..=0xffff_ffff => {
                self.write_u8(0xfe);
                self.write_u32(n as u32);
            }
            _ => {
                self.write_u8(0xff);
                self.write_u64(n);
            }
        }
    }

    /// Length-prefixed byte vector.
    pub fn write_var_bytes(&mut self, bytes: &[u8]) {
        self.write_compact_size(bytes.len() as u64);
        self.write_slice(bytes);
    }

    /// Length-prefixed sequence of encodable items.
    pub fn write_list<T: Encodable>(&mut self, items: &[T]) {
        self.write_compact_size(items.len() as u64);
        for item in items {
            item.encode(self);
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}
