use primitive_types::U256;

/// Compact ("nBits") encoding of a 256-bit target: one size byte followed by
/// a 3-byte mantissa. The mantissa's top bit is a sign flag, so it is never
/// set for a target.
pub fn to_compact(target: U256) -> u32 {
    let mut size = target.bits().div_ceil(8);
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        (target >> (8 * (size - 3))).low_u32()
    };
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }
    compact | ((size as u32) << 24)
}

/// Expand compact bits back to a target. The sign bit is ignored and
/// mantissa bits shifted past 256 are dropped.
pub fn from_compact(bits: u32) -> U256 {
    let size = (bits >> 24) as usize;
    let word = U256::from(bits & 0x007f_ffff);
    if size <= 3 {
        word >> (8 * (3 - size))
    } else {
        word << (8 * (size - 3))
    }
}

/// Whether a hash, read as an integer, is within `target`.
pub fn meets_target(hash: &crate::hash::Hash256, target: &U256) -> bool {
    hash.to_u256() <= *target
}
