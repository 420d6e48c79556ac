use serde::Serialize;

/// Classes of identifiers that get a network-specific prefix before base58.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressPrefixKind {
    PublicKeyHash,
    ScriptHash,
    PrivateKey,
    StealthAddress,
    ExtendedPublicKey,
    ExtendedPrivateKey,
}

impl AddressPrefixKind {
    pub const ALL: [AddressPrefixKind; 6] = [
        AddressPrefixKind::PublicKeyHash,
        AddressPrefixKind::ScriptHash,
        AddressPrefixKind::PrivateKey,
        AddressPrefixKind::StealthAddress,
        AddressPrefixKind::ExtendedPublicKey,
        AddressPrefixKind::ExtendedPrivateKey,
    ];

    const fn index(self) -> usize {
        self as usize
    }
}

/// Prefix bytes for every [`AddressPrefixKind`], indexed in `ALL` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPrefixes([&'static [u8]; 6]);

impl AddressPrefixes {
    pub const fn new(prefixes: [&'static [u8]; 6]) -> Self {
        Self(prefixes)
    }

    pub fn get(&self, kind: AddressPrefixKind) -> &'static [u8] {
        self.0[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressPrefixKind, &'static [u8])> + '_ {
        AddressPrefixKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}
