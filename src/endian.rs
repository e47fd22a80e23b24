/// Byte order of multi-byte values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// Byte order of the target this crate was compiled for.
    pub const NATIVE: Endian = if cfg!(target_endian = "little") {
        Endian::Little
    } else {
        Endian::Big
    };

    /// Whether this is little endian.
    pub const fn is_little(self) -> bool {
        matches!(self, Endian::Little)
    }

    /// Whether this is big endian.
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }

    /// Whether the current target is little endian.
    pub const fn is_native_little() -> bool {
        Self::NATIVE.is_little()
    }

    /// Whether the current target is big endian.
    pub const fn is_native_big() -> bool {
        Self::NATIVE.is_big()
    }

    /// The opposite byte order.
    pub const fn swapped(self) -> Self {
        match self {
            Endian::Little => Endian::Big,
            Endian::Big => Endian::Little,
        }
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::NATIVE
    }
}

crate::enum_like::enum_like!(Endian {
    Little => "little",
    Big => "big",
});
