/// CPU architecture.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Arch {
    /// Unknown architecture.
    Unknown,
    /// 32-bit x86
    X86,
    /// 64-bit x86_64
    X64,
    /// 32-bit ARM
    Arm32,
    /// 64-bit ARM
    Arm64,
    /// 32-bit MIPS, big endian
    Mips32,
    /// 32-bit MIPS, little endian
    Mipsel32,
    /// 64-bit MIPS, big endian
    Mips64,
    /// 64-bit MIPS, little endian
    Mipsel64,
    /// 32-bit WebAssembly
    Wasm32,
    /// 64-bit PowerPC
    PowerPc64,
}

impl Arch {
    /// Architecture of the target this crate was compiled for.
    pub const CURRENT: Arch = if cfg!(target_arch = "x86") {
        Arch::X86
    } else if cfg!(target_arch = "x86_64") {
        Arch::X64
    } else if cfg!(target_arch = "arm") {
        Arch::Arm32
    } else if cfg!(target_arch = "aarch64") {
        Arch::Arm64
    } else if cfg!(target_arch = "mips") {
        if cfg!(target_endian = "little") {
            Arch::Mipsel32
        } else {
            Arch::Mips32
        }
    } else if cfg!(target_arch = "mips64") {
        if cfg!(target_endian = "little") {
            Arch::Mipsel64
        } else {
            Arch::Mips64
        }
    } else if cfg!(target_arch = "wasm32") {
        Arch::Wasm32
    } else if cfg!(target_arch = "powerpc64") {
        Arch::PowerPc64
    } else {
        Arch::Unknown
    };

    /// Pointer width in bits, or `None` for [`Arch::Unknown`].
    pub const fn bits(self) -> Option<u32> {
        match self {
            Arch::Unknown => None,
            Arch::X86 | Arch::Arm32 | Arch::Mips32 | Arch::Mipsel32 | Arch::Wasm32 => Some(32),
            Arch::X64 | Arch::Arm64 | Arch::Mips64 | Arch::Mipsel64 | Arch::PowerPc64 => Some(64),
        }
    }

    /// Whether this is a 32-bit architecture.
    pub const fn is_32_bits(self) -> bool {
        matches!(self.bits(), Some(32))
    }

    /// Whether this is a 64-bit architecture.
    pub const fn is_64_bits(self) -> bool {
        matches!(self.bits(), Some(64))
    }

    /// Whether this is [`Arch::X86`].
    pub const fn is_x86(self) -> bool {
        matches!(self, Arch::X86)
    }

    /// Whether this is [`Arch::X64`].
    pub const fn is_x64(self) -> bool {
        matches!(self, Arch::X64)
    }

    /// Whether this is [`Arch::Arm32`].
    pub const fn is_arm32(self) -> bool {
        matches!(self, Arch::Arm32)
    }

    /// Whether this is [`Arch::Arm64`].
    pub const fn is_arm64(self) -> bool {
        matches!(self, Arch::Arm64)
    }

    /// Whether this is [`Arch::Mips32`].
    pub const fn is_mips32(self) -> bool {
        matches!(self, Arch::Mips32)
    }

    /// Whether this is [`Arch::Mipsel32`].
    pub const fn is_mipsel32(self) -> bool {
        matches!(self, Arch::Mipsel32)
    }

    /// Whether this is [`Arch::Mips64`].
    pub const fn is_mips64(self) -> bool {
        matches!(self, Arch::Mips64)
    }

    /// Whether this is [`Arch::Mipsel64`].
    pub const fn is_mipsel64(self) -> bool {
        matches!(self, Arch::Mipsel64)
    }

    /// Whether this is [`Arch::Wasm32`].
    pub const fn is_wasm32(self) -> bool {
        matches!(self, Arch::Wasm32)
    }

    /// Whether this is [`Arch::PowerPc64`].
    pub const fn is_powerpc64(self) -> bool {
        matches!(self, Arch::PowerPc64)
    }

    /// ARM family.
    pub const fn is_arm(self) -> bool {
        matches!(self, Arch::Arm32 | Arch::Arm64)
    }

    /// x86 family.
    pub const fn is_x86_or_x64(self) -> bool {
        matches!(self, Arch::X86 | Arch::X64)
    }

    /// MIPS family, either byte order.
    pub const fn is_mips(self) -> bool {
        matches!(
            self,
            Arch::Mips32 | Arch::Mipsel32 | Arch::Mips64 | Arch::Mipsel64
        )
    }

    /// WebAssembly.
    pub const fn is_wasm(self) -> bool {
        matches!(self, Arch::Wasm32)
    }

    /// PowerPC family.
    pub const fn is_powerpc(self) -> bool {
        matches!(self, Arch::PowerPc64)
    }
}

crate::enum_like::enum_like!(Arch {
    Unknown => "unknown",
    X86 => "x86",
    X64 => "x64",
    Arm32 => "arm32",
    Arm64 => "arm64",
    Mips32 => "mips32",
    Mipsel32 => "mipsel32",
    Mips64 => "mips64",
    Mipsel64 => "mipsel64",
    Wasm32 => "wasm32",
    PowerPc64 => "powerpc64",
});
