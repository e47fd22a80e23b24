/// Operating system.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Os {
    /// Unknown operating system.
    Unknown,
    /// WebAssembly host.
    Wasm,
    /// Linux
    Linux,
    /// Windows
    Windows,
    /// Android
    Android,
    /// Apple macOS
    MacOs,
    /// Apple iOS
    Ios,
    /// Apple tvOS
    Tvos,
    /// Apple watchOS
    Watchos,
}

impl Os {
    /// Operating system of the target this crate was compiled for.
    pub const CURRENT: Os = if cfg!(target_os = "windows") {
        Os::Windows
    } else if cfg!(target_os = "android") {
        Os::Android
    } else if cfg!(target_os = "linux") {
        Os::Linux
    } else if cfg!(target_os = "macos") {
        Os::MacOs
    } else if cfg!(target_os = "ios") {
        Os::Ios
    } else if cfg!(target_os = "tvos") {
        Os::Tvos
    } else if cfg!(target_os = "watchos") {
        Os::Watchos
    } else if cfg!(target_family = "wasm") {
        Os::Wasm
    } else {
        Os::Unknown
    };

    /// Whether this is [`Os::Windows`].
    pub const fn is_windows(self) -> bool {
        matches!(self, Os::Windows)
    }

    /// Whether this is [`Os::Android`].
    pub const fn is_android(self) -> bool {
        matches!(self, Os::Android)
    }

    /// Whether this is [`Os::Linux`].
    pub const fn is_linux(self) -> bool {
        matches!(self, Os::Linux)
    }

    /// Whether this is [`Os::MacOs`].
    pub const fn is_mac(self) -> bool {
        matches!(self, Os::MacOs)
    }

    /// Whether this is [`Os::Ios`].
    pub const fn is_ios(self) -> bool {
        matches!(self, Os::Ios)
    }

    /// Whether this is [`Os::Tvos`].
    pub const fn is_tvos(self) -> bool {
        matches!(self, Os::Tvos)
    }

    /// Whether this is [`Os::Watchos`].
    pub const fn is_watchos(self) -> bool {
        matches!(self, Os::Watchos)
    }

    /// iOS or tvOS.
    pub const fn is_apple_mobile(self) -> bool {
        self.is_ios() || self.is_tvos()
    }

    /// Linux, Windows or macOS.
    pub const fn is_desktop(self) -> bool {
        self.is_linux() || self.is_windows() || self.is_mac()
    }

    /// Android or an Apple mobile OS.
    pub const fn is_mobile(self) -> bool {
        self.is_android() || self.is_apple_mobile()
    }

    /// macOS or an Apple mobile OS.
    pub const fn is_apple(self) -> bool {
        self.is_mac() || self.is_apple_mobile()
    }

    /// Anything but Windows.
    pub const fn is_posix(self) -> bool {
        !self.is_windows()
    }

    /// Separator between directories in a path: `\` on Windows, `/` elsewhere.
    pub const fn dir_separator(self) -> char {
        if self.is_windows() {
            '\\'
        } else {
            '/'
        }
    }

    /// Separator between entries of a path list such as `PATH`: `;` on Windows, `:` elsewhere.
    pub const fn path_separator(self) -> char {
        if self.is_windows() {
            ';'
        } else {
            ':'
        }
    }
}

crate::enum_like::enum_like!(Os {
    Unknown => "unknown",
    Wasm => "wasm",
    Linux => "linux",
    Windows => "windows",
    Android => "android",
    MacOs => "macos",
    Ios => "ios",
    Tvos => "tvos",
    Watchos => "watchos",
});
