use crate::{Arch, EnumLike, Endian, Os};
use alloc::format;
use alloc::string::String;

/// Execution environment the code runs in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Runtime {
    /// JavaScript engine
    Js,
    /// Java Virtual Machine
    Jvm,
    /// Android runtime
    Android,
    /// Native machine code
    Native,
    /// WebAssembly engine
    Wasm,
}

impl Runtime {
    /// Runtime of the target this crate was compiled for.
    pub const CURRENT: Runtime = if cfg!(target_family = "wasm") {
        Runtime::Wasm
    } else {
        Runtime::Native
    };

    /// Whether this is [`Runtime::Js`].
    pub const fn is_js(self) -> bool {
        matches!(self, Runtime::Js)
    }

    /// Whether this is [`Runtime::Jvm`].
    pub const fn is_jvm(self) -> bool {
        matches!(self, Runtime::Jvm)
    }

    /// Whether this is [`Runtime::Android`].
    pub const fn is_android(self) -> bool {
        matches!(self, Runtime::Android)
    }

    /// Whether this is [`Runtime::Native`].
    pub const fn is_native(self) -> bool {
        matches!(self, Runtime::Native)
    }

    /// JVM or Android.
    pub const fn is_jvm_or_android(self) -> bool {
        self.is_jvm() || self.is_android()
    }

    /// Whether this is [`Runtime::Wasm`].
    pub const fn is_wasm(self) -> bool {
        matches!(self, Runtime::Wasm)
    }
}

crate::enum_like::enum_like!(Runtime {
    Js => "js",
    Jvm => "jvm",
    Android => "android",
    Native => "native",
    Wasm => "wasm",
});

/// Whether the code was built with debug assertions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BuildVariant {
    /// Debug build
    Debug,
    /// Release build
    Release,
}

impl BuildVariant {
    /// Build variant of this crate, from `debug_assertions`.
    pub const CURRENT: BuildVariant = if cfg!(debug_assertions) {
        BuildVariant::Debug
    } else {
        BuildVariant::Release
    };

    /// Whether this is [`BuildVariant::Debug`].
    pub const fn is_debug(self) -> bool {
        matches!(self, BuildVariant::Debug)
    }

    /// Whether this is [`BuildVariant::Release`].
    pub const fn is_release(self) -> bool {
        matches!(self, BuildVariant::Release)
    }
}

crate::enum_like::enum_like!(BuildVariant {
    Debug => "debug",
    Release => "release",
});

/// Description of a platform.
///
/// [`Platform::current`] describes the platform this crate was compiled for. Other values can
/// be built with struct update syntax on top of [`Platform::default`], which is useful for
/// testing code that branches on the platform:
///
/// ```
/// use platform_bytes::{Os, Platform};
///
/// let windows = Platform { os: Os::Windows, ..Platform::default() };
/// assert!(windows.is_windows());
/// assert!(!windows.is_posix());
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Platform {
    /// Byte order
    pub endian: Endian,
    /// CPU architecture
    pub arch: Arch,
    /// Operating system
    pub os: Os,
    /// Runtime
    pub runtime: Runtime,
    /// Build variant
    pub build_variant: BuildVariant,
    /// Raw platform name, such as `native-linux` or `js-node`.
    pub raw_platform_name: String,
    /// Raw OS name as reported by the toolchain, such as `linux` or `macos`.
    pub raw_os_name: String,
    /// Whether threads share one heap. False for JS and WebAssembly, where workers have
    /// separate heaps.
    pub has_multithreaded_shared_heap: bool,
}

impl Default for Platform {
    fn default() -> Self {
        Self {
            endian: Endian::Little,
            arch: Arch::Unknown,
            os: Os::Unknown,
            runtime: Runtime::Native,
            build_variant: BuildVariant::Debug,
            raw_platform_name: String::from("unknown"),
            raw_os_name: String::from("unknown"),
            has_multithreaded_shared_heap: false,
        }
    }
}

impl Platform {
    /// Describes the platform this crate was compiled for.
    pub fn current() -> Self {
        let runtime = Runtime::CURRENT;
        let raw_os_name = current_raw_os_name();
        let raw_platform_name = if runtime.is_wasm() {
            String::from(runtime.name())
        } else {
            format!("{}-{}", runtime.name(), raw_os_name)
        };
        Self {
            endian: Endian::NATIVE,
            arch: Arch::CURRENT,
            os: Os::CURRENT,
            runtime,
            build_variant: BuildVariant::CURRENT,
            raw_platform_name,
            raw_os_name: String::from(raw_os_name),
            has_multithreaded_shared_heap: !runtime.is_js() && !runtime.is_wasm(),
        }
    }

    /// Little-endian platform.
    pub fn is_little_endian(&self) -> bool {
        self.endian.is_little()
    }

    /// Big-endian platform.
    pub fn is_big_endian(&self) -> bool {
        self.endian.is_big()
    }

    /// Debug build.
    pub fn is_debug(&self) -> bool {
        self.build_variant.is_debug()
    }

    /// Release build.
    pub fn is_release(&self) -> bool {
        self.build_variant.is_release()
    }

    /// Windows.
    pub fn is_windows(&self) -> bool {
        self.os.is_windows()
    }

    /// Unix-like, meaning anything but Windows.
    pub fn is_unix(&self) -> bool {
        self.os.is_posix()
    }

    /// Same as [`Platform::is_unix`].
    pub fn is_posix(&self) -> bool {
        self.os.is_posix()
    }

    /// Linux.
    pub fn is_linux(&self) -> bool {
        self.os.is_linux()
    }

    /// macOS.
    pub fn is_mac(&self) -> bool {
        self.os.is_mac()
    }

    /// Any Apple OS.
    pub fn is_apple(&self) -> bool {
        self.os.is_apple()
    }

    /// iOS or tvOS.
    pub fn is_apple_mobile(&self) -> bool {
        self.os.is_apple_mobile()
    }

    /// iOS.
    pub fn is_ios(&self) -> bool {
        self.os.is_ios()
    }

    /// Android.
    pub fn is_android(&self) -> bool {
        self.os.is_android()
    }

    /// tvOS.
    pub fn is_tvos(&self) -> bool {
        self.os.is_tvos()
    }

    /// watchOS.
    pub fn is_watchos(&self) -> bool {
        self.os.is_watchos()
    }

    /// Running in a JavaScript engine.
    pub fn is_js(&self) -> bool {
        self.runtime.is_js()
    }

    /// Running as native code.
    pub fn is_native(&self) -> bool {
        self.runtime.is_native()
    }

    /// Running as native code on a desktop OS.
    pub fn is_native_desktop(&self) -> bool {
        self.is_native() && self.os.is_desktop()
    }

    /// Running in a JVM.
    pub fn is_jvm(&self) -> bool {
        self.runtime.is_jvm()
    }

    /// Running in a WebAssembly engine.
    pub fn is_wasm(&self) -> bool {
        self.runtime.is_wasm()
    }

    /// Running in a JavaScript or WebAssembly engine.
    pub fn is_js_or_wasm(&self) -> bool {
        self.is_js() || self.is_wasm()
    }

    /// Running inside a browser. Any JS or WebAssembly engine is assumed to be one.
    pub fn is_inside_browser(&self) -> bool {
        self.is_js_or_wasm()
    }

    /// Running in a JS shell.
    pub fn is_js_shell(&self) -> bool {
        self.raw_name_is("shell")
    }

    /// Running in Node.js.
    pub fn is_js_node_js(&self) -> bool {
        self.raw_name_is("node")
    }

    /// Running in Deno.
    pub fn is_js_deno_js(&self) -> bool {
        self.raw_name_is("deno")
    }

    /// Running in a web page.
    pub fn is_js_browser(&self) -> bool {
        self.raw_name_is("web")
    }

    /// Running in a web worker.
    pub fn is_js_worker(&self) -> bool {
        self.raw_name_is("worker")
    }

    /// Running in a web page or a web worker.
    pub fn is_js_browser_or_worker(&self) -> bool {
        self.is_js_browser() || self.is_js_worker()
    }

    /// Matches `js-<host>` and `wasm-<host>` raw platform names.
    fn raw_name_is(&self, host: &str) -> bool {
        match self.raw_platform_name.split_once('-') {
            Some((engine, rest)) => (engine == "js" || engine == "wasm") && rest == host,
            None => false,
        }
    }
}

#[cfg(feature = "std")]
fn current_raw_os_name() -> &'static str {
    match std::env::consts::OS {
        "" => Os::CURRENT.name(),
        name => name,
    }
}

#[cfg(not(feature = "std"))]
fn current_raw_os_name() -> &'static str {
    Os::CURRENT.name()
}
