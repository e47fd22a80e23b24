use crate::*;

#[test]
fn native_endian() {
    if cfg!(target_endian = "little") {
        assert_eq!(Endian::NATIVE, Endian::Little);
        assert!(Endian::is_native_little());
    } else {
        assert_eq!(Endian::NATIVE, Endian::Big);
        assert!(Endian::is_native_big());
    }
    assert_eq!(Endian::default(), Endian::NATIVE);
    assert_eq!(Endian::Little.swapped(), Endian::Big);
    assert!(Endian::Big.is_big() && !Endian::Big.is_little());
}

#[test]
fn os_predicates() {
    assert!(Os::Windows.is_windows());
    assert!(!Os::Windows.is_posix());
    assert!(Os::Windows.is_desktop());
    assert_eq!(Os::Windows.dir_separator(), '\\');
    assert_eq!(Os::Windows.path_separator(), ';');

    assert!(Os::Linux.is_posix() && Os::Linux.is_desktop());
    assert_eq!(Os::Linux.dir_separator(), '/');
    assert_eq!(Os::Linux.path_separator(), ':');

    assert!(Os::MacOs.is_apple() && Os::MacOs.is_desktop() && !Os::MacOs.is_mobile());
    assert!(Os::Ios.is_apple_mobile() && Os::Ios.is_mobile() && Os::Ios.is_apple());
    assert!(Os::Tvos.is_apple_mobile());
    assert!(!Os::Watchos.is_apple_mobile() && !Os::Watchos.is_apple());
    assert!(Os::Android.is_mobile() && !Os::Android.is_desktop());
    assert!(Os::Wasm.is_posix() && !Os::Wasm.is_desktop());
}

#[test]
fn arch_predicates() {
    assert_eq!(Arch::Unknown.bits(), None);
    assert!(!Arch::Unknown.is_32_bits() && !Arch::Unknown.is_64_bits());
    assert_eq!(Arch::X64.bits(), Some(64));
    assert!(Arch::X86.is_32_bits() && Arch::X86.is_x86_or_x64());
    assert!(Arch::Arm64.is_arm() && Arch::Arm64.is_64_bits());
    assert!(Arch::Mipsel64.is_mips() && Arch::Mipsel64.is_64_bits());
    assert!(Arch::Mipsel32.is_mips() && Arch::Mipsel32.is_32_bits());
    assert!(Arch::Wasm32.is_wasm() && Arch::Wasm32.is_32_bits());
    assert!(Arch::PowerPc64.is_powerpc() && !Arch::PowerPc64.is_arm());
}

#[test]
fn arch_single_predicates() {
    let checks: [(fn(Arch) -> bool, Arch); 10] = [
        (Arch::is_x86, Arch::X86),
        (Arch::is_x64, Arch::X64),
        (Arch::is_arm32, Arch::Arm32),
        (Arch::is_arm64, Arch::Arm64),
        (Arch::is_mips32, Arch::Mips32),
        (Arch::is_mipsel32, Arch::Mipsel32),
        (Arch::is_mips64, Arch::Mips64),
        (Arch::is_mipsel64, Arch::Mipsel64),
        (Arch::is_wasm32, Arch::Wasm32),
        (Arch::is_powerpc64, Arch::PowerPc64),
    ];
    for (predicate, arch) in checks {
        for &other in Arch::VALUES {
            assert_eq!(predicate(other), other == arch, "{arch} vs {other}");
        }
    }
}

#[test]
fn current_values() {
    #[cfg(target_os = "linux")]
    assert_eq!(Os::CURRENT, Os::Linux);
    #[cfg(target_os = "windows")]
    assert_eq!(Os::CURRENT, Os::Windows);
    #[cfg(target_os = "macos")]
    assert_eq!(Os::CURRENT, Os::MacOs);
    #[cfg(target_arch = "x86_64")]
    assert_eq!(Arch::CURRENT, Arch::X64);
    #[cfg(target_arch = "aarch64")]
    assert_eq!(Arch::CURRENT, Arch::Arm64);

    if cfg!(debug_assertions) {
        assert_eq!(BuildVariant::CURRENT, BuildVariant::Debug);
    } else {
        assert_eq!(BuildVariant::CURRENT, BuildVariant::Release);
    }

    let p = Platform::current();
    assert_eq!(p.endian, Endian::NATIVE);
    assert_eq!(p.os, Os::CURRENT);
    assert_eq!(p.arch, Arch::CURRENT);
    assert_eq!(p.runtime, Runtime::CURRENT);
    assert_eq!(p.build_variant, BuildVariant::CURRENT);
    assert_eq!(p.is_debug(), cfg!(debug_assertions));
    assert_eq!(p.is_release(), !cfg!(debug_assertions));
}

#[cfg(all(feature = "std", target_os = "linux"))]
#[test]
fn current_raw_names() {
    let p = Platform::current();
    assert_eq!(p.raw_os_name, "linux");
    assert_eq!(p.raw_platform_name, "native-linux");
    assert!(p.is_native() && p.is_native_desktop() && p.is_linux());
    assert!(p.has_multithreaded_shared_heap);
    assert!(!p.is_js_or_wasm() && !p.is_inside_browser());
}

#[test]
fn default_platform() {
    let p = Platform::default();
    assert!(p.is_little_endian());
    assert_eq!(p.arch, Arch::Unknown);
    assert_eq!(p.os, Os::Unknown);
    assert_eq!(p.runtime, Runtime::Native);
    assert!(p.is_debug());
    assert_eq!(p.raw_platform_name, "unknown");
    assert_eq!(p.raw_os_name, "unknown");
    assert!(!p.has_multithreaded_shared_heap);
}

#[test]
fn derived_predicates() {
    let p = Platform {
        endian: Endian::Big,
        os: Os::Ios,
        build_variant: BuildVariant::Release,
        ..Platform::default()
    };
    assert!(p.is_big_endian() && !p.is_little_endian());
    assert!(p.is_release());
    assert!(p.is_ios() && p.is_apple() && p.is_apple_mobile() && p.is_unix());
    assert!(!p.is_mac() && !p.is_tvos() && !p.is_watchos() && !p.is_android());
    assert!(p.is_native() && !p.is_native_desktop());

    let p = Platform {
        os: Os::Windows,
        runtime: Runtime::Jvm,
        ..Platform::default()
    };
    assert!(p.is_windows() && !p.is_posix() && p.is_jvm() && !p.is_native_desktop());
}

#[test]
fn js_hosts() {
    let host = |runtime, name: &str| Platform {
        runtime,
        raw_platform_name: name.to_string(),
        ..Platform::default()
    };

    let node = host(Runtime::Js, "js-node");
    assert!(node.is_js() && node.is_js_node_js() && node.is_inside_browser());
    assert!(!node.is_js_browser() && !node.is_js_deno_js() && !node.is_js_shell());

    let worker = host(Runtime::Wasm, "wasm-worker");
    assert!(worker.is_wasm() && worker.is_js_worker() && worker.is_js_browser_or_worker());

    assert!(host(Runtime::Js, "js-web").is_js_browser_or_worker());
    assert!(host(Runtime::Js, "js-deno").is_js_deno_js());
    assert!(host(Runtime::Wasm, "wasm-shell").is_js_shell());

    let native = host(Runtime::Native, "native-linux");
    assert!(!native.is_js_node_js() && !native.is_js_browser_or_worker());
    assert!(!host(Runtime::Js, "jvm-node").is_js_node_js());
}

fn check_names<T: EnumLike + core::fmt::Debug + core::fmt::Display + core::str::FromStr>(
    count: usize,
) where
    T::Err: core::fmt::Debug,
{
    assert_eq!(T::VALUES.len(), count);
    for &value in T::VALUES {
        assert_eq!(T::from_name(value.name()), Some(value));
        assert_eq!(T::from_name(&value.name().to_uppercase()), Some(value));
        assert_eq!(value.to_string(), value.name());
        assert_eq!(value.name().parse::<T>().unwrap(), value);
    }
}

#[test]
fn enum_names() {
    check_names::<Os>(9);
    check_names::<Arch>(11);
    check_names::<Runtime>(5);
    check_names::<BuildVariant>(2);
    check_names::<Endian>(2);

    assert_eq!(Os::from_name(" MacOS "), Some(Os::MacOs));
    assert_eq!(Arch::from_name("riscv64"), None);

    let err = "beos".parse::<Os>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(err.message().contains("beos"), "{err}");
}

#[test]
fn type_names() {
    assert_eq!(simple_type_name::<ByteArrayBuilder>(), "ByteArrayBuilder");
    assert_eq!(simple_type_name::<EndianView<'static>>(), "EndianView");
    assert_eq!(simple_type_name::<Vec<Platform>>(), "Vec");
    assert_eq!(simple_type_name::<u32>(), "u32");
    assert_eq!(simple_type_name::<str>(), "str");
}

#[test]
fn structural_type_names() {
    assert_eq!(simple_type_name::<(u8, String)>(), "(u8, String)");
    assert_eq!(simple_type_name::<[String; 2]>(), "[String; 2]");
    assert_eq!(simple_type_name::<&[Vec<u8>]>(), "&[Vec]");
    assert_eq!(simple_type_name::<&mut Platform>(), "&mut Platform");
    assert_eq!(simple_type_name::<Option<(Os, Arch)>>(), "Option");
    assert_eq!(simple_type_name::<()>(), "()");
    assert_eq!(
        simple_type_name::<fn(Vec<u8>) -> ByteArrayBuilder>(),
        "fn(Vec) -> ByteArrayBuilder"
    );
    assert_eq!(
        simple_type_name::<Vec<fn() -> Endian>>(),
        "Vec"
    );
    assert_eq!(simple_type_name::<dyn core::fmt::Debug>(), "dyn Debug");
}
