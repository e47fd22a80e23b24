//! Small cross-platform utility layer: platform identification, a shared error taxonomy,
//! environment variable lookup and [`ByteArrayBuilder`], a growable byte buffer with
//! endian-aware fixed-width writers.
//!
//! ```
//! use platform_bytes::{build_bytes_be, build_bytes_le};
//!
//! assert_eq!(build_bytes_le(4096, |b| b.write_i32(0x12345678))?, [0x78, 0x56, 0x34, 0x12]);
//! assert_eq!(build_bytes_be(4096, |b| b.write_i32(0x12345678))?, [0x12, 0x34, 0x56, 0x78]);
//! # Ok::<(), platform_bytes::Error>(())
//! ```
//!
//! # Features
//! * `std` (default): [`Environment`] and its implementations, `std::io::Write` for
//!   [`ByteArrayBuilder`] and conversion of [`Error`] into `std::io::Error`. Without it the
//!   crate only needs `alloc`.
//! * `bstr` (default): [`ByteArrayBuilder::as_bstr`], also used by its `Debug` output.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod enum_like;

mod arch;
mod builder;
mod endian;
#[cfg(feature = "std")]
mod environment;
mod error;
mod os;
mod platform;
mod type_name;
mod view;

#[cfg(test)]
mod tests;

pub use arch::Arch;
pub use builder::{ByteArrayBuilder, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use endian::Endian;
pub use enum_like::EnumLike;
#[cfg(feature = "std")]
pub use environment::{
    CustomEnvironment, Environment, SystemEnvironment, DIR_SEPARATOR, PATH_SEPARATOR,
};
pub use error::{run_ignoring_errors, Error, ErrorKind, Result};
pub use os::Os;
pub use platform::{BuildVariant, Platform, Runtime};
pub use type_name::simple_type_name;
pub use view::{build_bytes, build_bytes_be, build_bytes_le, EndianView};
