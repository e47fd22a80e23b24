use super::init_test_logging;
use crate::*;

#[test]
fn default_messages() {
    assert_eq!(
        Error::new(ErrorKind::InvalidOperation).to_string(),
        "Invalid Operation"
    );
    assert_eq!(Error::from(ErrorKind::OutOfBounds).to_string(), "Out Of Bounds");
    assert_eq!(Error::from(ErrorKind::NotImplemented).message(), "Not Implemented");
    assert_eq!(Error::from(ErrorKind::Unsupported).message(), "unsupported");
}

#[test]
fn custom_message() {
    let err = Error::with_message(ErrorKind::KeyNotFound, "no such key: width");
    assert_eq!(err.kind(), ErrorKind::KeyNotFound);
    assert_eq!(err.to_string(), "no such key: width");
    assert_eq!(err.index(), None);
    assert_eq!(err.code(), None);
}

#[test]
fn internal_code() {
    let err = Error::internal(42);
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert_eq!(err.code(), Some(42));
    assert_eq!(err.message(), "Internal Exception with code 42 (0x0000002a)");

    let err = Error::internal(-1);
    assert_eq!(err.message(), "Internal Exception with code -1 (0xffffffff)");
}

#[test]
fn malformed_input() {
    let err = Error::malformed_input_at(3, "bad tag");
    assert_eq!(err.kind(), ErrorKind::MalformedInput);
    assert_eq!(err.index(), Some(3));
    assert_eq!(err.message(), "At index=3 bad tag");

    assert_eq!(Error::malformed_input_at(0, "").message(), "At index=0");
}

#[test]
fn out_of_bounds() {
    let err = Error::out_of_bounds(7);
    assert_eq!(err.index(), Some(7));
    assert_eq!(err.message(), "Out Of Bounds");
}

#[test]
fn builder_errors() {
    let err = Error::growth_disabled(10, 8);
    assert_eq!(err.kind(), ErrorKind::GrowthDisabled);
    assert_eq!(err.code(), Some(10));
    assert!(err.message().contains("required 10 bytes"), "{err}");
    assert!(err.message().contains("capacity 8"), "{err}");

    let err = Error::capacity_exceeded(usize::MAX);
    assert_eq!(err.kind(), ErrorKind::CapacityExceeded);
    assert_eq!(err.code(), i64::try_from(usize::MAX).ok());
    #[cfg(target_pointer_width = "64")]
    assert_eq!(err.code(), None);
    assert_eq!(Error::growth_disabled(usize::MAX, 0).code(), err.code());
    assert!(err.to_string().starts_with("ByteArrayBuilder can't grow"));
}

#[test]
fn io_kinds() {
    assert!(ErrorKind::Io.is_io());
    assert!(ErrorKind::Eof.is_io());
    assert!(ErrorKind::FileNotFound.is_io());
    assert!(ErrorKind::FileAlreadyExists.is_io());
    assert!(!ErrorKind::GrowthDisabled.is_io());
    assert!(!ErrorKind::Cancel.is_io());
}

#[cfg(feature = "std")]
#[test]
fn into_io_error() {
    use std::io::ErrorKind as Io;

    assert_eq!(
        std::io::Error::from(Error::capacity_exceeded(1)).kind(),
        Io::OutOfMemory
    );
    assert_eq!(
        std::io::Error::from(Error::growth_disabled(2, 1)).kind(),
        Io::WriteZero
    );
    assert_eq!(
        std::io::Error::from(Error::new(ErrorKind::Eof)).kind(),
        Io::UnexpectedEof
    );
    assert_eq!(
        std::io::Error::from(Error::new(ErrorKind::Reserved)).kind(),
        Io::Other
    );

    let io = std::io::Error::from(Error::malformed_input_at(1, "x"));
    assert_eq!(io.kind(), Io::InvalidData);
    assert_eq!(io.to_string(), "At index=1 x");
}

#[test]
fn ignoring_errors() {
    init_test_logging();

    assert_eq!(run_ignoring_errors(false, || Ok::<_, Error>(5)), Some(5));
    assert_eq!(
        run_ignoring_errors(true, || Err::<u8, _>(Error::new(ErrorKind::Unexpected))),
        None
    );
    assert_eq!(
        run_ignoring_errors(false, || "x1".parse::<u32>()),
        None
    );
}
