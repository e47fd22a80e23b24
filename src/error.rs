use alloc::borrow::Cow;
use alloc::format;
use alloc::string::String;

/// Result type used throughout this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// The kind of an [`Error`].
///
/// This is a closed set shared by every module of the crate. The byte-array builder only ever
/// produces [`ErrorKind::GrowthDisabled`], [`ErrorKind::CapacityExceeded`] and
/// [`ErrorKind::OutOfBounds`]; the rest are available to code built on top of this crate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    /// A write needed more capacity, but the builder was created with growth disabled.
    GrowthDisabled,
    /// A write needed more capacity than a builder can ever hold.
    CapacityExceeded,
    /// Generic I/O failure.
    Io,
    /// Unexpected end of input.
    Eof,
    /// A file was not found.
    FileNotFound,
    /// A file already exists.
    FileAlreadyExists,
    /// The input is malformed.
    MalformedInput,
    /// Internal error identified by a numeric code.
    Internal,
    /// The operation is not valid in the current state.
    InvalidOperation,
    /// An index or range is out of bounds.
    OutOfBounds,
    /// A key was not found.
    KeyNotFound,
    /// The operation is not implemented.
    NotImplemented,
    /// An argument is invalid.
    InvalidArgument,
    /// Code that should be unreachable was reached.
    Unreachable,
    /// The value or operation is reserved.
    Reserved,
    /// The code path must be validated before use.
    MustValidateCode,
    /// The method must be overridden.
    MustOverride,
    /// The operation is deprecated.
    Deprecated,
    /// Something unexpected happened.
    Unexpected,
    /// The operation was cancelled.
    Cancel,
    /// The operation is not supported.
    Unsupported,
}

impl ErrorKind {
    /// The message used when an error of this kind is created without one.
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::GrowthDisabled => "ByteArrayBuilder configured to not grow",
            Self::CapacityExceeded => "ByteArrayBuilder can't grow that much",
            Self::Io => "I/O Error",
            Self::Eof => "End Of File",
            Self::FileNotFound => "File Not Found",
            Self::FileAlreadyExists => "File Already Exists",
            Self::MalformedInput => "Malformed Input",
            Self::Internal => "Internal Exception",
            Self::InvalidOperation => "Invalid Operation",
            Self::OutOfBounds => "Out Of Bounds",
            Self::KeyNotFound => "Key Not Found",
            Self::NotImplemented => "Not Implemented",
            Self::InvalidArgument => "Invalid Argument",
            Self::Unreachable => "Unreachable",
            Self::Reserved => "Reserved",
            Self::MustValidateCode => "Must Validate Code",
            Self::MustOverride => "Must Override",
            Self::Deprecated => "Deprecated",
            Self::Unexpected => "Unexpected",
            Self::Cancel => "Cancel",
            Self::Unsupported => "unsupported",
        }
    }

    /// Whether this kind describes an I/O condition.
    pub const fn is_io(self) -> bool {
        matches!(
            self,
            Self::Io | Self::Eof | Self::FileNotFound | Self::FileAlreadyExists
        )
    }
}

/// Error type shared by every module of this crate.
///
/// An error always has a [`ErrorKind`] and a message. Some kinds carry extra payload: the
/// offending index for [`ErrorKind::OutOfBounds`] and [`ErrorKind::MalformedInput`], the
/// numeric code for [`ErrorKind::Internal`], and the requested size for the builder errors.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
    index: Option<usize>,
    code: Option<i64>,
}

impl Error {
    /// Creates an error of the given kind with its default message.
    pub const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: Cow::Borrowed(kind.default_message()),
            index: None,
            code: None,
        }
    }

    /// Creates an error of the given kind with a custom message.
    pub fn with_message(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            ..Self::new(kind)
        }
    }

    /// A builder write needed `required` bytes but the builder holds `capacity` and may not grow.
    pub fn growth_disabled(required: usize, capacity: usize) -> Self {
        Self {
            code: i64::try_from(required).ok(),
            ..Self::with_message(
                ErrorKind::GrowthDisabled,
                format!(
                    "ByteArrayBuilder configured to not grow (required {required} bytes, capacity {capacity})"
                ),
            )
        }
    }

    /// A builder write needed `required` bytes, which is more than any builder can hold.
    pub fn capacity_exceeded(required: usize) -> Self {
        Self {
            code: i64::try_from(required).ok(),
            ..Self::with_message(
                ErrorKind::CapacityExceeded,
                format!("ByteArrayBuilder can't grow to {required} bytes"),
            )
        }
    }

    /// An index or range ending at `index` is out of bounds.
    pub fn out_of_bounds(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::new(ErrorKind::OutOfBounds)
        }
    }

    /// Malformed input detected at `index`. The message reads `At index=<index> <message>`.
    pub fn malformed_input_at(index: usize, message: &str) -> Self {
        let text = format!("At index={index} {message}");
        Self {
            index: Some(index),
            ..Self::with_message(ErrorKind::MalformedInput, String::from(text.trim()))
        }
    }

    /// Internal error identified by `code`.
    pub fn internal(code: i32) -> Self {
        Self {
            code: Some(code as i64),
            ..Self::with_message(
                ErrorKind::Internal,
                format!("Internal Exception with code {code} (0x{code:08x})"),
            )
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the index payload, if any.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Returns the numeric payload, if any.
    ///
    /// For builder errors this is the requested size, when it fits in an `i64`.
    pub fn code(&self) -> Option<i64> {
        self.code
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        use std::io::ErrorKind as Io;

        let kind = match err.kind() {
            ErrorKind::CapacityExceeded => Io::OutOfMemory,
            ErrorKind::GrowthDisabled => Io::WriteZero,
            ErrorKind::Eof => Io::UnexpectedEof,
            ErrorKind::FileNotFound => Io::NotFound,
            ErrorKind::FileAlreadyExists => Io::AlreadyExists,
            ErrorKind::MalformedInput => Io::InvalidData,
            ErrorKind::InvalidArgument | ErrorKind::OutOfBounds => Io::InvalidInput,
            ErrorKind::Unsupported | ErrorKind::NotImplemented => Io::Unsupported,
            _ => Io::Other,
        };
        std::io::Error::new(kind, err)
    }
}

/// Runs `action` and returns its value, or `None` if it failed.
///
/// When `show` is set, the error is logged at `warn` level before being discarded.
pub fn run_ignoring_errors<R, E, F>(show: bool, action: F) -> Option<R>
where
    E: core::fmt::Display,
    F: FnOnce() -> core::result::Result<R, E>,
{
    match action() {
        Ok(value) => Some(value),
        Err(err) => {
            if show {
                tracing::warn!(error = %err, "ignoring error");
            }
            None
        }
    }
}
