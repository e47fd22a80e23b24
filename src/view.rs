use crate::{ByteArrayBuilder, Endian, Result};
use alloc::vec::Vec;

/// A [`ByteArrayBuilder`] bound to one byte order.
///
/// The view holds nothing but a mutable borrow of the builder and the byte order, so it is
/// cheap to create and to drop. Any number of views can be taken from the same builder one
/// after another; the borrow keeps a view from outliving its builder.
///
/// ```
/// use platform_bytes::ByteArrayBuilder;
///
/// let mut b = ByteArrayBuilder::with_capacity(8);
/// b.be().write_i16(0x0102)?;
/// b.le().write_i16(0x0102)?;
/// assert_eq!(b.finalize(), [0x01, 0x02, 0x02, 0x01]);
/// # Ok::<(), platform_bytes::Error>(())
/// ```
pub struct EndianView<'a> {
    builder: &'a mut ByteArrayBuilder,
    endian: Endian,
}

impl<'a> EndianView<'a> {
    /// Constructor
    pub fn new(builder: &'a mut ByteArrayBuilder, endian: Endian) -> Self {
        Self { builder, endian }
    }

    /// Byte order used by the `write_*` methods.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Accesses the underlying builder.
    pub fn builder(&mut self) -> &mut ByteArrayBuilder {
        self.builder
    }

    /// Number of bytes written to the builder.
    pub fn len(&self) -> usize {
        self.builder.len()
    }

    /// Whether nothing has been written to the builder.
    pub fn is_empty(&self) -> bool {
        self.builder.is_empty()
    }

    /// See [`ByteArrayBuilder::append_bytes`].
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.builder.append_bytes(bytes)
    }

    /// See [`ByteArrayBuilder::append_range`].
    pub fn append_range(&mut self, src: &[u8], offset: usize, len: usize) -> Result<()> {
        self.builder.append_range(src, offset, len)
    }

    /// See [`ByteArrayBuilder::append_u8`].
    pub fn append_u8(&mut self, value: u8) -> Result<()> {
        self.builder.append_u8(value)
    }

    /// See [`ByteArrayBuilder::append_byte`].
    pub fn append_byte(&mut self, value: i32) -> Result<()> {
        self.builder.append_byte(value)
    }

    /// See [`ByteArrayBuilder::append_byte_sequence`].
    pub fn append_byte_sequence(&mut self, values: &[i32]) -> Result<()> {
        self.builder.append_byte_sequence(values)
    }

    /// Writes the low 16 bits of `value` in this view's byte order.
    pub fn write_i16(&mut self, value: i32) -> Result<()> {
        self.builder.write_i16(value, self.endian)
    }

    /// Writes the low 24 bits of `value` in this view's byte order.
    pub fn write_i24(&mut self, value: i32) -> Result<()> {
        self.builder.write_i24(value, self.endian)
    }

    /// Writes `value` in this view's byte order.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.builder.write_i32(value, self.endian)
    }

    /// Writes `value` in this view's byte order.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.builder.write_i64(value, self.endian)
    }

    /// Writes the bit pattern of `value` in this view's byte order.
    pub fn write_f32(&mut self, value: f32) -> Result<()> {
        self.builder.write_f32(value, self.endian)
    }

    /// Writes the bit pattern of `value` in this view's byte order.
    pub fn write_f64(&mut self, value: f64) -> Result<()> {
        self.builder.write_f64(value, self.endian)
    }

    /// See [`ByteArrayBuilder::clear`].
    pub fn clear(&mut self) {
        self.builder.clear()
    }

    /// See [`ByteArrayBuilder::finalize`].
    pub fn finalize(&self) -> Vec<u8> {
        self.builder.finalize()
    }
}

/// Creates a builder with `capacity` bytes of storage, lets `configure` fill it and returns
/// the bytes written.
///
/// ```
/// use platform_bytes::{build_bytes, Endian};
///
/// let bytes = build_bytes(16, |b| b.write_i32(0x12345678, Endian::Big))?;
/// assert_eq!(bytes, [0x12, 0x34, 0x56, 0x78]);
/// # Ok::<(), platform_bytes::Error>(())
/// ```
pub fn build_bytes<F>(capacity: usize, configure: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut ByteArrayBuilder) -> Result<()>,
{
    let mut builder = ByteArrayBuilder::with_capacity(capacity);
    configure(&mut builder)?;
    Ok(builder.finalize())
}

/// Like [`build_bytes`], but `configure` receives a little-endian view.
pub fn build_bytes_le<F>(capacity: usize, configure: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut EndianView<'_>) -> Result<()>,
{
    build_bytes(capacity, |b| configure(&mut b.le()))
}

/// Like [`build_bytes`], but `configure` receives a big-endian view.
pub fn build_bytes_be<F>(capacity: usize, configure: F) -> Result<Vec<u8>>
where
    F: FnOnce(&mut EndianView<'_>) -> Result<()>,
{
    build_bytes(capacity, |b| configure(&mut b.be()))
}
