use crate::{EndianView, Endian, Error, Result};
use alloc::vec::Vec;
use zerocopy::byteorder::{BE, F32, F64, LE, U16, U32, U64};
use zerocopy::IntoBytes;

/// Capacity of a builder created with [`ByteArrayBuilder::new`].
pub const DEFAULT_CAPACITY: usize = 4096;

/// Largest capacity a builder will ever allocate.
pub const MAX_CAPACITY: usize = i32::MAX as usize;

/// Accumulates bytes into a single growable buffer, like `String` does for text.
///
/// The builder owns its backing storage and a write cursor, its *length*. Every `append_*`
/// and `write_*` method writes at the cursor and moves it forward by the number of bytes
/// written. Multi-byte values are encoded in the byte order given by the caller; use
/// [`ByteArrayBuilder::le`] or [`ByteArrayBuilder::be`] to fix the byte order once.
///
/// Integer writes keep only the low bits that fit the requested width. Out-of-range values
/// are truncated silently, the same way a fixed-width register would truncate them.
///
/// Every write either completes or fails without changing the builder. Writes fail only when
/// the buffer must grow and growth was disabled ([`ErrorKind::GrowthDisabled`]) or the
/// required size is larger than [`MAX_CAPACITY`] ([`ErrorKind::CapacityExceeded`]).
///
/// ```
/// use platform_bytes::{ByteArrayBuilder, Endian};
///
/// let mut b = ByteArrayBuilder::with_capacity(16);
/// b.write_i32(0x12345678, Endian::Little)?;
/// b.write_i16(0x0102, Endian::Big)?;
/// assert_eq!(b.finalize(), [0x78, 0x56, 0x34, 0x12, 0x01, 0x02]);
/// # Ok::<(), platform_bytes::Error>(())
/// ```
///
/// [`ErrorKind::GrowthDisabled`]: crate::ErrorKind::GrowthDisabled
/// [`ErrorKind::CapacityExceeded`]: crate::ErrorKind::CapacityExceeded
#[derive(Clone)]
pub struct ByteArrayBuilder {
    /// Backing storage. Its length is the capacity; every byte is initialized.
    data: Vec<u8>,
    size: usize,
    allow_grow: bool,
}

impl ByteArrayBuilder {
    /// Creates a growable builder with [`DEFAULT_CAPACITY`] zeroed bytes of storage.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a growable builder with `capacity` zeroed bytes of storage.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: alloc::vec![0; capacity],
            size: 0,
            allow_grow: true,
        }
    }

    /// Adopts `data` as storage. The whole vector counts as already written.
    pub fn wrap(data: Vec<u8>) -> Self {
        Self {
            size: data.len(),
            data,
            allow_grow: true,
        }
    }

    /// Adopts `data` as storage, with the first `len` bytes counting as written.
    ///
    /// If `allow_grow` is false, the builder can never hold more than `data.len()` bytes.
    pub fn wrap_with(data: Vec<u8>, len: usize, allow_grow: bool) -> Result<Self> {
        if len > data.len() {
            return Err(Error::out_of_bounds(len));
        }
        Ok(Self {
            data,
            size: len,
            allow_grow,
        })
    }

    /// Number of bytes written.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Size of the backing storage.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Whether the backing storage may be reallocated to make room for writes.
    pub fn allow_grow(&self) -> bool {
        self.allow_grow
    }

    /// The bytes written so far. This does not copy.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.size]
    }

    /// The bytes written so far, as a byte string.
    #[cfg(feature = "bstr")]
    pub fn as_bstr(&self) -> &bstr::BStr {
        bstr::BStr::new(self.as_bytes())
    }

    /// Sets the length.
    ///
    /// Growing the length zero-fills the newly exposed bytes. Shrinking it does not clear
    /// anything: the old bytes stay in storage until they are overwritten or zero-filled by a
    /// later call to this method.
    pub fn set_len(&mut self, len: usize) -> Result<()> {
        self.ensure(len)?;
        let old_len = self.size;
        self.size = len;
        if len > old_len {
            self.data[old_len..len].fill(0);
        }
        Ok(())
    }

    /// Resets the length to 0. The storage is kept as is.
    pub fn clear(&mut self) {
        self.size = 0;
    }

    /// Returns a copy of the bytes written so far.
    ///
    /// The copy is exactly [`len`](Self::len) bytes long, never the full storage.
    pub fn finalize(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Extracts the storage, truncated to the bytes written so far.
    pub fn into_inner(self) -> Vec<u8> {
        let mut data = self.data;
        data.truncate(self.size);
        data
    }

    /// Returns a view that writes multi-byte values in `endian` byte order.
    pub fn view(&mut self, endian: Endian) -> EndianView<'_> {
        EndianView::new(self, endian)
    }

    /// Returns a view that writes multi-byte values in little-endian byte order.
    pub fn le(&mut self) -> EndianView<'_> {
        self.view(Endian::Little)
    }

    /// Returns a view that writes multi-byte values in big-endian byte order.
    pub fn be(&mut self) -> EndianView<'_> {
        self.view(Endian::Big)
    }

    /// Writes `bytes` to the output.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.ensure_count(bytes.len())?;
        self.data[self.size..self.size + bytes.len()].copy_from_slice(bytes);
        self.size += bytes.len();
        Ok(())
    }

    /// Writes `len` bytes of `src`, starting at `offset`.
    ///
    /// A range that does not fit in `src` fails with [`ErrorKind::OutOfBounds`] and writes
    /// nothing.
    ///
    /// [`ErrorKind::OutOfBounds`]: crate::ErrorKind::OutOfBounds
    pub fn append_range(&mut self, src: &[u8], offset: usize, len: usize) -> Result<()> {
        let end = offset
            .checked_add(len)
            .filter(|&end| end <= src.len())
            .ok_or_else(|| Error::out_of_bounds(offset.saturating_add(len)))?;
        self.append_bytes(&src[offset..end])
    }

    /// Writes a small, fixed-size array of bytes.
    pub fn append_cbytes<const N: usize>(&mut self, value: [u8; N]) -> Result<()> {
        self.append_bytes(&value)
    }

    /// Writes a single `u8` value.
    pub fn append_u8(&mut self, value: u8) -> Result<()> {
        self.append_cbytes([value])
    }

    /// Writes the low 8 bits of `value`.
    pub fn append_byte(&mut self, value: i32) -> Result<()> {
        self.append_u8(value as u8)
    }

    /// Writes the low 8 bits of each value, in order.
    pub fn append_byte_sequence(&mut self, values: &[i32]) -> Result<()> {
        self.ensure_count(values.len())?;
        let out = &mut self.data[self.size..self.size + values.len()];
        for (dst, &value) in out.iter_mut().zip(values) {
            *dst = value as u8;
        }
        self.size += values.len();
        Ok(())
    }

    /// Writes the low 16 bits of `value`.
    pub fn write_i16(&mut self, value: i32, endian: Endian) -> Result<()> {
        let value = value as u16;
        match endian {
            Endian::Little => self.append_bytes(U16::<LE>::new(value).as_bytes()),
            Endian::Big => self.append_bytes(U16::<BE>::new(value).as_bytes()),
        }
    }

    /// Writes the low 24 bits of `value`.
    pub fn write_i24(&mut self, value: i32, endian: Endian) -> Result<()> {
        let value = value as u32;
        match endian {
            Endian::Little => self.append_bytes(&U32::<LE>::new(value).as_bytes()[..3]),
            Endian::Big => self.append_bytes(&U32::<BE>::new(value).as_bytes()[1..]),
        }
    }

    /// Writes a single `i32` value.
    pub fn write_i32(&mut self, value: i32, endian: Endian) -> Result<()> {
        let value = value as u32;
        match endian {
            Endian::Little => self.append_bytes(U32::<LE>::new(value).as_bytes()),
            Endian::Big => self.append_bytes(U32::<BE>::new(value).as_bytes()),
        }
    }

    /// Writes a single `i64` value.
    pub fn write_i64(&mut self, value: i64, endian: Endian) -> Result<()> {
        let value = value as u64;
        match endian {
            Endian::Little => self.append_bytes(U64::<LE>::new(value).as_bytes()),
            Endian::Big => self.append_bytes(U64::<BE>::new(value).as_bytes()),
        }
    }

    /// Writes the IEEE-754 bit pattern of an `f32` value. NaN payloads and the sign of zero
    /// are preserved.
    pub fn write_f32(&mut self, value: f32, endian: Endian) -> Result<()> {
        match endian {
            Endian::Little => self.append_bytes(F32::<LE>::new(value).as_bytes()),
            Endian::Big => self.append_bytes(F32::<BE>::new(value).as_bytes()),
        }
    }

    /// Writes the IEEE-754 bit pattern of an `f64` value.
    ///
    /// Seen as two 32-bit halves, big endian puts the high half first and little endian the
    /// low half first, each half in the same byte order.
    pub fn write_f64(&mut self, value: f64, endian: Endian) -> Result<()> {
        match endian {
            Endian::Little => self.append_bytes(F64::<LE>::new(value).as_bytes()),
            Endian::Big => self.append_bytes(F64::<BE>::new(value).as_bytes()),
        }
    }

    fn ensure_count(&mut self, count: usize) -> Result<()> {
        let required = self
            .size
            .checked_add(count)
            .ok_or_else(|| Error::capacity_exceeded(usize::MAX))?;
        self.ensure(required)
    }

    /// Makes the storage at least `required` bytes long.
    fn ensure(&mut self, required: usize) -> Result<()> {
        let capacity = self.data.len();
        if required <= capacity {
            return Ok(());
        }
        if !self.allow_grow {
            return Err(Error::growth_disabled(required, capacity));
        }
        let new_capacity = next_capacity(capacity, required)?;

        self.data
            .try_reserve_exact(new_capacity - capacity)
            .map_err(|_| Error::capacity_exceeded(required))?;
        self.data.resize(new_capacity, 0);
        tracing::debug!(
            old_capacity = capacity,
            new_capacity,
            required,
            "byte array builder grew"
        );
        Ok(())
    }
}

/// Storage size to grow to when `capacity` bytes are not enough to hold `required`.
///
/// Growth multiplies the capacity by roughly 5, or jumps straight to `required` if that is
/// larger. When the step would pass [`MAX_CAPACITY`], it is clamped to half of it instead.
pub(crate) fn next_capacity(capacity: usize, required: usize) -> Result<usize> {
    if required > MAX_CAPACITY {
        return Err(Error::capacity_exceeded(required));
    }
    let stepped = capacity
        .checked_add(7)
        .and_then(|n| n.checked_mul(5))
        .filter(|&n| n <= MAX_CAPACITY);
    match stepped {
        Some(stepped) => Ok(stepped.max(required)),
        None => {
            let clamped = MAX_CAPACITY / 2;
            if required > clamped {
                return Err(Error::capacity_exceeded(required));
            }
            Ok(clamped)
        }
    }
}

impl Default for ByteArrayBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for ByteArrayBuilder {
    fn from(data: Vec<u8>) -> Self {
        Self::wrap(data)
    }
}

impl AsRef<[u8]> for ByteArrayBuilder {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl core::fmt::Debug for ByteArrayBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut s = f.debug_struct("ByteArrayBuilder");
        s.field("len", &self.size)
            .field("capacity", &self.capacity())
            .field("allow_grow", &self.allow_grow);
        #[cfg(feature = "bstr")]
        s.field("data", &self.as_bstr());
        #[cfg(not(feature = "bstr"))]
        s.field("data", &self.as_bytes());
        s.finish()
    }
}

#[cfg(feature = "std")]
impl std::io::Write for ByteArrayBuilder {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.append_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
