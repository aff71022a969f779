//! Endian-aware primitive reads over an immutable byte buffer.
//!
//! [`ByteCursor`] is the lowest layer of the decoder:
//! offset-addressed scalar and array extraction,
//! honoring the endianness selected by the transfer syntax.
//! Every array read materializes an owned collection,
//! decoding element by element through the scalar path,
//! so results never borrow from the input buffer
//! and misaligned offsets need no special handling.

use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmbuf_core::value::C;
use snafu::ensure;

use crate::error::{Result, TruncatedBufferSnafu};

/// An endian-aware reader over an immutable byte buffer.
///
/// The cursor itself is stateless: every read takes an absolute offset.
/// Offset bookkeeping belongs to the element decoder.
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    endianness: Endianness,
}

macro_rules! impl_scalar_read {
    ($name: ident, $t: ty, $width: expr, $method: ident) => {
        /// Read one scalar at the given offset,
        /// honoring the cursor's endianness.
        pub fn $name(&self, offset: usize) -> Result<$t> {
            let buf = self.slice(offset, $width)?;
            Ok(match self.endianness {
                Endianness::Little => LittleEndian::$method(buf),
                Endianness::Big => BigEndian::$method(buf),
            })
        }
    };
}

macro_rules! impl_array_read {
    ($name: ident, $scalar: ident, $t: ty, $width: expr) => {
        /// Read `byte_length / element width` scalars starting at the
        /// given offset, honoring the cursor's endianness.
        /// Trailing bytes that do not fill a whole element are ignored.
        pub fn $name(&self, offset: usize, byte_length: usize) -> Result<C<$t>> {
            let count = byte_length / $width;
            let mut values = C::with_capacity(count);
            for i in 0..count {
                values.push(self.$scalar(offset + i * $width)?);
            }
            Ok(values)
        }
    };
}

impl<'a> ByteCursor<'a> {
    /// Create a new cursor over the given buffer.
    pub fn new(data: &'a [u8], endianness: Endianness) -> Self {
        ByteCursor { data, endianness }
    }

    /// The total length of the underlying buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The endianness this cursor decodes with.
    #[inline]
    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// The number of bytes available from the given offset
    /// to the end of the buffer.
    #[inline]
    pub fn remaining(&self, offset: usize) -> usize {
        self.data.len().saturating_sub(offset)
    }

    fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        ensure!(
            offset
                .checked_add(len)
                .is_some_and(|end| end <= self.data.len()),
            TruncatedBufferSnafu { offset, needed: len }
        );
        Ok(&self.data[offset..offset + len])
    }

    impl_scalar_read!(read_u16, u16, 2, read_u16);
    impl_scalar_read!(read_i16, i16, 2, read_i16);
    impl_scalar_read!(read_u32, u32, 4, read_u32);
    impl_scalar_read!(read_i32, i32, 4, read_i32);
    impl_scalar_read!(read_f32, f32, 4, read_f32);
    impl_scalar_read!(read_f64, f64, 8, read_f64);

    /// Read one byte at the given offset.
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.slice(offset, 1)?[0])
    }

    /// Read one signed byte at the given offset.
    pub fn read_i8(&self, offset: usize) -> Result<i8> {
        Ok(self.slice(offset, 1)?[0] as i8)
    }

    /// Borrow `len` raw bytes starting at the given offset.
    /// Single-byte data is endian-irrelevant.
    pub fn read_u8_slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        self.slice(offset, len)
    }

    impl_array_read!(read_u16_array, read_u16, u16, 2);
    impl_array_read!(read_i16_array, read_i16, i16, 2);
    impl_array_read!(read_u32_array, read_u32, u32, 4);
    impl_array_read!(read_i32_array, read_i32, i32, 4);
    impl_array_read!(read_f32_array, read_f32, f32, 4);
    impl_array_read!(read_f64_array, read_f64, f64, 8);

    /// Read `byte_length` bytes into an owned collection.
    pub fn read_u8_array(&self, offset: usize, byte_length: usize) -> Result<C<u8>> {
        Ok(C::from_slice(self.slice(offset, byte_length)?))
    }

    /// Read `byte_length` signed bytes into an owned collection.
    pub fn read_i8_array(&self, offset: usize, byte_length: usize) -> Result<C<i8>> {
        Ok(self
            .slice(offset, byte_length)?
            .iter()
            .map(|&b| b as i8)
            .collect())
    }

    /// Read a `u16` at the given offset and format it
    /// as `0xGGGG`: uppercase hexadecimal, zero-padded to 4 digits.
    pub fn read_hex(&self, offset: usize) -> Result<String> {
        Ok(format!("0x{:04X}", self.read_u16(offset)?))
    }

    /// Decode `len` bytes starting at the given offset as Latin-1
    /// (one byte maps to one code point).
    ///
    /// Specific Character Set handling beyond Latin-1 is out of scope.
    pub fn read_string(&self, offset: usize, len: usize) -> Result<String> {
        let bytes = self.slice(offset, len)?;
        Ok(bytes.iter().map(|&b| char::from(b)).collect())
    }
}
