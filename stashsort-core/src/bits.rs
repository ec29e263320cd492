//! Bit-level access to item buffers.
//!
//! Bits are numbered globally over the buffer: bit 0 is the least
//! significant bit of byte 0, bit 8 the least significant bit of byte 1.
//! Multi-bit fields are stored least significant bit first.

use thiserror::Error;

/// Largest field width the codec ever reads or writes in one go.
pub const MAX_WIDTH: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BitError {
    #[error("bit read of {width} bits at offset {offset} exceeds buffer of {len_bits} bits")]
    OutOfRange {
        offset: usize,
        width: usize,
        len_bits: usize,
    },

    #[error("value {value} does not fit in {width} bits")]
    ValueOverflow { value: u32, width: usize },

    #[error("field width {width} is outside 1..=32")]
    InvalidWidth { width: usize },
}

fn check_span(len_bytes: usize, offset: usize, width: usize) -> Result<(), BitError> {
    if width == 0 || width > MAX_WIDTH {
        return Err(BitError::InvalidWidth { width });
    }
    let len_bits = len_bytes * 8;
    match offset.checked_add(width) {
        Some(end) if end <= len_bits => Ok(()),
        _ => Err(BitError::OutOfRange {
            offset,
            width,
            len_bits,
        }),
    }
}

/// Read `width` bits starting at `offset`.
pub fn read_bits(data: &[u8], offset: usize, width: usize) -> Result<u32, BitError> {
    check_span(data.len(), offset, width)?;

    let mut value = 0u64;
    let first = offset / 8;
    let last = (offset + width - 1) / 8;
    for (i, byte) in data[first..=last].iter().enumerate() {
        value |= (*byte as u64) << (i * 8);
    }
    value >>= offset % 8;
    let mask = (1u64 << width) - 1;
    Ok((value & mask) as u32)
}

/// Overwrite exactly `width` bits at `offset` with `value`.
///
/// The buffer length and every bit outside the field are left untouched.
pub fn write_bits(data: &mut [u8], offset: usize, width: usize, value: u32) -> Result<(), BitError> {
    check_span(data.len(), offset, width)?;
    if width < MAX_WIDTH && value >> width != 0 {
        return Err(BitError::ValueOverflow { value, width });
    }

    for i in 0..width {
        let bit = offset + i;
        let byte = &mut data[bit / 8];
        let mask = 1u8 << (bit % 8);
        if (value >> i) & 1 == 1 {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }
    Ok(())
}

/// Sequential reader that threads the bit offset through a decode pass.
#[derive(Debug, Clone)]
pub struct BitCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BitCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn at(data: &'a [u8], pos: usize) -> Self {
        Self { data, pos }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        (self.data.len() * 8).saturating_sub(self.pos)
    }

    /// Read the next `width` bits and advance. On failure the cursor does
    /// not move.
    pub fn read(&mut self, width: usize) -> Result<u32, BitError> {
        let value = read_bits(self.data, self.pos, width)?;
        self.pos += width;
        Ok(value)
    }

    pub fn read_flag(&mut self) -> Result<bool, BitError> {
        Ok(self.read(1)? == 1)
    }

    /// Read a field only when `present` holds.
    pub fn read_if(&mut self, present: bool, width: usize) -> Result<Option<u32>, BitError> {
        if present {
            self.read(width).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn skip(&mut self, width: usize) -> Result<(), BitError> {
        let len_bits = self.data.len() * 8;
        if self.pos + width > len_bits {
            return Err(BitError::OutOfRange {
                offset: self.pos,
                width,
                len_bits,
            });
        }
        self.pos += width;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Append-only bit packer used to synthesize item payloads in tests.
    #[derive(Default)]
    pub struct BitWriter {
        bytes: Vec<u8>,
        len: usize,
    }

    impl BitWriter {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn len(&self) -> usize {
            self.len
        }

        pub fn push(&mut self, width: usize, value: u32) -> &mut Self {
            for i in 0..width {
                if self.len % 8 == 0 {
                    self.bytes.push(0);
                }
                if (value >> i) & 1 == 1 {
                    let last = self.bytes.len() - 1;
                    self.bytes[last] |= 1 << (self.len % 8);
                }
                self.len += 1;
            }
            self
        }

        /// Pad with zero bits up to absolute bit `offset`.
        pub fn pad_to(&mut self, offset: usize) -> &mut Self {
            while self.len < offset {
                self.push(1, 0);
            }
            self
        }

        pub fn finish(&self) -> Vec<u8> {
            self.bytes.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::BitWriter;
    use super::*;

    #[test]
    fn reads_lsb_first_within_a_byte() {
        let data = [0b1010_0110u8];
        assert_eq!(read_bits(&data, 0, 1).unwrap(), 0);
        assert_eq!(read_bits(&data, 1, 2).unwrap(), 0b11);
        assert_eq!(read_bits(&data, 4, 4).unwrap(), 0b1010);
    }

    #[test]
    fn reads_across_byte_boundaries() {
        let data = [0xF0u8, 0x0F, 0xAA];
        assert_eq!(read_bits(&data, 4, 8).unwrap(), 0xFF);
        assert_eq!(read_bits(&data, 0, 24).unwrap(), 0xAA0FF0);
        assert_eq!(read_bits(&[0xFF, 0xFF, 0xFF, 0xFF, 0x01], 1, 32).unwrap(), u32::MAX);
    }

    #[test]
    fn rejects_reads_past_the_end() {
        let data = [0u8; 2];
        assert_eq!(
            read_bits(&data, 10, 7),
            Err(BitError::OutOfRange {
                offset: 10,
                width: 7,
                len_bits: 16
            })
        );
        assert!(read_bits(&data, 15, 1).is_ok());
        assert_eq!(read_bits(&data, 0, 0), Err(BitError::InvalidWidth { width: 0 }));
        assert_eq!(read_bits(&data, 0, 33), Err(BitError::InvalidWidth { width: 33 }));
    }

    #[test]
    fn patch_touches_only_the_field() {
        let mut data = [0xFFu8; 4];
        write_bits(&mut data, 5, 7, 0).unwrap();
        assert_eq!(data, [0x1F, 0xF0, 0xFF, 0xFF]);

        write_bits(&mut data, 5, 7, 0b101_0101).unwrap();
        assert_eq!(read_bits(&data, 5, 7).unwrap(), 0b101_0101);
        assert_eq!(read_bits(&data, 0, 5).unwrap(), 0x1F);
        assert_eq!(read_bits(&data, 12, 20).unwrap(), 0xFFFFF);
    }

    #[test]
    fn patch_rejects_values_wider_than_the_field() {
        let mut data = [0u8; 2];
        assert_eq!(
            write_bits(&mut data, 0, 4, 16),
            Err(BitError::ValueOverflow { value: 16, width: 4 })
        );
        assert_eq!(data, [0, 0]);
        write_bits(&mut data, 0, 4, 15).unwrap();
        assert_eq!(data, [0x0F, 0]);
    }

    #[test]
    fn cursor_threads_offsets_and_stops_on_failure() {
        let mut w = BitWriter::new();
        w.push(3, 5).push(9, 300).push(1, 1);
        let bytes = w.finish();

        let mut cursor = BitCursor::new(&bytes);
        assert_eq!(cursor.read(3).unwrap(), 5);
        assert_eq!(cursor.read_if(false, 9).unwrap(), None);
        assert_eq!(cursor.read_if(true, 9).unwrap(), Some(300));
        assert!(cursor.read_flag().unwrap());
        assert_eq!(cursor.position(), 13);
        assert_eq!(cursor.remaining(), 3);
        assert!(cursor.read(4).is_err());
        assert_eq!(cursor.position(), 13);
        cursor.skip(3).unwrap();
        assert_eq!(cursor.remaining(), 0);
    }
}
