//! Structured binary I/O.
//!
//! All integers are big-endian. The writer streams into any [`Write`]; the reader works
//! over a byte slice that is already in memory, so it always knows how many bytes
//! remain and can reject impossible counts before acting on them.

use std::io::{Cursor, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{IndexError, Result};

/// A structured writer for binary data.
pub struct StructWriter<W: Write> {
    writer: W,
    position: u64,
}

impl<W: Write> StructWriter<W> {
    /// Create a new structured writer.
    pub fn new(writer: W) -> Self {
        StructWriter {
            writer,
            position: 0,
        }
    }

    /// Write a u8 value.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.writer.write_u8(value)?;
        self.position += 1;
        Ok(())
    }

    /// Write a u16 value (big-endian).
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.writer.write_u16::<BigEndian>(value)?;
        self.position += 2;
        Ok(())
    }

    /// Write an i32 value (big-endian).
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.writer.write_i32::<BigEndian>(value)?;
        self.position += 4;
        Ok(())
    }

    /// Write raw bytes without length prefix.
    pub fn write_raw(&mut self, value: &[u8]) -> Result<()> {
        self.writer.write_all(value)?;
        self.position += value.len() as u64;
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Flush and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// A structured reader over an in-memory byte slice.
pub struct StructReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> StructReader<'a> {
    /// Create a new structured reader.
    pub fn new(bytes: &'a [u8]) -> Self {
        StructReader {
            cursor: Cursor::new(bytes),
        }
    }

    /// Read a u8 value.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.cursor.read_u8().map_err(IndexError::from_decode)
    }

    /// Read a u16 value (big-endian).
    pub fn read_u16(&mut self) -> Result<u16> {
        self.cursor
            .read_u16::<BigEndian>()
            .map_err(IndexError::from_decode)
    }

    /// Read an i32 value (big-endian).
    pub fn read_i32(&mut self) -> Result<i32> {
        self.cursor
            .read_i32::<BigEndian>()
            .map_err(IndexError::from_decode)
    }

    /// Read `len` consecutive u16 values (big-endian).
    pub fn read_u16_vec(&mut self, len: usize) -> Result<Vec<u16>> {
        let needed = len.saturating_mul(2);
        if needed > self.remaining() {
            return Err(IndexError::format(format!(
                "truncated container: need {needed} bytes at offset {}, {} left",
                self.position(),
                self.remaining()
            )));
        }
        (0..len).map(|_| self.read_u16()).collect()
    }

    /// Borrow the next `len` bytes.
    pub fn read_raw(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(IndexError::format(format!(
                "truncated container: need {len} bytes at offset {}, {} left",
                self.position(),
                self.remaining()
            )));
        }
        let start = self.position() as usize;
        let bytes: &'a [u8] = *self.cursor.get_ref();
        self.cursor.set_position((start + len) as u64);
        Ok(&bytes[start..start + len])
    }

    /// Current offset from the start of the slice.
    pub fn position(&self) -> u64 {
        self.cursor.position()
    }

    /// Number of unread bytes.
    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position() as usize)
    }

    /// Whether every byte has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.remaining() == 0
    }
}
