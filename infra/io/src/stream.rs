use crate::buffer::FastByteBuffer;
use crate::error::{IoError, IoErrorExt};
use satchel_text::Charset;
use std::fmt;
use std::io::{self, Write};

const DEFAULT_SIZE: i32 = 1024;

/// In-memory sink backed by a [`FastByteBuffer`], so growing never copies earlier output.
#[derive(Debug, Clone)]
pub struct FastOutputStream {
    buffer: FastByteBuffer,
}

impl Default for FastOutputStream {
    fn default() -> Self {
        Self::new()
    }
}

impl FastOutputStream {
    #[must_use]
    pub const fn new() -> Self {
        Self::with_size(DEFAULT_SIZE)
    }

    /// `size` is the minimum chunk length of the underlying buffer.
    #[must_use]
    pub const fn with_size(size: i32) -> Self {
        Self { buffer: FastByteBuffer::new(size) }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.buffer.size()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn reset(&mut self) {
        self.buffer.reset();
    }

    /// Copies everything written so far into `out`.
    ///
    /// # Errors
    /// Returns [`IoError::Io`] when `out` fails.
    pub fn write_to(&self, out: &mut impl Write) -> Result<(), IoError> {
        for chunk in self.buffer.chunks() {
            out.write_all(chunk).context("Failed to drain buffered output")?;
        }
        Ok(())
    }

    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_vec()
    }

    #[must_use]
    pub fn to_string_with(&self, charset: Charset) -> String {
        charset.decode(&self.to_bytes())
    }
}

impl Write for FastOutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Lossy UTF-8.
impl fmt::Display for FastOutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_and_render() {
        let mut out = FastOutputStream::with_size(2);
        write!(out, "héllo {}", 42).unwrap();
        assert_eq!(out.to_string(), "héllo 42");
        assert_eq!(out.size(), "héllo 42".len());

        let mut sink = Vec::new();
        out.write_to(&mut sink).unwrap();
        assert_eq!(sink, "héllo 42".as_bytes());
    }

    #[test]
    fn test_charset_rendering() {
        let mut out = FastOutputStream::new();
        out.write_all(&[0x63, 0x61, 0x66, 0xE9]).unwrap();
        assert_eq!(out.to_string_with(Charset::Iso8859_1), "café");
        assert_eq!(out.to_string(), "caf\u{FFFD}");

        out.reset();
        assert!(out.is_empty());
        assert_eq!(out.to_string(), "");
    }
}
