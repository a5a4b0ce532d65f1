//! Stream helpers: copying with progress, charset-aware reads and writes, hex dumps and
//! JSON-lines object streams.

use crate::error::{IoError, IoErrorExt};
use crate::stream::FastOutputStream;
use satchel_text::Charset;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::{BufRead, Cursor, ErrorKind, Read, Write};
use tracing::{trace, warn};

pub use satchel_domain::constants::DEFAULT_BUFFER_SIZE;
pub const DEFAULT_MIDDLE_BUFFER_SIZE: usize = 16_384;
pub const DEFAULT_LARGE_BUFFER_SIZE: usize = 32_768;

/// Observer for [`copy_with`].
pub trait StreamProgress {
    fn start(&mut self);

    /// Called after every chunk with the running byte total.
    fn progress(&mut self, total: u64);

    fn finish(&mut self);
}

/// Copies `reader` into `writer` with the default buffer size.
///
/// # Errors
/// Returns [`IoError::Io`] when either side fails.
pub fn copy<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
) -> Result<u64, IoError> {
    copy_with(reader, writer, DEFAULT_BUFFER_SIZE, None)
}

/// Copies `reader` into `writer`, flushing after every chunk. A `buffer_size` of zero means
/// [`DEFAULT_BUFFER_SIZE`].
///
/// # Errors
/// Returns [`IoError::Io`] when either side fails.
pub fn copy_with<R: Read + ?Sized, W: Write + ?Sized>(
    reader: &mut R,
    writer: &mut W,
    buffer_size: usize,
    mut progress: Option<&mut dyn StreamProgress>,
) -> Result<u64, IoError> {
    let size = if buffer_size == 0 { DEFAULT_BUFFER_SIZE } else { buffer_size };
    let mut buf = vec![0_u8; size];
    let mut total = 0_u64;

    if let Some(p) = progress.as_deref_mut() {
        p.start();
    }
    loop {
        let read = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("Failed to read source stream"),
        };
        writer.write_all(&buf[..read]).context("Failed to write target stream")?;
        writer.flush().context("Failed to flush target stream")?;
        total += read as u64;
        if let Some(p) = progress.as_deref_mut() {
            p.progress(total);
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    trace!(total, "Stream copied");
    Ok(total)
}

/// Decodes the whole of `read` with `charset` and hands it back as a UTF-8 line reader.
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn get_reader<R: Read>(read: R, charset: Charset) -> Result<impl BufRead, IoError> {
    let text = self::read(read, charset)?;
    Ok(Cursor::new(text.into_bytes()))
}

/// Reads everything and decodes it with `charset`.
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read<R: Read>(read: R, charset: Charset) -> Result<String, IoError> {
    Ok(charset.decode(&read_bytes(read)?))
}

/// Drains `read` into a [`FastOutputStream`].
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_to_buffer<R: Read>(mut read: R) -> Result<FastOutputStream, IoError> {
    let mut out = FastOutputStream::new();
    copy(&mut read, &mut out)?;
    Ok(out)
}

/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_bytes<R: Read>(mut read: R) -> Result<Vec<u8>, IoError> {
    let mut bytes = Vec::new();
    read.read_to_end(&mut bytes).context("Failed to read stream")?;
    Ok(bytes)
}

/// Reads up to `length` bytes; a shorter stream yields fewer bytes.
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_bytes_exact<R: Read>(read: R, length: usize) -> Result<Vec<u8>, IoError> {
    let mut bytes = Vec::with_capacity(length.min(DEFAULT_LARGE_BUFFER_SIZE));
    read.take(length as u64).read_to_end(&mut bytes).context("Failed to read stream")?;
    Ok(bytes)
}

/// Hex dump of the first `length` bytes.
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_hex<R: Read>(read: R, length: usize, to_lower: bool) -> Result<String, IoError> {
    let bytes = read_bytes_exact(read, length)?;
    Ok(if to_lower { hex::encode(bytes) } else { hex::encode_upper(bytes) })
}

/// Upper-case hex of the first 28 bytes, enough to sniff most file signatures.
///
/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_hex28_upper<R: Read>(read: R) -> Result<String, IoError> {
    read_hex(read, 28, false)
}

/// # Errors
/// Returns [`IoError::Io`] when reading fails.
pub fn read_hex28_lower<R: Read>(read: R) -> Result<String, IoError> {
    read_hex(read, 28, true)
}

#[must_use]
pub fn to_stream(content: &str, charset: Charset) -> Cursor<Vec<u8>> {
    Cursor::new(charset.encode(content))
}

#[must_use]
pub fn to_utf8_stream(content: &str) -> Cursor<Vec<u8>> {
    to_stream(content, Charset::Utf8)
}

/// Writes `content` and flushes. With `close` the writer is dropped afterwards; pass
/// `&mut writer` to keep using it.
///
/// # Errors
/// Returns [`IoError::Io`] when the write fails.
pub fn write<W: Write>(mut out: W, close: bool, content: &[u8]) -> Result<(), IoError> {
    out.write_all(content).context("Failed to write stream")?;
    finish_write(out, close)
}

/// Writes each part encoded with `charset`, without separators.
///
/// # Errors
/// Returns [`IoError::Io`] when the write fails.
pub fn write_str<W: Write>(
    mut out: W,
    charset: Charset,
    close: bool,
    contents: &[&str],
) -> Result<(), IoError> {
    for part in contents {
        out.write_all(&charset.encode(part)).context("Failed to write stream")?;
    }
    finish_write(out, close)
}

/// # Errors
/// Returns [`IoError::Io`] when the write fails.
pub fn write_utf8<W: Write>(out: W, close: bool, contents: &[&str]) -> Result<(), IoError> {
    write_str(out, Charset::Utf8, close, contents)
}

/// Serializes every object as one JSON document per line.
///
/// # Errors
/// Returns [`IoError::Json`] on serialization failure and [`IoError::Io`] on write failure.
pub fn write_objects<W: Write, T: Serialize>(
    mut out: W,
    close: bool,
    objects: &[T],
) -> Result<(), IoError> {
    for object in objects {
        serde_json::to_writer(&mut out, object).context("Failed to serialize object")?;
        out.write_all(b"\n").context("Failed to write stream")?;
    }
    finish_write(out, close)
}

/// Reads every JSON document from `read`, whitespace separated.
///
/// # Errors
/// Returns [`IoError::Json`] when a document is malformed or has the wrong shape.
pub fn read_objects<R: Read, T: DeserializeOwned>(read: R) -> Result<Vec<T>, IoError> {
    serde_json::Deserializer::from_reader(read)
        .into_iter::<T>()
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read object stream")
}

fn finish_write<W: Write>(mut out: W, close: bool) -> Result<(), IoError> {
    out.flush().context("Failed to flush stream")?;
    if close {
        self::close(out);
    }
    Ok(())
}

/// Flushes, logging instead of failing.
pub fn flush<W: Write + ?Sized>(out: &mut W) {
    if let Err(e) = out.flush() {
        warn!(error = %e, "Failed to flush stream");
    }
}

/// Flushes and drops `out`, logging instead of failing.
pub fn close<W: Write>(mut out: W) {
    flush(&mut out);
    drop(out);
}

/// `true` when `read` is at its end. Consumes nothing otherwise.
///
/// # Errors
/// Returns [`IoError::Io`] when the underlying reader fails.
pub fn is_eof<R: BufRead + ?Sized>(read: &mut R) -> Result<bool, IoError> {
    loop {
        match read.fill_buf() {
            Ok(buf) => return Ok(buf.is_empty()),
            Err(e) if e.kind() == ErrorKind::Interrupted => {},
            Err(e) => return Err(e).context("Failed to peek stream"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl StreamProgress for Recorder {
        fn start(&mut self) {
            self.events.push("start".into());
        }

        fn progress(&mut self, total: u64) {
            self.events.push(total.to_string());
        }

        fn finish(&mut self) {
            self.events.push("finish".into());
        }
    }

    #[test]
    fn test_copy_reports_progress() {
        let mut source = Cursor::new(vec![1_u8; 10]);
        let mut sink = Vec::new();
        let mut recorder = Recorder::default();

        let total = copy_with(&mut source, &mut sink, 4, Some(&mut recorder)).unwrap();

        assert_eq!(total, 10);
        assert_eq!(sink, vec![1_u8; 10]);
        assert_eq!(recorder.events, ["start", "4", "8", "10", "finish"]);
    }

    #[test]
    fn test_copy_zero_buffer_uses_default() {
        let mut source = Cursor::new(b"abc".to_vec());
        let mut sink = Vec::new();
        assert_eq!(copy_with(&mut source, &mut sink, 0, None).unwrap(), 3);
        assert_eq!(sink, b"abc");
    }

    #[test]
    fn test_read_with_charset() {
        let source = to_stream("añb", Charset::Iso8859_1);
        assert_eq!(read(source, Charset::Iso8859_1).unwrap(), "añb");

        let lines: Vec<String> = get_reader(to_utf8_stream("one\ntwo\n"), Charset::Utf8)
            .unwrap()
            .lines()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, ["one", "two"]);
    }

    #[test]
    fn test_read_bytes_exact_stops_at_eof() {
        assert_eq!(read_bytes_exact(Cursor::new(b"abcdef"), 4).unwrap(), b"abcd");
        assert_eq!(read_bytes_exact(Cursor::new(b"ab"), 4).unwrap(), b"ab");
        assert!(read_bytes_exact(Cursor::new(b"ab"), 0).unwrap().is_empty());
    }

    #[test]
    fn test_read_hex() {
        let png = [0x89_u8, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(read_hex(Cursor::new(png), 4, false).unwrap(), "89504E47");
        assert_eq!(read_hex(Cursor::new(png), 4, true).unwrap(), "89504e47");
        assert_eq!(read_hex28_upper(Cursor::new(png)).unwrap(), "89504E470D0A1A0A");
        assert_eq!(read_hex28_lower(Cursor::new(png)).unwrap(), "89504e470d0a1a0a");
    }

    #[test]
    fn test_read_to_buffer() {
        let buffered = read_to_buffer(to_utf8_stream("buffered")).unwrap();
        assert_eq!(buffered.to_string(), "buffered");
    }

    #[test]
    fn test_write_keeps_borrowed_writer() {
        let mut sink = Vec::new();
        write(&mut sink, false, b"ab").unwrap();
        write_utf8(&mut sink, true, &["c", "d"]).unwrap();
        write_str(&mut sink, Charset::Utf16Be, false, &["e"]).unwrap();
        assert_eq!(sink, b"abcd\0e");
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_object_stream() {
        let points = [Point { x: 1, y: 2 }, Point { x: -3, y: 4 }];
        let mut sink = Vec::new();
        write_objects(&mut sink, false, &points).unwrap();
        assert_eq!(String::from_utf8_lossy(&sink), "{\"x\":1,\"y\":2}\n{\"x\":-3,\"y\":4}\n");

        let back: Vec<Point> = read_objects(Cursor::new(sink)).unwrap();
        assert_eq!(back, points);
    }

    #[test]
    fn test_read_objects_rejects_garbage() {
        let err = read_objects::<_, Point>(Cursor::new(b"{\"x\":1,\"y\":2} nope")).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
    }

    #[test]
    fn test_is_eof() {
        let mut cursor = Cursor::new(b"x".to_vec());
        assert!(!is_eof(&mut cursor).unwrap());
        let mut byte = [0_u8; 1];
        cursor.read_exact(&mut byte).unwrap();
        assert!(is_eof(&mut cursor).unwrap());
    }
}
