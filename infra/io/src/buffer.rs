use crate::error::IoError;

/// Growable byte buffer built from fixed-size chunks.
///
/// Appending never moves bytes already written: when the current chunk is full a new one is
/// allocated, sized `max(min_chunk_len, bytes still to place)`. Every chunk before the current
/// one is completely filled.
#[derive(Debug, Clone, Default)]
pub struct FastByteBuffer {
    chunks: Vec<Vec<u8>>,
    offset: usize,
    size: usize,
    min_chunk_len: usize,
}

impl FastByteBuffer {
    /// A buffer whose chunks hold at least `size.unsigned_abs()` bytes.
    #[must_use]
    pub const fn new(size: i32) -> Self {
        Self { chunks: Vec::new(), offset: 0, size: 0, min_chunk_len: size.unsigned_abs() as usize }
    }

    fn need_new_chunk(&mut self, new_size: usize) {
        let len = self.min_chunk_len.max(new_size - self.size);
        self.chunks.push(vec![0; len]);
        self.offset = 0;
    }

    /// Appends `len` bytes of `array` starting at `off`.
    ///
    /// # Errors
    /// Returns [`IoError::IndexOutOfBounds`] when the range falls outside `array`.
    pub fn append_range(
        &mut self,
        array: &[u8],
        off: usize,
        len: usize,
    ) -> Result<&mut Self, IoError> {
        let end = off.checked_add(len).filter(|end| *end <= array.len()).ok_or_else(|| {
            IoError::IndexOutOfBounds {
                message: format!("range {off}+{len} exceeds length {}", array.len()).into(),
                context: None,
            }
        })?;
        Ok(self.append(&array[off..end]))
    }

    pub fn append(&mut self, mut data: &[u8]) -> &mut Self {
        if data.is_empty() {
            return self;
        }
        let new_size = self.size + data.len();
        if let Some(chunk) = self.chunks.last_mut() {
            let part = data.len().min(chunk.len() - self.offset);
            chunk[self.offset..self.offset + part].copy_from_slice(&data[..part]);
            data = &data[part..];
            self.offset += part;
            self.size += part;
        }
        if !data.is_empty() {
            self.need_new_chunk(new_size);
            if let Some(chunk) = self.chunks.last_mut() {
                chunk[..data.len()].copy_from_slice(data);
                self.offset = data.len();
                self.size += data.len();
            }
        }
        self
    }

    pub fn append_byte(&mut self, byte: u8) -> &mut Self {
        let full = self.chunks.last().is_none_or(|chunk| self.offset == chunk.len());
        if full {
            self.need_new_chunk(self.size + 1);
        }
        if let Some(chunk) = self.chunks.last_mut() {
            chunk[self.offset] = byte;
            self.offset += 1;
            self.size += 1;
        }
        self
    }

    /// Total number of bytes written.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Index of the chunk currently written to; `None` before the first write.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        self.chunks.len().checked_sub(1)
    }

    /// Write position inside the current chunk.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// The whole chunk at `index`, unused tail included.
    #[must_use]
    pub fn array(&self, index: usize) -> Option<&[u8]> {
        self.chunks.get(index).map(Vec::as_slice)
    }

    /// Filled part of every chunk, in order.
    pub fn chunks(&self) -> impl Iterator<Item = &[u8]> {
        let last = self.chunks.len().saturating_sub(1);
        self.chunks
            .iter()
            .enumerate()
            .map(move |(i, chunk)| if i == last { &chunk[..self.offset] } else { chunk.as_slice() })
    }

    pub fn reset(&mut self) {
        self.chunks.clear();
        self.offset = 0;
        self.size = 0;
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size);
        for chunk in self.chunks() {
            out.extend_from_slice(chunk);
        }
        out
    }
}
