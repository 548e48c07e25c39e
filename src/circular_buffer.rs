use crate::float::Float;

/// Fixed-length delay line with a wrapping write cursor.
///
/// Writes are blended with whatever the slot already holds instead of
/// overwriting it; reads are random access, wrapped modulo the length.
pub struct CircularBuffer<T: Float> {
    buffer: Vec<T>,
    write_pos: usize,
}

impl<T: Float> CircularBuffer<T> {
    /// Zero-filled buffer with `len` slots. `len` must be non-zero.
    pub fn new(len: usize) -> CircularBuffer<T> {
        assert!(len > 0, "circular buffer needs at least one slot");
        CircularBuffer {
            buffer: vec![T::zero(); len],
            write_pos: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Averages `sample` into the slot under the write cursor and advances it.
    pub fn write_blend(&mut self, sample: T) {
        let slot = &mut self.buffer[self.write_pos];
        *slot = (*slot + sample) / (T::one() + T::one());

        if self.write_pos == self.buffer.len() - 1 {
            self.write_pos = 0;
        } else {
            self.write_pos += 1;
        }
    }

    pub fn read(&self, index: usize) -> T {
        self.buffer[index % self.buffer.len()]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }
}
