//! Bounded storage for a response body.
//!
//! A [`ResponseBuffer`] is either a caller-supplied region that is never
//! reallocated, or a heap region sized once from the declared content length.
//! All writes go through [`ResponseBuffer::append`], which never lets the byte
//! count exceed the capacity.

use super::error::Error;
use alloc::vec::Vec;

/// Outcome of one [`ResponseBuffer::append`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Append {
    /// Bytes copied into the buffer.
    pub copied: usize,
    /// Bytes dropped because the buffer was full.
    pub truncated: usize,
}

#[derive(Debug)]
enum Storage<'a> {
    Fixed(&'a mut [u8]),
    Dynamic(Option<Vec<u8>>),
}

/// Response body storage for one exchange.
#[derive(Debug)]
pub struct ResponseBuffer<'a> {
    storage: Storage<'a>,
    /// Body bytes the buffer may hold.
    capacity: usize,
    written: usize,
}

impl<'a> ResponseBuffer<'a> {
    /// Use `region` as-is; bytes beyond its length are truncated.
    pub fn fixed(region: &'a mut [u8]) -> Self {
        let capacity = region.len();
        Self {
            storage: Storage::Fixed(region),
            capacity,
            written: 0,
        }
    }

    /// Allocate on demand with [`allocate`](Self::allocate).
    pub fn dynamic() -> Self {
        Self {
            storage: Storage::Dynamic(None),
            capacity: 0,
            written: 0,
        }
    }

    /// The dynamic variant has not allocated yet.
    pub fn needs_allocation(&self) -> bool {
        matches!(self.storage, Storage::Dynamic(None))
    }

    pub fn is_allocated(&self) -> bool {
        matches!(self.storage, Storage::Dynamic(Some(_)))
    }

    /// Reserve `declared + 1` bytes for a body of `declared` bytes.
    ///
    /// A zero length is refused: it means the response carried no usable
    /// `Content-Length`. Calling this on a fixed or already allocated buffer
    /// does nothing.
    pub fn allocate(&mut self, declared: usize) -> Result<(), Error> {
        if !self.needs_allocation() {
            return Ok(());
        }
        if declared == 0 {
            return Err(Error::AllocationFailure);
        }
        let size = declared.checked_add(1).ok_or(Error::AllocationFailure)?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::AllocationFailure)?;

        self.storage = Storage::Dynamic(Some(data));
        self.capacity = declared;
        self.written = 0;
        Ok(())
    }

    /// Size of the live heap allocation, zero when nothing is held.
    pub fn allocated_len(&self) -> usize {
        match &self.storage {
            Storage::Dynamic(Some(_)) => self.capacity + 1,
            _ => 0,
        }
    }

    /// Copy as much of `chunk` as fits.
    ///
    /// An unallocated dynamic buffer has nowhere to put data and reports
    /// [`Error::AllocationFailure`].
    pub fn append(&mut self, chunk: &[u8]) -> Result<Append, Error> {
        let copied = chunk.len().min(self.remaining());
        match &mut self.storage {
            Storage::Fixed(region) => {
                if self.written == 0 {
                    region.fill(0);
                }
                region[self.written..self.written + copied].copy_from_slice(&chunk[..copied]);
            }
            Storage::Dynamic(Some(data)) => data.extend_from_slice(&chunk[..copied]),
            Storage::Dynamic(None) => return Err(Error::AllocationFailure),
        }
        self.written += copied;
        Ok(Append {
            copied,
            truncated: chunk.len() - copied,
        })
    }

    /// Bytes accumulated so far.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.storage {
            Storage::Fixed(region) => &region[..self.written],
            Storage::Dynamic(Some(data)) => data.as_slice(),
            Storage::Dynamic(None) => &[],
        }
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.written
    }

    /// Drop the heap region, if any, and reset accounting.
    ///
    /// Returns `true` only when an allocation was actually freed, so a second
    /// call is a no-op that returns `false`. A fixed region is kept; only its
    /// byte count is reset.
    pub fn release(&mut self) -> bool {
        self.written = 0;
        match &mut self.storage {
            Storage::Fixed(_) => false,
            Storage::Dynamic(data) => {
                self.capacity = 0;
                data.take().is_some()
            }
        }
    }
}
