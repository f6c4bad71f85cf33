use std::collections::VecDeque;

use bytes::Bytes;
use tracing::trace;

use crate::buffer::{BodyBuffer, Chunk};

/// A body buffer kept entirely in memory.
///
/// Clones share storage with the original, so `buffer.clone().chunks()` is chunk-for-chunk
/// identical to `buffer.chunks()`. That is how tests model the host returning the buffered
/// body again as the received body.
#[derive(Debug, Clone)]
pub struct FakeBodyBuffer {
    chunks: VecDeque<Chunk>,
}

impl FakeBodyBuffer {
    /// Creates a single-chunk buffer over a new storage.
    ///
    /// The chunk is kept even when `body` is empty, so an empty buffer still has an identity
    /// of its own.
    pub fn new(body: impl Into<Bytes>) -> Self {
        Self { chunks: VecDeque::from([Chunk::new(body)]) }
    }

    pub fn from_chunks(chunks: impl IntoIterator<Item = Chunk>) -> Self {
        Self { chunks: chunks.into_iter().collect() }
    }

    /// Copies the whole body into one contiguous buffer.
    pub fn to_bytes(&self) -> Bytes {
        self.chunks.iter().flat_map(|chunk| chunk.as_slice().iter().copied()).collect()
    }
}

impl BodyBuffer for FakeBodyBuffer {
    fn chunks(&self) -> Vec<Chunk> {
        self.chunks.iter().cloned().collect()
    }

    fn size(&self) -> u64 {
        self.chunks.iter().map(|chunk| chunk.len() as u64).sum()
    }

    fn drain(&mut self, size: u64) {
        let body_size = self.size();
        if size > body_size {
            trace!(requested = size, body_size, "drain exceeds body size, clamped");
        }

        // bounded by the in-memory body size, so it fits in usize
        let mut remaining = usize::try_from(size.min(body_size)).unwrap_or(usize::MAX);
        while remaining > 0 {
            let Some(front) = self.chunks.pop_front() else {
                break;
            };

            if front.len() <= remaining {
                remaining -= front.len();
            } else {
                self.chunks.push_front(front.slice(remaining..));
                remaining = 0;
            }
        }
    }

    fn append(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.chunks.push_back(Chunk::new(Bytes::copy_from_slice(data)));
    }
}
