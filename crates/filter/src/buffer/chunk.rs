use std::ops::{Bound, RangeBounds};
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;

static NEXT_STORAGE_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque token naming one backing allocation.
///
/// Two chunks with the same `StorageId` and offset occupy the same memory region, whatever
/// their contents. Ids handed out by [`StorageId::fresh`] are unique within the process.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StorageId(u64);

impl StorageId {
    /// Allocates an id that no other storage in this process has.
    pub fn fresh() -> Self {
        Self(NEXT_STORAGE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wraps a handle the host already uses to name its allocations.
    ///
    /// Raw ids are not checked against ids from [`StorageId::fresh`], so a host should stick
    /// to one scheme for the buffers of a given stream.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

/// An immutable, contiguous run of body bytes together with the identity of its storage.
///
/// Cloning a chunk keeps its identity. [`Chunk::new`] always starts a new storage, so two
/// chunks built from equal bytes are still different chunks.
///
/// `Chunk` has no `PartialEq`: compare identity with [`Chunk::same_storage`] or
/// contents through [`Chunk::as_slice`].
#[derive(Debug, Clone)]
pub struct Chunk {
    storage: StorageId,
    offset: usize,
    data: Bytes,
}

impl Chunk {
    /// Creates a chunk backed by a new storage.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self::with_storage(StorageId::fresh(), 0, data)
    }

    /// Creates a chunk that lives `offset` bytes into an existing storage.
    pub fn with_storage(storage: StorageId, offset: usize, data: impl Into<Bytes>) -> Self {
        Self { storage, offset, data: data.into() }
    }

    #[inline]
    pub fn storage(&self) -> StorageId {
        self.storage
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a sub-chunk of `self` that keeps the same storage.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, like [`Bytes::slice`].
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Self {
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n + 1,
            Bound::Unbounded => 0,
        };

        Self { storage: self.storage, offset: self.offset + start, data: self.data.slice(range) }
    }

    /// Returns true if both chunks start at the same place in the same storage.
    ///
    /// Neither contents nor length are looked at: a chunk and any prefix of it (including an
    /// empty one) compare as the same storage. A host must not hand out a shortened view of
    /// a buffer as the received body and expect the missing tail to be kept.
    #[inline]
    pub fn same_storage(&self, other: &Chunk) -> bool {
        self.storage == other.storage && self.offset == other.offset
    }

    pub fn into_data(self) -> Bytes {
        self.data
    }
}

impl AsRef<[u8]> for Chunk {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = StorageId::fresh();
        let b = StorageId::fresh();
        assert_ne!(a, b);
        assert_eq!(StorageId::from_raw(a.as_raw()), a);
    }

    #[test]
    fn test_clone_keeps_identity() {
        let chunk = Chunk::new(&b"hello world"[..]);
        let cloned = chunk.clone();

        assert!(chunk.same_storage(&cloned));
        assert_eq!(cloned.as_slice(), b"hello world");
    }

    #[test]
    fn test_equal_content_is_not_same_storage() {
        let a = Chunk::new(&b"hello world"[..]);
        let b = Chunk::new(&b"hello world"[..]);

        assert_eq!(a.as_slice(), b.as_slice());
        assert!(!a.same_storage(&b));
    }

    #[test]
    fn test_slice() {
        let chunk = Chunk::new(&b"hello world"[..]);

        let world = chunk.slice(6..);
        assert_eq!(world.as_slice(), b"world");
        assert_eq!(world.storage(), chunk.storage());
        assert_eq!(world.offset(), 6);
        assert!(!world.same_storage(&chunk));

        let head = chunk.slice(..5);
        assert_eq!(head.as_slice(), b"hello");
        assert!(head.same_storage(&chunk));
    }

    #[test]
    fn test_prefix_shares_storage() {
        let chunk = Chunk::new(&b"hello world"[..]);

        assert!(chunk.slice(..0).same_storage(&chunk));
        assert!(chunk.slice(..5).same_storage(&chunk));
        assert!(!chunk.slice(1..5).same_storage(&chunk));
    }

    #[test]
    fn test_with_storage() {
        let storage = StorageId::from_raw(42);
        let a = Chunk::with_storage(storage, 3, Bytes::from_static(b"abc"));
        let b = Chunk::with_storage(storage, 3, Bytes::from_static(b"xyz"));
        let c = Chunk::with_storage(storage, 4, Bytes::from_static(b"abc"));

        assert!(a.same_storage(&b));
        assert!(!a.same_storage(&c));
        assert_eq!(a.len(), 3);
        assert!(!a.is_empty());
        assert_eq!(a.into_data(), Bytes::from_static(b"abc"));
    }
}
