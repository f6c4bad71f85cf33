use crate::buffer::Chunk;

/// A body held by the host, exposed to the filter as a list of chunks.
///
/// `chunks` is evaluated on every call and is not cached, but a host must return chunks
/// with the same identity for as long as the underlying memory is unchanged.
pub trait BodyBuffer {
    /// Returns the chunks of the body, in order.
    fn chunks(&self) -> Vec<Chunk>;

    /// Returns the total number of bytes in the body.
    fn size(&self) -> u64;

    /// Removes `min(size, self.size())` bytes from the front of the body.
    fn drain(&mut self, size: u64);

    /// Appends `data` to the end of the body.
    fn append(&mut self, data: &[u8]);
}
