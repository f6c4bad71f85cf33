//! Body buffer abstractions shared between the host and filter code.
//!
//! The host owns every byte of a request or response body. It hands the filter a view of
//! that memory as an ordered list of [`Chunk`]s through the [`BodyBuffer`] trait. Each chunk
//! carries, next to its bytes, the identity of the storage backing it: a [`StorageId`] plus
//! the offset of the chunk inside that storage.
//!
//! Identity is what lets the body reassembler tell "the host gave me the same buffer twice"
//! apart from "two buffers happen to hold equal bytes". See [`crate::body`].

mod body_buffer;
mod chunk;

pub use body_buffer::BodyBuffer;
pub use chunk::Chunk;
pub use chunk::StorageId;
