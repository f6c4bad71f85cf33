//! Whole-body reassembly for HTTP filters.
//!
//! A filter that needs the complete body of a request or response sees it in two places at
//! the end of the stream:
//!
//! - the **buffered** body, holding everything the host kept from earlier callbacks;
//! - the **received** body, holding what was delivered to the current callback.
//!
//! The full body is normally `buffered ++ received`. There is one catch: when an earlier
//! filter in the chain stopped iteration and asked the host to buffer, the host later calls
//! this filter again with the buffered body passed as the received body. The two sources
//! then point at the very same chunks, and naive concatenation would return every byte
//! twice.
//!
//! # Identity, not content
//!
//! Whether the two sources are "the same" is decided by [`is_same_chunks`], which compares
//! the *storage* of each chunk ([`Chunk::same_storage`](crate::buffer::Chunk::same_storage)),
//! never its bytes. A client may legitimately send the same payload twice, and that must
//! not be mistaken for aliasing.
//!
//! # Entry points
//!
//! - [`read_whole_request_body`] / [`read_whole_response_body`] read from an
//!   [`HttpFilterHandle`](crate::filter::HttpFilterHandle);
//! - [`read_whole_body`] works on any pair of optional [`BodyBuffer`](crate::buffer::BodyBuffer)s.
//!
//! Calling them before the end of the stream (`end_of_stream` set in the body callback, or
//! the trailers callback) returns the body seen so far, without any error.

mod reassemble;

pub use reassemble::is_same_chunks;
pub use reassemble::read_whole_body;
pub use reassemble::read_whole_request_body;
pub use reassemble::read_whole_response_body;
