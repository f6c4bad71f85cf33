//! Building blocks for HTTP filters running as dynamic modules inside a proxy.
//!
//! The proxy (the *host*) owns the request and response bodies and exposes them to the filter
//! as lists of chunks. This crate provides the filter-side view of that memory and the one
//! piece of logic every body-inspecting filter needs: putting the whole body back together
//! at the end of the stream.
//!
//! # Example
//!
//! ```
//! use micro_filter::body::read_whole_request_body;
//! use micro_filter::fake::{FakeBodyBuffer, FakeHttpFilter};
//!
//! // the host kept "hello " from an earlier callback and now delivers "world"
//! let mut filter = FakeHttpFilter::with_request_body(
//!     Some(FakeBodyBuffer::new("hello ")),
//!     Some(FakeBodyBuffer::new("world")),
//! );
//!
//! let body = read_whole_request_body(&mut filter);
//! assert_eq!(&body[..], b"hello world");
//! ```
//!
//! # Architecture
//!
//! - [`buffer`]: [`Chunk`](buffer::Chunk), [`StorageId`](buffer::StorageId) and the
//!   [`BodyBuffer`](buffer::BodyBuffer) trait a host implements for its body buffers
//! - [`filter`]: the [`HttpFilterHandle`](filter::HttpFilterHandle) trait giving access to the
//!   buffered and received bodies of a stream
//! - [`body`]: whole-body reassembly with de-duplication of aliased buffers
//! - [`header`]: the [`HeaderAccess`](header::HeaderAccess) trait for header maps
//! - [`fake`]: in-memory implementations of the host traits, for tests
//!
//! # Error Handling
//!
//! Reading bodies never fails: a missing buffer is an empty one. The only fallible
//! operations are header mutations, which return [`HeaderError`] when the name or the value
//! is not valid HTTP.
//!
//! # Logging
//!
//! The crate emits `tracing` events at `trace` level and never installs a subscriber.

pub mod body;
pub mod buffer;
pub mod fake;
pub mod filter;
pub mod header;

mod error;
pub use error::HeaderError;
