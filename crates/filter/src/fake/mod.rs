//! In-memory stand-ins for host objects.
//!
//! These types behave like the host's buffers and header maps closely enough to unit test
//! filter logic without a running proxy. They are also what this crate's own tests use.

mod body_buffer;
mod filter;
mod header_map;

pub use body_buffer::FakeBodyBuffer;
pub use filter::FakeHttpFilter;
pub use header_map::FakeHeaderMap;
