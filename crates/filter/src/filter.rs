//! The view a filter has of the host stream it runs on.

use crate::buffer::BodyBuffer;

/// Accessors the host exposes to an HTTP filter for the bodies of the current stream.
///
/// For each direction the host keeps two bodies:
///
/// - the *buffered* body: everything a previous pass asked the host to hold on to;
/// - the *received* body: the data delivered to the current callback.
///
/// Either may be absent. When an earlier filter stopped iteration and buffered, the host may
/// later replay the buffered body as the received one, so both accessors can return chunks
/// backed by the same storage.
#[cfg_attr(test, mockall::automock(type Buffer = crate::fake::FakeBodyBuffer;))]
pub trait HttpFilterHandle {
    type Buffer: BodyBuffer;

    fn buffered_request_body(&mut self) -> Option<Self::Buffer>;

    fn received_request_body(&mut self) -> Option<Self::Buffer>;

    fn buffered_response_body(&mut self) -> Option<Self::Buffer>;

    fn received_response_body(&mut self) -> Option<Self::Buffer>;
}
