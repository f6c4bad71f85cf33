use crate::fake::FakeBodyBuffer;
use crate::filter::HttpFilterHandle;

/// A filter handle whose bodies are plain fields.
///
/// Every accessor returns a clone of the field, which shares storage with it, the same way a
/// host returns views over memory it keeps owning.
#[derive(Debug, Clone, Default)]
pub struct FakeHttpFilter {
    pub buffered_request_body: Option<FakeBodyBuffer>,
    pub received_request_body: Option<FakeBodyBuffer>,
    pub buffered_response_body: Option<FakeBodyBuffer>,
    pub received_response_body: Option<FakeBodyBuffer>,
}

impl FakeHttpFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_body(buffered: Option<FakeBodyBuffer>, received: Option<FakeBodyBuffer>) -> Self {
        Self { buffered_request_body: buffered, received_request_body: received, ..Self::default() }
    }

    pub fn with_response_body(buffered: Option<FakeBodyBuffer>, received: Option<FakeBodyBuffer>) -> Self {
        Self { buffered_response_body: buffered, received_response_body: received, ..Self::default() }
    }
}

impl HttpFilterHandle for FakeHttpFilter {
    type Buffer = FakeBodyBuffer;

    fn buffered_request_body(&mut self) -> Option<FakeBodyBuffer> {
        self.buffered_request_body.clone()
    }

    fn received_request_body(&mut self) -> Option<FakeBodyBuffer> {
        self.received_request_body.clone()
    }

    fn buffered_response_body(&mut self) -> Option<FakeBodyBuffer> {
        self.buffered_response_body.clone()
    }

    fn received_response_body(&mut self) -> Option<FakeBodyBuffer> {
        self.received_response_body.clone()
    }
}
