use bytes::Bytes;
use micro_filter::buffer::Chunk;
use micro_filter::fake::{FakeBodyBuffer, FakeHttpFilter};

#[derive(Debug, Copy, Clone)]
pub struct TestCase {
    name: &'static str,
    group: TestGroup,
    layout: BodyLayout,
}

impl TestCase {
    pub fn new(name: &'static str, group: TestGroup, layout: BodyLayout) -> Self {
        Self { name, group, layout }
    }

    pub fn small(name: &'static str, layout: BodyLayout) -> Self {
        Self::new(name, TestGroup::Small, layout)
    }

    pub fn normal(name: &'static str, layout: BodyLayout) -> Self {
        Self::new(name, TestGroup::Normal, layout)
    }

    pub fn large(name: &'static str, layout: BodyLayout) -> Self {
        Self::new(name, TestGroup::Large, layout)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn group(&self) -> TestGroup {
        self.group
    }

    pub fn layout(&self) -> &BodyLayout {
        &self.layout
    }
}

/// Shape of the buffered and received request bodies a benchmark reads.
#[derive(Debug, Copy, Clone)]
pub struct BodyLayout {
    chunk_size: usize,
    buffered_chunks: usize,
    received_chunks: usize,
    aliased: bool,
}

impl BodyLayout {
    /// Buffered and received bodies backed by different storage.
    pub const fn split(chunk_size: usize, buffered_chunks: usize, received_chunks: usize) -> Self {
        Self { chunk_size, buffered_chunks, received_chunks, aliased: false }
    }

    /// The received body is the buffered body handed out again.
    pub const fn aliased(chunk_size: usize, chunks: usize) -> Self {
        Self { chunk_size, buffered_chunks: chunks, received_chunks: chunks, aliased: true }
    }

    /// Number of bytes the reassembled body holds.
    pub fn body_size(&self) -> u64 {
        let chunks = if self.aliased { self.buffered_chunks } else { self.buffered_chunks + self.received_chunks };
        (chunks * self.chunk_size) as u64
    }

    pub fn build_filter(&self) -> FakeHttpFilter {
        let buffered = self.build_buffer(self.buffered_chunks);
        let received = if self.aliased { buffered.clone() } else { self.build_buffer(self.received_chunks) };
        FakeHttpFilter::with_request_body(Some(buffered), Some(received))
    }

    fn build_buffer(&self, chunks: usize) -> FakeBodyBuffer {
        let data = Bytes::from(vec![b'x'; self.chunk_size]);
        FakeBodyBuffer::from_chunks((0..chunks).map(|_| Chunk::new(data.clone())))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestGroup {
    Small,
    Normal,
    Large,
}

impl TestGroup {
    pub const ALL: [TestGroup; 3] = [TestGroup::Small, TestGroup::Normal, TestGroup::Large];

    pub fn name(&self) -> &'static str {
        match self {
            TestGroup::Small => "small",
            TestGroup::Normal => "normal",
            TestGroup::Large => "large",
        }
    }

    /// Criterion sample size, large bodies get fewer samples.
    pub fn sample_size(&self) -> usize {
        match self {
            TestGroup::Small | TestGroup::Normal => 100,
            TestGroup::Large => 20,
        }
    }
}
