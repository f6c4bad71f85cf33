use bytes::{BufMut, Bytes, BytesMut};
use tracing::trace;

use crate::buffer::{BodyBuffer, Chunk};
use crate::filter::HttpFilterHandle;

/// Returns true if both chunk lists have the same length and each pair of chunks at the same
/// index shares storage.
///
/// Two empty lists are the same; a strict prefix never is.
pub fn is_same_chunks(a: &[Chunk], b: &[Chunk]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.same_storage(b))
}

/// Concatenates the buffered and the received body, skipping the received body when it
/// shares storage with the buffered one.
///
/// Absent sources contribute nothing, so `read_whole_body(None, None)` is empty. The result
/// holds the buffered bytes first, then the received bytes.
pub fn read_whole_body<B>(buffered: Option<&B>, received: Option<&B>) -> Bytes
where
    B: BodyBuffer + ?Sized,
{
    let size_hint = buffered.map_or(0, B::size).saturating_add(received.map_or(0, B::size));

    let mut chunks = buffered.map(B::chunks).unwrap_or_default();

    if let Some(received) = received {
        let received_chunks = received.chunks();
        if buffered.is_some() && is_same_chunks(&chunks, &received_chunks) {
            trace!(chunks = received_chunks.len(), "received body shares storage with buffered body, skip it");
        } else {
            chunks.extend(received_chunks);
        }
    }

    concat(chunks, size_hint)
}

/// Reads the whole request body by combining the buffered body and the latest received body.
///
/// Call this once the end of the request has been seen: `end_of_stream` is true in the
/// request body callback, or the request trailers callback is running.
pub fn read_whole_request_body<H: HttpFilterHandle>(handle: &mut H) -> Bytes {
    let buffered = handle.buffered_request_body();
    let received = handle.received_request_body();
    read_whole_body(buffered.as_ref(), received.as_ref())
}

/// Reads the whole response body by combining the buffered body and the latest received body.
///
/// Call this once the end of the response has been seen: `end_of_stream` is true in the
/// response body callback, or the response trailers callback is running.
pub fn read_whole_response_body<H: HttpFilterHandle>(handle: &mut H) -> Bytes {
    let buffered = handle.buffered_response_body();
    let received = handle.received_response_body();
    read_whole_body(buffered.as_ref(), received.as_ref())
}

fn concat(chunks: Vec<Chunk>, size_hint: u64) -> Bytes {
    // a single chunk is immutable and reference counted, hand it out without copying
    let chunks = match <[Chunk; 1]>::try_from(chunks) {
        Ok([chunk]) => return chunk.into_data(),
        Err(chunks) => chunks,
    };

    // reported sizes are only a hint, never allocate beyond what the chunks hold
    let chunks_size: usize = chunks.iter().map(Chunk::len).sum();
    let capacity = usize::try_from(size_hint).map_or(chunks_size, |hint| hint.min(chunks_size));

    let mut body = BytesMut::with_capacity(capacity);
    for chunk in &chunks {
        body.put_slice(chunk.as_slice());
    }

    trace!(size = body.len(), chunks = chunks.len(), "reassembled body");
    body.freeze()
}
