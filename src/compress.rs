//! Page content-stream compression
//!
//! Shrinks the drawing operators of a page by flate-encoding its content
//! streams. A page split over several content streams is first merged into a
//! single stream, the same way a PDF writer would normalize it. Fonts, images
//! and other resources are not touched.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

use crate::config::defaults::CONTENT_SEPARATOR;
use crate::config::Settings;
use crate::error::OptimizeError;

/// What happened to one page's content streams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCompression {
    /// Number of content streams the page had
    pub streams: usize,
    /// Streams that ended up flate-encoded by this pass
    pub encoded: usize,
    /// Whether multiple streams were merged into one
    pub merged: bool,
    /// Merging was wanted but a stream could not be decoded
    pub merge_skipped: bool,
    /// Stored content bytes before the pass
    pub bytes_before: usize,
    /// Stored content bytes after the pass
    pub bytes_after: usize,
}

/// Compress the content streams of every page, in page order
pub fn compress_document(
    doc: &mut Document,
    settings: &Settings,
) -> Result<Vec<PageCompression>, OptimizeError> {
    let pages: Vec<(u32, ObjectId)> = doc.get_pages().into_iter().collect();
    let mut outcomes = Vec::with_capacity(pages.len());

    for (number, page_id) in pages {
        let outcome = compress_page_content(doc, page_id, settings)
            .map_err(|source| OptimizeError::Compression {
                page: number,
                source,
            })?;
        if outcome.merge_skipped {
            log::warn!(
                "Page {} has content streams with unsupported filters, compressing individually",
                number
            );
        }
        log::debug!(
            "Page {}: {} stream(s), {} -> {} bytes{}",
            number,
            outcome.streams,
            outcome.bytes_before,
            outcome.bytes_after,
            if outcome.merged { ", merged" } else { "" }
        );
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Compress the content streams of a single page in place
pub fn compress_page_content(
    doc: &mut Document,
    page_id: ObjectId,
    settings: &Settings,
) -> lopdf::Result<PageCompression> {
    let content_ids = doc.get_page_contents(page_id);
    let level = settings.flate_level();

    let mut outcome = PageCompression {
        streams: content_ids.len(),
        ..Default::default()
    };
    if content_ids.is_empty() {
        return Ok(outcome);
    }

    for id in &content_ids {
        outcome.bytes_before += doc.get_object(*id)?.as_stream()?.content.len();
    }

    if settings.merge_streams && content_ids.len() > 1 {
        match decode_all(doc, &content_ids) {
            Some(plain) => {
                let merged = encoded_stream(plain, level)?;
                outcome.encoded = usize::from(merged.dict.has(b"Filter"));
                outcome.bytes_after = merged.content.len();
                outcome.merged = true;

                let merged_id = doc.add_object(merged);
                doc.get_object_mut(page_id)?
                    .as_dict_mut()?
                    .set("Contents", Object::Reference(merged_id));
                return Ok(outcome);
            }
            None => outcome.merge_skipped = true,
        }
    }

    for id in &content_ids {
        let stream = doc.get_object_mut(*id)?.as_stream_mut()?;
        if recode_in_place(stream, level)? {
            outcome.encoded += 1;
        }
        outcome.bytes_after += stream.content.len();
    }

    Ok(outcome)
}

/// Decoded bytes of every stream joined by the separator, or `None` if any
/// stream uses a filter that cannot be decoded.
fn decode_all(doc: &Document, ids: &[ObjectId]) -> Option<Vec<u8>> {
    let mut joined = Vec::new();
    for (i, id) in ids.iter().enumerate() {
        let stream = doc.get_object(*id).and_then(Object::as_stream).ok()?;
        let plain = if stream.dict.has(b"Filter") {
            stream.decompressed_content().ok()?
        } else {
            stream.content.clone()
        };
        if i > 0 {
            joined.extend_from_slice(CONTENT_SEPARATOR);
        }
        joined.extend_from_slice(&plain);
    }
    Some(joined)
}

/// Build a new content stream holding `plain`, flate-encoded when that is smaller
fn encoded_stream(plain: Vec<u8>, level: Compression) -> lopdf::Result<Stream> {
    let mut stream = Stream::new(Dictionary::new(), plain);
    encode_in_place(&mut stream, level)?;
    Ok(stream)
}

/// Re-encode one stream as Flate.
///
/// Unfiltered streams are encoded directly. Streams under other filters are
/// decoded first; those already Flate-only, or using a filter that cannot be
/// decoded, are kept as they are. Returns true if the stream ends up
/// Flate-encoded by this pass.
fn recode_in_place(stream: &mut Stream, level: Compression) -> lopdf::Result<bool> {
    if !stream.allows_compression || !stream.dict.has(b"Filter") {
        return encode_in_place(stream, level);
    }

    let flate_only = stream
        .filters()
        .map(|f| f.len() == 1 && f[0] == b"FlateDecode")
        .unwrap_or(false);
    if flate_only {
        return Ok(false);
    }

    match stream.decompressed_content() {
        Ok(plain) => {
            stream.set_plain_content(plain);
            encode_in_place(stream, level)
        }
        Err(_) => Ok(false),
    }
}

/// Flate-encode an unfiltered stream. Returns true if the stream was rewritten.
///
/// The filter is only applied when the encoded bytes are smaller.
fn encode_in_place(stream: &mut Stream, level: Compression) -> lopdf::Result<bool> {
    if !stream.allows_compression || stream.dict.has(b"Filter") {
        return Ok(false);
    }

    let encoded = deflate(&stream.content, level)?;
    if encoded.len() >= stream.content.len() {
        return Ok(false);
    }

    stream
        .dict
        .set("Filter", Object::Name(b"FlateDecode".to_vec()));
    stream.dict.remove(b"DecodeParms");
    stream.set_content(encoded);
    Ok(true)
}

fn deflate(data: &[u8], level: Compression) -> std::io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), level);
    encoder.write_all(data)?;
    encoder.finish()
}
