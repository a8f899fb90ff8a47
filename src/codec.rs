//! Compression and line handling for stored form HTML.
//!
//! The ingestion pipeline stores every form as an LZMA-compressed blob. Both
//! the `.xz` container and the legacy `.lzma` ("alone") format are accepted.

use std::borrow::Cow;
use std::io::{self, Read, Write};

use xz2::read::XzDecoder;
use xz2::stream::Stream;
use xz2::write::XzEncoder;

/// Compression preset used by the ingestion pipeline.
pub const COMPRESSION_LEVEL: u32 = 6;

/// Decompress a stored form blob, auto-detecting the container format.
pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    let stream = Stream::new_auto_decoder(u64::MAX, 0).map_err(io::Error::from)?;
    let mut decoder = XzDecoder::new_stream(data, stream);
    let mut out = Vec::with_capacity(data.len() * 4);
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Compress form HTML the same way the ingestion pipeline does.
pub fn compress(html: &str) -> io::Result<Vec<u8>> {
    let mut encoder = XzEncoder::new(Vec::new(), COMPRESSION_LEVEL);
    encoder.write_all(html.as_bytes())?;
    encoder.finish()
}

/// Remove every `\n` and `\r` so a form occupies exactly one output line.
pub fn strip_line_breaks(html: &str) -> Cow<'_, str> {
    if html.contains(['\n', '\r']) {
        Cow::Owned(html.replace(['\n', '\r'], ""))
    } else {
        Cow::Borrowed(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_preserves_text() {
        let html = "<form>\r\n  <input pattern=\"[a-zæøå]+\">\n</form>";
        let compressed = compress(html).unwrap();
        let restored = decompress(&compressed).unwrap();
        assert_eq!(String::from_utf8(restored).unwrap(), html);
    }

    #[test]
    fn test_decompress_legacy_lzma() {
        let options = xz2::stream::LzmaOptions::new_preset(COMPRESSION_LEVEL).unwrap();
        let stream = Stream::new_lzma_encoder(&options).unwrap();
        let mut encoder = XzEncoder::new_stream(Vec::new(), stream);
        encoder.write_all(b"<form></form>").unwrap();
        let compressed = encoder.finish().unwrap();

        assert_eq!(decompress(&compressed).unwrap(), b"<form></form>");
    }

    #[test]
    fn test_decompress_rejects_garbage() {
        assert!(decompress(b"definitely not xz").is_err());
    }

    #[test]
    fn test_strip_line_breaks() {
        assert_eq!(strip_line_breaks("a\nb\r\nc\r"), "abc");
        assert!(matches!(strip_line_breaks("<form/>"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_line_breaks_is_idempotent() {
        let once = strip_line_breaks("<form>\n\r<input>\n</form>").into_owned();
        assert_eq!(strip_line_breaks(&once), once);
        assert!(!once.contains(['\n', '\r']));
    }
}
