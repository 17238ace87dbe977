//! AOL's run-length codec, used by the ART AOL-signature variant. Unlike the
//! other three codecs, the literal form here is itself a run (`copy the next
//! `b` bytes`), not a single byte.

/// Decompress an AOL-RLE stream to exactly `expected_length` bytes.
///
/// Per input byte `b`: `b > 128` is a run-length code emitting the following
/// byte `b - 128` times; `0 < b <= 128` is a literal run copying the next
/// `b` bytes verbatim; `b == 0` is padding and is skipped.
pub fn decode(input: &[u8], expected_length: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_length);
    let mut pos = 0usize;

    while out.len() < expected_length && pos < input.len() {
        let byte = input[pos];
        pos += 1;

        if byte == 0 {
            continue;
        } else if byte <= 128 {
            let count = byte as usize;
            let available = input.len() - pos;
            let take = count.min(available);
            out.extend_from_slice(&input[pos..pos + take]);
            pos += take;
            if take < count {
                break;
            }
        } else {
            let count = (byte - 128) as usize;
            if pos >= input.len() {
                break;
            }
            let value = input[pos];
            pos += 1;
            out.extend(std::iter::repeat(value).take(count));
        }
    }

    out.truncate(expected_length);
    out.resize(expected_length, 0);
    out
}
