//! Apple-originated PackBits codec, used by the MAC and PIC PNTG decoders.

/// Decompress a PackBits stream to exactly `expected_length` bytes.
///
/// Per control byte `f`: `0..=127` is a literal run of `f + 1` bytes,
/// `129..=255` is a repeat run emitting the following byte `257 - f` times,
/// and `128` is a no-op. Decoding stops once `expected_length` bytes have
/// been produced or the input is exhausted; a truncated literal or repeat
/// (missing payload bytes) ends the stream cleanly rather than erroring, and
/// any shortfall is zero-padded.
pub fn decode(input: &[u8], expected_length: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_length);
    let mut pos = 0usize;

    while out.len() < expected_length && pos < input.len() {
        let flag = input[pos];
        pos += 1;

        if flag <= 127 {
            let count = flag as usize + 1;
            let available = input.len() - pos;
            let take = count.min(available);
            out.extend_from_slice(&input[pos..pos + take]);
            pos += take;
            if take < count {
                break;
            }
        } else if flag == 128 {
            continue;
        } else {
            let repeat = 257usize - flag as usize;
            if pos >= input.len() {
                break;
            }
            let value = input[pos];
            pos += 1;
            out.extend(std::iter::repeat(value).take(repeat));
        }
    }

    out.truncate(expected_length);
    out.resize(expected_length, 0);
    out
}

/// Choose between PackBits decompression and a raw pass-through, per the
/// MacPaint/PNTG heuristic: if the first payload byte exceeds 128, assume
/// PackBits; otherwise, if the payload is already exactly `expected_length`
/// bytes long, treat it as an uncompressed bitmap; otherwise still attempt
/// PackBits, the dominant case in practice.
pub fn decode_or_raw(payload: &[u8], expected_length: usize) -> Vec<u8> {
    match payload.first() {
        Some(&first) if first > 128 => decode(payload, expected_length),
        _ if payload.len() == expected_length => payload.to_vec(),
        _ => decode(payload, expected_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_scenario() {
        let input = [0x00, 0xFF, 0xFD, 0xAA, 0x02, 0x11, 0x22, 0x33];
        let out = decode(&input, 8);
        assert_eq!(out, vec![0xFF, 0xAA, 0xAA, 0xAA, 0xAA, 0x11, 0x22, 0x33]);
    }

    #[test]
    fn no_op_flag_consumed_without_output() {
        let input = [0x80, 0x00, 0x05];
        let out = decode(&input, 2);
        assert_eq!(out, vec![0x05, 0x00]);
    }

    #[test]
    fn empty_input_yields_zero_padded_output() {
        assert_eq!(decode(&[], 4), vec![0u8; 4]);
    }

    #[test]
    fn empty_input_and_zero_length_yields_empty_output() {
        assert_eq!(decode(&[], 0), Vec::<u8>::new());
    }

    #[test]
    fn truncated_repeat_pads_with_zeros() {
        // Repeat flag with the value byte missing.
        let input = [0xFE];
        assert_eq!(decode(&input, 4), vec![0u8; 4]);
    }

    #[test]
    fn truncated_literal_pads_with_zeros() {
        // Claims 4 literal bytes but only 2 are present.
        let input = [0x03, 0xAA, 0xBB];
        assert_eq!(decode(&input, 6), vec![0xAA, 0xBB, 0, 0, 0, 0]);
    }

    #[test]
    fn excess_input_is_ignored() {
        let input = [0x01, 0x11, 0x22, 0x01, 0x33, 0x44];
        assert_eq!(decode(&input, 2), vec![0x11, 0x22]);
    }

    #[test]
    fn decode_or_raw_passes_through_an_already_uncompressed_body() {
        // First byte <= 128 (so not the "assume PackBits" case) but the
        // payload is already exactly the expected length: a raw bitmap that
        // happens to start with a small value must not be misread as a
        // PackBits literal-run flag.
        let payload = vec![0x05u8; 4];
        assert_eq!(decode_or_raw(&payload, 4), payload);
    }

    #[test]
    fn decode_or_raw_assumes_packbits_when_first_byte_exceeds_128() {
        let compressed = [0xFFu8, 0xAA]; // repeat code: two copies of 0xAA
        assert_eq!(decode_or_raw(&compressed, 2), vec![0xAA, 0xAA]);
    }

    #[test]
    fn decode_or_raw_falls_back_to_packbits_when_length_does_not_match() {
        // First byte is <= 128 and the payload length doesn't equal
        // `expected_length`, so this is still decoded as PackBits rather
        // than copied raw.
        let compressed = [0x01u8, 0x11, 0x22];
        assert_eq!(decode_or_raw(&compressed, 2), vec![0x11, 0x22]);
    }
}
