//! Edge case and corruption tests for the hfc container.

use hfc_huffman::container::{MIN_CONTAINER_SIZE, PAYLOAD_HEADER_SIZE};
use hfc_huffman::{
    Code, DecodeOptions, DecodeStatus, Decompressor, HfcError, HuffmanCodec, decode, encode,
    inspect,
};

#[test]
fn test_empty_input() {
    assert!(matches!(encode(b"", 0), Err(HfcError::EmptyInput)));
}

#[test]
fn test_single_symbol() {
    let input = vec![0x41u8; 1000];
    let container = encode(&input, 0).unwrap();

    let info = inspect(&container).unwrap();
    assert_eq!(info.table.len(), 1);
    assert_eq!(info.table.get(0x41), Some(&Code::default()));
    assert_eq!(info.payload_len(), 0);

    let decoded = decode(&container, 0).unwrap();
    assert_eq!(decoded.status, DecodeStatus::Complete);
    assert_eq!(decoded.data.len(), 1000);
    assert_eq!(decoded.data, input);
}

#[test]
fn test_single_symbol_with_key() {
    let input = vec![0u8; 77];
    let container = encode(&input, -99).unwrap();
    assert_eq!(decode(&container, -99).unwrap().data, input);
}

#[test]
fn test_aligned_stream_has_zero_pad() {
    // Two symbols, one bit each: 8 bits exactly.
    let container = encode(b"abababab", 0).unwrap();
    let info = inspect(&container).unwrap();
    assert_eq!(container[info.table_len], 0);
    assert_eq!(info.payload_len(), 1);

    let decoded = decode(&container, 0).unwrap();
    assert_eq!(decoded.status, DecodeStatus::Complete);
    assert_eq!(decoded.data, b"abababab");
}

#[test]
fn test_unaligned_stream_pad() {
    let container = encode(b"ab", 0).unwrap();
    let info = inspect(&container).unwrap();
    assert_eq!(container[info.table_len], 6);
    assert_eq!(decode(&container, 0).unwrap().data, b"ab");
}

#[test]
fn test_short_buffers_are_truncated() {
    for len in 0..5 {
        let buf = vec![0u8; len];
        assert!(
            matches!(decode(&buf, 0), Err(HfcError::TruncatedContainer { .. })),
            "len {len}"
        );
    }
    for len in 0..MIN_CONTAINER_SIZE {
        let buf = vec![0xFFu8; len];
        assert!(matches!(
            decode(&buf, 0),
            Err(HfcError::TruncatedContainer { .. })
        ));
    }
}

#[test]
fn test_truncated_table_and_header() {
    let container = encode(b"mississippi river", 9).unwrap();
    let info = inspect(&container).unwrap();

    for cut in 0..info.table_len + PAYLOAD_HEADER_SIZE {
        let result = decode(&container[..cut], 9);
        assert!(
            matches!(result, Err(HfcError::TruncatedContainer { .. })),
            "cut at {cut}: {result:?}"
        );
    }
}

#[test]
fn test_truncated_payload_is_never_complete() {
    let input = b"mississippi river banks".to_vec();
    let container = encode(&input, 9).unwrap();
    let info = inspect(&container).unwrap();

    // Every cut keeps at least one payload byte, so the pad count stays valid.
    for cut in info.table_len + PAYLOAD_HEADER_SIZE + 1..container.len() {
        let decoded = decode(&container[..cut], 9)
            .unwrap_or_else(|err| panic!("cut at {cut}: {err}"));
        match decoded.status {
            DecodeStatus::LengthMismatch { expected, actual } => {
                assert_eq!(expected, input.len() as u64, "cut at {cut}");
                assert_eq!(actual, decoded.data.len() as u64, "cut at {cut}");
            }
            DecodeStatus::Complete => panic!("cut at {cut} decoded as complete"),
        }
        assert!(decoded.data.len() < input.len());
        assert!(input.starts_with(&decoded.data), "cut at {cut}");
    }
}

#[test]
fn test_length_mismatch_is_reported() {
    let input = b"aaaabbc";
    let mut container = encode(input, 0).unwrap();
    let info = inspect(&container).unwrap();

    // Declare one byte more than the payload holds.
    container[info.table_len + 4] += 1;
    let decoded = decode(&container, 0).unwrap();
    assert_eq!(
        decoded.status,
        DecodeStatus::LengthMismatch {
            expected: 8,
            actual: 7
        }
    );
    assert_eq!(decoded.data, input);

    let codec = HuffmanCodec::new(0);
    assert!(matches!(
        codec.decompress_exact(&container),
        Err(HfcError::LengthMismatch {
            expected: 8,
            actual: 7
        })
    ));
}

#[test]
fn test_shorter_declared_length_stops_early() {
    let mut container = encode(b"aaaabbc", 0).unwrap();
    let info = inspect(&container).unwrap();
    container[info.table_len + 4] = 4;

    let decoded = decode(&container, 0).unwrap();
    assert_eq!(decoded.status, DecodeStatus::Complete);
    assert_eq!(decoded.data, b"aaaa");
}

#[test]
fn test_unmappable_code() {
    // Hand-built table whose codes do not cover the bit pattern 11; the
    // failing code starts right after the leading x.
    let mut container = vec![0, 0, 0, 2];
    container.extend_from_slice(&[b'x', 0, 1, b'0']);
    container.extend_from_slice(&[b'y', 0, 2, b'1', b'0']);
    container.extend_from_slice(&[0, 0, 0, 0, 3]);
    container.push(0b0110_0000);

    assert!(matches!(
        decode(&container, 0),
        Err(HfcError::UnmappableCode { bit_position: 1 })
    ));
}

#[test]
fn test_bad_pad_count() {
    let mut container = encode(b"abc", 0).unwrap();
    let info = inspect(&container).unwrap();
    container[info.table_len] = 8;
    assert!(matches!(
        decode(&container, 0),
        Err(HfcError::CorruptedHeader { .. })
    ));
}

#[test]
fn test_key_sensitivity() {
    let inputs: Vec<Vec<u8>> = vec![
        b"aaaabbc".to_vec(),
        vec![0x41; 1000],
        b"The quick brown fox jumps over the lazy dog".to_vec(),
        (0..=255u8).collect(),
    ];

    for input in &inputs {
        let container = encode(input, 17).unwrap();
        for wrong in (0..256).filter(|&k| k != 17) {
            match decode(&container, wrong) {
                Ok(decoded) => assert!(
                    !(decoded.is_complete() && decoded.data == *input),
                    "key {wrong} silently reproduced the input"
                ),
                Err(err) => assert!(err.is_corruption(), "key {wrong}: {err}"),
            }
        }
    }
}

#[test]
fn test_output_limit() {
    let container = encode(&[1, 2, 3, 4, 5, 6], 0).unwrap();
    let codec = HuffmanCodec::new(0).with_options(DecodeOptions::new(6));
    assert!(codec.decompress(&container).unwrap().is_complete());

    let codec = codec.with_options(DecodeOptions::DEFAULT.with_max_output_len(5));
    assert!(matches!(
        codec.decompress(&container),
        Err(HfcError::OutputLimitExceeded { .. })
    ));
}

#[test]
fn test_invalid_table_entry_count() {
    let mut container = encode(b"abc", 0).unwrap();
    container[..4].copy_from_slice(&0u32.to_be_bytes());
    assert!(matches!(
        decode(&container, 0),
        Err(HfcError::InvalidCodeTable { .. })
    ));
}
