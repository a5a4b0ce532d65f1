use proptest::prelude::*;
use satchel_io::{FastByteBuffer, FastOutputStream, util};
use std::io::Write;

proptest! {
    #[test]
    fn buffer_matches_vec(
        min_chunk in -64_i32..64,
        writes in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..50), 0..20),
    ) {
        let mut buffer = FastByteBuffer::new(min_chunk);
        let mut expected = Vec::new();
        for bytes in &writes {
            buffer.append(bytes);
            expected.extend_from_slice(bytes);
        }
        prop_assert_eq!(buffer.size(), expected.len());
        prop_assert_eq!(buffer.to_vec(), expected);
    }

    #[test]
    fn single_bytes_match_vec(bytes in prop::collection::vec(any::<u8>(), 0..200), min_chunk in 0_i32..16) {
        let mut buffer = FastByteBuffer::new(min_chunk);
        for byte in &bytes {
            buffer.append_byte(*byte);
        }
        prop_assert_eq!(buffer.to_vec(), bytes);
    }

    #[test]
    fn copy_preserves_content(data in prop::collection::vec(any::<u8>(), 0..4096), size in 0_usize..512) {
        let mut out = FastOutputStream::with_size(16);
        let copied = util::copy_with(&mut data.as_slice(), &mut out, size, None).unwrap();
        prop_assert_eq!(copied, data.len() as u64);
        prop_assert_eq!(out.to_bytes(), data);
    }
}

#[test]
fn output_stream_drains_into_file() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("out.bin");

    let mut out = FastOutputStream::with_size(3);
    out.write_all(b"chunked ").unwrap();
    out.write_all(b"output").unwrap();

    let mut file = std::fs::File::create(&path).unwrap();
    out.write_to(&mut file).unwrap();
    drop(file);

    assert_eq!(std::fs::read(&path).unwrap(), b"chunked output");
}
