use glyph_accounts_entry::{
    classify, render_results, split_lines, BatchError, Classification, DecoderParams,
    EntryDecoder,
};
use std::path::{Path, PathBuf};

fn testdata_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../testdata")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(testdata_path(name)).expect("read fixture")
}

#[test]
fn decodes_single_entry_file() {
    let content = read_fixture("file1.txt");
    let decoder = EntryDecoder::default();
    let entries = decoder.decode_text(&content).expect("decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(render_results(&entries), "123456789");
}

#[test]
fn decodes_multi_entry_file() {
    let content = read_fixture("file1-multiple.txt");
    let decoder = EntryDecoder::new(DecoderParams::with_width(9));
    let entries = decoder.decode_text(&content).expect("decode");

    let expected = "\
000000000
111111111 ERR
22222222? ILL
333333333 ERR
????????? ILL
555555555 ERR
666666666 ERR
777777777 ERR
888888888 ERR
999999999 ERR
123456789
000000051
49006771? ILL
1234?678? ILL";
    assert_eq!(render_results(&entries), expected);
}

#[test]
fn batch_size_matches_line_groups() {
    let content = read_fixture("file1-multiple.txt");
    let lines = split_lines(&content);
    assert_eq!(lines.len() % 4, 0);

    let entries = EntryDecoder::default()
        .decode_lines(&lines)
        .expect("decode");
    assert_eq!(entries.len(), lines.len() / 4);
    assert!(entries.iter().all(|e| e.len() == 9));

    let illegible = entries
        .iter()
        .filter(|e| classify(e) == Classification::Ill)
        .count();
    assert_eq!(illegible, 4);
}

#[test]
fn rejects_file_with_partial_entry() {
    let content = read_fixture("incorrect-file.txt");
    let err = EntryDecoder::default()
        .decode_text(&content)
        .expect_err("malformed");
    assert_eq!(err, BatchError::MalformedBatch { lines: 5 });
    assert_eq!(
        err.to_string(),
        "batch must contain a multiple of 4 lines, got 5"
    );
}

#[test]
fn narrower_width_reads_prefix() {
    let content = read_fixture("file1.txt");
    let entries = EntryDecoder::new(DecoderParams::with_width(4))
        .decode_text(&content)
        .expect("decode");
    assert_eq!(entries[0].to_string(), "1234");
}

#[test]
fn wider_width_pads_with_unknown() {
    let content = read_fixture("file1.txt");
    let entries = EntryDecoder::new(DecoderParams::with_width(11))
        .decode_text(&content)
        .expect("decode");
    assert_eq!(entries[0].to_string(), "123456789??");
    assert_eq!(classify(&entries[0]), Classification::Ill);
}
