// tests/search_key.rs
//
// Folding properties: lowercase, diacritics stripped, đ/Đ → d.
//
use dst_roster::sanitize::search_key;

#[test]
fn empty_and_plain_ascii_pass_through() {
    assert_eq!(search_key(""), "");
    assert_eq!(search_key("abc 123"), "abc 123");
    assert_eq!(search_key("ABC"), "abc");
}

#[test]
fn vietnamese_diacritics_fold_to_ascii() {
    assert_eq!(search_key("Đức"), "duc");
    assert_eq!(search_key("NGUYỄN"), "nguyen");
    assert_eq!(search_key("Đặng Văn Đủ"), "dang van du");
    assert_eq!(search_key("Cấp 1"), "cap 1");
}

#[test]
fn diacritic_and_case_insensitive_equality() {
    assert_eq!(search_key("Đức"), search_key("duc"));
    assert_eq!(search_key("Trần Thị B"), search_key("tran thi b"));
    assert_eq!(search_key("hội viên"), search_key("HOI VIEN"));
}

#[test]
fn folding_is_idempotent() {
    for s in ["", "Đức", "ĐẶNG Văn Đủ", "Quyền", "café", "Mã hội viên M001"] {
        let once = search_key(s);
        assert_eq!(search_key(&once), once, "not idempotent for {s:?}");
    }
}

#[test]
fn non_latin_input_is_tolerated() {
    // Total over arbitrary Unicode; no panics, marks still stripped.
    let key = search_key("Ωμέγα 日本語");
    assert!(!key.is_empty());
    assert_eq!(search_key(&key), key);
}
