use crate::{VietnameseText, mask, normalize_vietnamese_accent, slug};


fn fix(text: &str) -> String {
    normalize_vietnamese_accent(text)
}

#[test]
fn single_vowel_words() {
    assert_eq!(fix("á"), "á");
    assert_eq!(fix("tã"), "tã");
    assert_eq!(fix("nhà"), "nhà");
    assert_eq!(fix("nhãn"), "nhãn");
    assert_eq!(fix("gánh"), "gánh");
    assert_eq!(fix("ngáng"), "ngáng");
}

#[test]
fn diphthong_words() {
    assert_eq!(fix("òa"), "òa");
    assert_eq!(fix("oà"), "òa");
    assert_eq!(fix("tòa"), "tòa");
    assert_eq!(fix("toà"), "tòa");
    assert_eq!(fix("ủy"), "ủy");
    assert_eq!(fix("uỷ"), "ủy");
    assert_eq!(fix("thủy"), "thủy");
    assert_eq!(fix("thuỷ"), "thủy");
}

#[test]
fn closed_syllables_and_triphthongs() {
    assert_eq!(fix("toàn"), "toàn");
    assert_eq!(fix("tòan"), "toàn");
    assert_eq!(fix("khủyu"), "khuỷu");
    assert_eq!(fix("khuyủ"), "khuỷu");
    assert_eq!(fix("khuỷu"), "khuỷu");
}

#[test]
fn e_circumflex_and_o_horn_take_priority() {
    assert_eq!(fix("thủơ"), "thuở");
    assert_eq!(fix("thuở"), "thuở");
    assert_eq!(fix("chụyên"), "chuyện");
    assert_eq!(fix("chuỵên"), "chuyện");
    assert_eq!(fix("chuyện"), "chuyện");
}

#[test]
fn mixed_case() {
    assert_eq!(fix("Á"), "Á");
    assert_eq!(fix("TÃ"), "TÃ");
    assert_eq!(fix("tÃ"), "tÃ");
    assert_eq!(fix("NhÀ"), "NhÀ");
    assert_eq!(fix("THUỶ"), "THỦY");
}

#[test]
fn words_without_tone() {
    assert_eq!(fix("toa"), "toa");
    assert_eq!(fix("toan"), "toan");
}

#[test]
fn sentences() {
    assert_eq!(fix("toà nhà tòan"), "tòa nhà toàn");
    assert_eq!(fix("tòa nhà toàn"), "tòa nhà toàn");
    assert_eq!(fix("thuỷ, thủơ, chuỵên"), "thủy, thuở, chuyện");
    assert_eq!(fix("thủy, thuở, chuyện"), "thủy, thuở, chuyện");
}

#[test]
fn empty_and_absent_input() {
    assert_eq!(fix(""), "");
    let none: Option<String> = None;
    assert_eq!(none.normalize_accent(), None);
}

#[test]
fn consonant_and_digit_words() {
    assert_eq!(fix("xyz"), "xyz");
    assert_eq!(fix("123"), "123");
}

#[test]
fn whitespace_is_preserved() {
    assert_eq!(fix("  toà  nhà  "), "  tòa  nhà  ");
    assert_eq!(fix("  tòa  nhà  "), "  tòa  nhà  ");
    assert_eq!(fix("toà\nnhà"), "tòa\nnhà");
    assert_eq!(fix("tòa\nnhà"), "tòa\nnhà");
    assert_eq!(fix("toà\t\r\n\u{00A0}nhà"), "tòa\t\r\n\u{00A0}nhà");
}

#[test]
fn punctuation_is_preserved() {
    assert_eq!(fix("(toà)... «qủan»!?"), "(tòa)... «quản»!?");
    assert_eq!(fix("toà-nhà"), "tòa-nhà");
}

#[test]
fn gi_and_qu_clusters() {
    assert_eq!(fix("gì"), "gì");
    assert_eq!(fix("gìa"), "già");
    assert_eq!(fix("qụa"), "quạ");
    assert_eq!(fix("gía"), "giá");
    assert_eq!(fix("qủa"), "quả");
    assert_eq!(fix("gỉa"), "giả");
    assert_eq!(fix("qúa"), "quá");
    assert_eq!(fix("qủan"), "quản");
    assert_eq!(fix("qúan"), "quán");
    assert_eq!(fix("gìn gĩư"), "gìn giữ");
}

#[test]
fn helpers_from_crate_root() {
    assert_eq!(mask("hello", 1, 4), "h***o");
    assert_eq!(slug::normalize("Hello World!"), "hello world");
    assert_eq!(Some("Tòan Quốc").to_slug(), Some("toan quoc".to_owned()));
}
