//! ASCII slugs of Vietnamese text: "Tiếng Việt-đẹp.quá" -> "tieng viet dep qua".

use deunicode::deunicode_char;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Replacements that take precedence over generic transliteration.
fn override_char(c: char) -> Option<&'static str> {
    Some(match c {
        'đ' => "d",
        'Đ' => "D",
        '.' | '-' => " ",
        '$' => "dollar",
        '%' => "percent",
        '&' => "and",
        '<' => "less",
        '>' => "greater",
        '|' => "or",
        '€' => "euro",
        '£' => "pound",
        '¥' => "yen",
        '¢' => "cent",
        _ => {
            return None;
        }
    })
}

#[inline(always)]
fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}

/// Lower-cases and transliterates `text` to ASCII words separated by single
/// spaces. Diacritics are dropped, other scripts are romanized, `.` and `-`
/// split words, and anything else that is not a letter, digit or `_`
/// disappears.
pub fn normalize(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.nfd().filter(|&c| !is_combining_mark(c)) {
        if is_kept(c) {
            slug.push(c);
            continue;
        }
        // Characters with no known romanization are dropped.
        if let Some(ascii) = override_char(c).or_else(|| deunicode_char(c)) {
            slug.extend(ascii.chars().filter(|&r| is_kept(r)));
        }
    }
    slug.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}
