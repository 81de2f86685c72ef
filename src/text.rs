//! Whole-text driver: splits text into words and separators and fixes the
//! tone placement of every word.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Match, Matches, Regex};
use tracing::debug_span;
use unicode_normalization::{UnicodeNormalization, is_nfc};

use crate::engine::AccentEngine;
use crate::slug;

// U+FEFF (zero-width no-break space) is not White_Space but still splits words.
static SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x{FEFF}]+|\p{P}+").expect("separator pattern is valid")
});

/// A piece of text as seen by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Word(&'a str),
    /// A run of whitespace or a run of punctuation.
    Separator(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Segment::Word(s) | Segment::Separator(s) => s,
        }
    }
}

/// Iterator returned by [`segments`].
#[derive(Debug)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
    separators: Matches<'static, 'a>,
    queued: Option<Match<'a>>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(sep) = self.queued.take() {
            self.pos = sep.end();
            return Some(Segment::Separator(sep.as_str()));
        }
        if self.pos >= self.text.len() {
            return None;
        }
        match self.separators.next() {
            Some(sep) if sep.start() > self.pos => {
                let word = &self.text[self.pos..sep.start()];
                self.pos = sep.start();
                self.queued = Some(sep);
                Some(Segment::Word(word))
            }
            Some(sep) => {
                self.pos = sep.end();
                Some(Segment::Separator(sep.as_str()))
            }
            None => {
                let word = &self.text[self.pos..];
                self.pos = self.text.len();
                Some(Segment::Word(word))
            }
        }
    }
}

/// Splits `text` into words and separators. Concatenating the segments
/// gives back `text` exactly.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        text,
        pos: 0,
        separators: SEPARATOR.find_iter(text),
        queued: None,
    }
}

fn compose(text: &str) -> Cow<'_, str> {
    if is_nfc(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfc().collect())
    }
}

/// Moves the tone mark of every word in `text` onto the vowel that should
/// carry it. Separators are copied through untouched.
///
/// ```
/// assert_eq!(
///     vitone::normalize_vietnamese_accent("thuỷ, thủơ, chuỵên"),
///     "thủy, thuở, chuyện"
/// );
/// ```
pub fn normalize_vietnamese_accent(text: &str) -> String {
    let _span = debug_span!("normalize_vietnamese_accent", len = text.len()).entered();

    let composed = compose(text);
    let mut engine = AccentEngine::new();
    let mut out = String::with_capacity(composed.len());
    for segment in segments(&composed) {
        match segment {
            Segment::Word(word) => out.push_str(engine.normalize_word(word)),
            Segment::Separator(sep) => out.push_str(sep),
        }
    }
    out
}

/// Text normalizations that pass absent values (`None`) through untouched.
pub trait VietnameseText {
    type Output;

    /// See [`normalize_vietnamese_accent`].
    fn normalize_accent(&self) -> Self::Output;

    /// See [`slug::normalize`].
    fn to_slug(&self) -> Self::Output;
}

impl VietnameseText for str {
    type Output = String;

    fn normalize_accent(&self) -> String {
        normalize_vietnamese_accent(self)
    }

    fn to_slug(&self) -> String {
        slug::normalize(self)
    }
}

impl VietnameseText for String {
    type Output = String;

    fn normalize_accent(&self) -> String {
        normalize_vietnamese_accent(self)
    }

    fn to_slug(&self) -> String {
        slug::normalize(self)
    }
}

impl<T: VietnameseText + ?Sized> VietnameseText for &T {
    type Output = T::Output;

    fn normalize_accent(&self) -> T::Output {
        (**self).normalize_accent()
    }

    fn to_slug(&self) -> T::Output {
        (**self).to_slug()
    }
}

impl<T: VietnameseText> VietnameseText for Option<T> {
    type Output = Option<T::Output>;

    fn normalize_accent(&self) -> Option<T::Output> {
        self.as_ref().map(VietnameseText::normalize_accent)
    }

    fn to_slug(&self) -> Option<T::Output> {
        self.as_ref().map(VietnameseText::to_slug)
    }
}
