//! Tone letter table and per-character classification.
//!
//! Every Vietnamese vowel is one of 12 base letters carrying one of 6 tone
//! states, in either case. `LOWER`/`UPPER` hold the forward mapping; the
//! reverse index used by [`classify`] is computed from them at compile time.

/// Tone carried by a vowel letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToneMark {
    #[default]
    None,
    Grave,
    Acute,
    HookAbove,
    Tilde,
    DotBelow,
}

impl ToneMark {
    pub const ALL: [ToneMark; 6] = [
        ToneMark::None,
        ToneMark::Grave,
        ToneMark::Acute,
        ToneMark::HookAbove,
        ToneMark::Tilde,
        ToneMark::DotBelow,
    ];

    #[inline(always)]
    pub const fn is_none(self) -> bool {
        matches!(self, ToneMark::None)
    }
}

/// Base vowel letter, independent of case and tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VowelLetter {
    A,
    ABreve,
    ACircumflex,
    E,
    ECircumflex,
    I,
    O,
    OCircumflex,
    OHorn,
    U,
    UHorn,
    Y,
}

impl VowelLetter {
    pub const ALL: [VowelLetter; 12] = [
        VowelLetter::A,
        VowelLetter::ABreve,
        VowelLetter::ACircumflex,
        VowelLetter::E,
        VowelLetter::ECircumflex,
        VowelLetter::I,
        VowelLetter::O,
        VowelLetter::OCircumflex,
        VowelLetter::OHorn,
        VowelLetter::U,
        VowelLetter::UHorn,
        VowelLetter::Y,
    ];

    /// `ê` and `ơ` take the tone whenever they appear in a vowel run.
    #[inline(always)]
    pub const fn is_priority(self) -> bool {
        matches!(self, VowelLetter::ECircumflex | VowelLetter::OHorn)
    }

    #[inline(always)]
    pub const fn render(self, tone: ToneMark, uppercase: bool) -> char {
        if uppercase {
            UPPER[self as usize][tone as usize]
        } else {
            LOWER[self as usize][tone as usize]
        }
    }
}

/// A decoded vowel character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VowelChar {
    pub letter: VowelLetter,
    pub uppercase: bool,
    pub tone: ToneMark,
}

impl VowelChar {
    #[inline(always)]
    pub const fn render(self) -> char {
        self.letter.render(self.tone, self.uppercase)
    }

    /// The same letter and case without any tone.
    #[inline(always)]
    pub const fn base(self) -> char {
        self.letter.render(ToneMark::None, self.uppercase)
    }

    #[inline(always)]
    pub const fn with_tone(self, tone: ToneMark) -> Self {
        Self { tone, ..self }
    }
}

// Rows follow `VowelLetter`, columns follow `ToneMark`.
const LOWER: [[char; 6]; 12] = [
    ['a', 'à', 'á', 'ả', 'ã', 'ạ'],
    ['ă', 'ằ', 'ắ', 'ẳ', 'ẵ', 'ặ'],
    ['â', 'ầ', 'ấ', 'ẩ', 'ẫ', 'ậ'],
    ['e', 'è', 'é', 'ẻ', 'ẽ', 'ẹ'],
    ['ê', 'ề', 'ế', 'ể', 'ễ', 'ệ'],
    ['i', 'ì', 'í', 'ỉ', 'ĩ', 'ị'],
    ['o', 'ò', 'ó', 'ỏ', 'õ', 'ọ'],
    ['ô', 'ồ', 'ố', 'ổ', 'ỗ', 'ộ'],
    ['ơ', 'ờ', 'ớ', 'ở', 'ỡ', 'ợ'],
    ['u', 'ù', 'ú', 'ủ', 'ũ', 'ụ'],
    ['ư', 'ừ', 'ứ', 'ử', 'ữ', 'ự'],
    ['y', 'ỳ', 'ý', 'ỷ', 'ỹ', 'ỵ'],
];

const UPPER: [[char; 6]; 12] = [
    ['A', 'À', 'Á', 'Ả', 'Ã', 'Ạ'],
    ['Ă', 'Ằ', 'Ắ', 'Ẳ', 'Ẵ', 'Ặ'],
    ['Â', 'Ầ', 'Ấ', 'Ẩ', 'Ẫ', 'Ậ'],
    ['E', 'È', 'É', 'Ẻ', 'Ẽ', 'Ẹ'],
    ['Ê', 'Ề', 'Ế', 'Ể', 'Ễ', 'Ệ'],
    ['I', 'Ì', 'Í', 'Ỉ', 'Ĩ', 'Ị'],
    ['O', 'Ò', 'Ó', 'Ỏ', 'Õ', 'Ọ'],
    ['Ô', 'Ồ', 'Ố', 'Ổ', 'Ỗ', 'Ộ'],
    ['Ơ', 'Ờ', 'Ớ', 'Ở', 'Ỡ', 'Ợ'],
    ['U', 'Ù', 'Ú', 'Ủ', 'Ũ', 'Ụ'],
    ['Ư', 'Ừ', 'Ứ', 'Ử', 'Ữ', 'Ự'],
    ['Y', 'Ỳ', 'Ý', 'Ỷ', 'Ỹ', 'Ỵ'],
];

// Index entry layout: bits 0-3 letter + 1 (0 = not a vowel), bits 4-6 tone,
// bit 7 uppercase.
const LETTER_BITS: u8 = 0x0F;
const TONE_SHIFT: u8 = 4;
const TONE_BITS: u8 = 0x07;
const UPPER_BIT: u8 = 1 << 7;

// U+0000..=U+01B0 covers ASCII, Latin-1, ă/ĩ/ũ and ơ/ư.
const LATIN_LEN: usize = 0x01B1;
// U+1EA0..=U+1EF9 is the Vietnamese block of Latin Extended Additional.
const EXTENDED_START: u32 = 0x1EA0;
const EXTENDED_LEN: usize = 0x1EFA - 0x1EA0;

static LATIN_INDEX: [u8; LATIN_LEN] = build_index(0);
static EXTENDED_INDEX: [u8; EXTENDED_LEN] = build_index(EXTENDED_START);

#[inline(always)]
const fn pack(letter: usize, tone: usize, uppercase: bool) -> u8 {
    let case = if uppercase { UPPER_BIT } else { 0 };
    (letter as u8 + 1) | ((tone as u8) << TONE_SHIFT) | case
}

const fn build_index<const N: usize>(start: u32) -> [u8; N] {
    let mut t = [0u8; N];
    let mut l = 0;
    while l < LOWER.len() {
        let mut k = 0;
        while k < ToneMark::ALL.len() {
            let lower = LOWER[l][k] as u32;
            if lower >= start && lower - start < N as u32 {
                t[(lower - start) as usize] = pack(l, k, false);
            }
            let upper = UPPER[l][k] as u32;
            if upper >= start && upper - start < N as u32 {
                t[(upper - start) as usize] = pack(l, k, true);
            }
            k += 1;
        }
        l += 1;
    }
    t
}

#[inline(always)]
fn index_entry(c: char) -> u8 {
    let cp = c as u32;
    if (cp as usize) < LATIN_LEN {
        LATIN_INDEX[cp as usize]
    } else if cp >= EXTENDED_START && ((cp - EXTENDED_START) as usize) < EXTENDED_LEN {
        EXTENDED_INDEX[(cp - EXTENDED_START) as usize]
    } else {
        0
    }
}

/// Decodes `c` into letter, case and tone. `None` for anything that is not a
/// Vietnamese vowel letter.
pub fn classify(c: char) -> Option<VowelChar> {
    let entry = index_entry(c);
    let letter = (entry & LETTER_BITS) as usize;
    if letter == 0 {
        return None;
    }
    Some(VowelChar {
        letter: VowelLetter::ALL[letter - 1],
        uppercase: entry & UPPER_BIT != 0,
        tone: ToneMark::ALL[((entry >> TONE_SHIFT) & TONE_BITS) as usize],
    })
}

#[inline(always)]
pub fn is_vowel(c: char) -> bool {
    index_entry(c) != 0
}

/// Renders `base` with `tone`. Characters that are not vowels come back as is.
pub fn compose(base: char, tone: ToneMark) -> char {
    match classify(base) {
        Some(vowel) => vowel.with_tone(tone).render(),
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_bijection() {
        let mut seen = 0usize;
        for letter in VowelLetter::ALL {
            for tone in ToneMark::ALL {
                for uppercase in [false, true] {
                    let c = letter.render(tone, uppercase);
                    assert_eq!(
                        classify(c),
                        Some(VowelChar { letter, uppercase, tone }),
                        "{c:?} decoded wrongly"
                    );
                    seen += 1;
                }
            }
        }
        assert_eq!(seen, 144);
    }

    #[test]
    fn classify_reads_case_and_tone() {
        let v = classify('Ỵ').unwrap();
        assert_eq!(v.letter, VowelLetter::Y);
        assert!(v.uppercase);
        assert_eq!(v.tone, ToneMark::DotBelow);
        assert_eq!(v.base(), 'Y');

        let v = classify('ở').unwrap();
        assert_eq!(v.letter, VowelLetter::OHorn);
        assert!(v.letter.is_priority());
        assert_eq!(v.tone, ToneMark::HookAbove);
    }

    #[test]
    fn non_vowels_are_not_classified() {
        for c in ['b', 'đ', 'Đ', 'q', '1', ' ', ',', 'ñ', 'ç', '漢', '\u{0301}'] {
            assert_eq!(classify(c), None, "{c:?}");
            assert!(!is_vowel(c));
        }
    }

    #[test]
    fn compose_replaces_or_clamps() {
        assert_eq!(compose('a', ToneMark::Acute), 'á');
        assert_eq!(compose('Ư', ToneMark::Tilde), 'Ữ');
        assert_eq!(compose('ạ', ToneMark::Grave), 'à');
        assert_eq!(compose('ế', ToneMark::None), 'ê');
        assert_eq!(compose('n', ToneMark::Acute), 'n');
    }
}
