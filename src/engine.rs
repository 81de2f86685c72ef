use tracing::trace;

use crate::buffers::{
    CharBuffer, OutBuffer, Overflow, VowelRun, new_char_buffer, new_out_buffer, new_vowel_run,
    push_char, push_out, push_vowel,
};
use crate::cluster::{self, ClusterMatch};
use crate::tone::{self, ToneMark, VowelChar};

/// A vowel found while scanning a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VowelOccurrence {
    /// Character (not byte) position in the word.
    pub index: usize,
    /// Letter, case and effective tone.
    pub vowel: VowelChar,
}

/// Where a word's tone is and where it belongs, as positions in its vowel run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub current: usize,
    pub target: usize,
    pub tone: ToneMark,
}

impl Placement {
    #[inline(always)]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

/// Resolves tone placement one word at a time, reusing its scratch buffers
/// between words.
#[derive(Debug)]
pub struct AccentEngine {
    chars: CharBuffer,
    run: VowelRun,
    out: OutBuffer,
}

impl Default for AccentEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AccentEngine {
    pub fn new() -> Self {
        Self {
            chars: new_char_buffer(),
            run: new_vowel_run(),
            out: new_out_buffer(),
        }
    }

    /// Returns `word` with its tone mark on the vowel that should carry it.
    ///
    /// Words without vowels or without a tone come back unchanged, as do
    /// words too long for the scratch buffers.
    pub fn normalize_word<'a>(&'a mut self, word: &'a str) -> &'a str {
        if word.is_empty() {
            return word;
        }
        match self.resolve(word) {
            Ok(()) => self.out.as_str(),
            Err(Overflow) => {
                trace!(word, "word exceeds scratch capacity, left as is");
                word
            }
        }
    }

    fn resolve(&mut self, word: &str) -> Result<(), Overflow> {
        let stranded = self.scan(word, cluster::detect(word))?;
        if stranded {
            // Nothing after the cluster could take its tone ("gìn"), so the
            // glide is the vowel after all.
            self.scan(word, None)?;
        }

        if let Some(placement) = self.placement() {
            if !placement.is_settled() {
                trace!(
                    word,
                    from = placement.current,
                    to = placement.target,
                    "moving tone mark"
                );
                apply_tone_in_place(&mut self.chars, &self.run, placement);
            }
        }

        self.out.clear();
        for &c in self.chars.iter() {
            push_out(&mut self.out, c)?;
        }
        Ok(())
    }

    /// Fills `chars` and `run` for `word`. Returns `true` when a tone lifted
    /// off the cluster found no vowel to land on.
    fn scan(&mut self, word: &str, head: Option<ClusterMatch>) -> Result<bool, Overflow> {
        self.chars.clear();
        self.run.clear();

        let mut rest = word.chars();
        let mut pending = None;
        if let Some(m) = head {
            push_char(&mut self.chars, m.head)?;
            push_char(&mut self.chars, m.glide())?;
            rest.nth(ClusterMatch::LEN - 1);
            pending = m.tone;
        }

        for c in rest {
            let c = match tone::classify(c) {
                Some(vowel) => {
                    let vowel = carry_tone(vowel, pending.take());
                    let index = self.chars.len();
                    push_vowel(&mut self.run, VowelOccurrence { index, vowel })?;
                    vowel.render()
                }
                None => c,
            };
            push_char(&mut self.chars, c)?;
        }

        Ok(pending.is_some())
    }

    fn placement(&self) -> Option<Placement> {
        // Leftmost tone wins when a word carries more than one.
        let (current, tone) = self
            .run
            .iter()
            .enumerate()
            .find(|(_, o)| !o.vowel.tone.is_none())
            .map(|(i, o)| (i, o.vowel.tone))?;

        Some(Placement {
            current,
            target: self.target(),
            tone,
        })
    }

    fn target(&self) -> usize {
        if let Some(i) = self.run.iter().position(|o| o.vowel.letter.is_priority()) {
            return i;
        }
        match self.run.len() {
            0 | 1 => 0,
            // A final consonant closes the diphthong and pulls the tone onto
            // its second vowel (toàn vs tòa).
            2 if self.ends_in_consonant() => 1,
            2 => 0,
            _ => 1,
        }
    }

    #[inline(always)]
    fn ends_in_consonant(&self) -> bool {
        self.chars.last().is_some_and(|&c| !tone::is_vowel(c))
    }
}

#[inline(always)]
fn carry_tone(vowel: VowelChar, pending: Option<ToneMark>) -> VowelChar {
    match pending {
        Some(tone) => vowel.with_tone(tone),
        None => vowel,
    }
}

/// Puts `placement.tone` on the target vowel of `run` and strips every other
/// vowel in `chars` bare. Case is kept letter by letter.
pub fn apply_tone_in_place(chars: &mut [char], run: &[VowelOccurrence], placement: Placement) {
    for (i, occurrence) in run.iter().enumerate() {
        let tone = if i == placement.target {
            placement.tone
        } else {
            ToneMark::None
        };
        if let Some(c) = chars.get_mut(occurrence.index) {
            *c = occurrence.vowel.with_tone(tone).render();
        }
    }
}

/// One-shot form of [`AccentEngine::normalize_word`].
#[cfg(feature = "std")]
pub fn normalize_word(word: &str) -> String {
    AccentEngine::new().normalize_word(word).to_owned()
}
