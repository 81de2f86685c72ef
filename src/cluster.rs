//! Word-initial consonant digraphs whose second letter looks like a vowel.

use crate::tone::{self, ToneMark, VowelLetter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Gi,
    Qu,
}

impl Cluster {
    #[inline(always)]
    fn from_head(c: char) -> Option<Self> {
        match c {
            'g' | 'G' => Some(Cluster::Gi),
            'q' | 'Q' => Some(Cluster::Qu),
            _ => None,
        }
    }

    /// The vowel-looking letter the cluster ends in.
    #[inline(always)]
    pub const fn glide(self) -> VowelLetter {
        match self {
            Cluster::Gi => VowelLetter::I,
            Cluster::Qu => VowelLetter::U,
        }
    }
}

/// A detected `gi`/`qu` at the start of a word.
///
/// The glide keeps its case in `uppercase` and loses its tone; the removed
/// tone (if any) is in `tone` and belongs to the first vowel after the
/// cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterMatch {
    pub cluster: Cluster,
    pub head: char,
    pub uppercase: bool,
    pub tone: Option<ToneMark>,
}

impl ClusterMatch {
    /// Number of characters the cluster occupies.
    pub const LEN: usize = 2;

    /// The untoned second letter, in its original case.
    #[inline]
    pub const fn glide(&self) -> char {
        self.cluster.glide().render(ToneMark::None, self.uppercase)
    }
}

/// Looks for `gi` or `qu` (any case) at the start of `word`. Words of two
/// characters or fewer never start with a cluster: in "gì" the `i` is the
/// vowel.
pub fn detect(word: &str) -> Option<ClusterMatch> {
    let mut chars = word.chars();
    let head = chars.next()?;
    let second = chars.next()?;
    chars.next()?;

    let cluster = Cluster::from_head(head)?;
    let glide = tone::classify(second).filter(|v| v.letter == cluster.glide())?;

    Some(ClusterMatch {
        cluster,
        head,
        uppercase: glide.uppercase,
        tone: (!glide.tone.is_none()).then_some(glide.tone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_gi_and_qu() {
        let m = detect("gia").unwrap();
        assert_eq!(m.cluster, Cluster::Gi);
        assert_eq!((m.head, m.glide(), m.tone), ('g', 'i', None));

        let m = detect("QUAN").unwrap();
        assert_eq!(m.cluster, Cluster::Qu);
        assert_eq!((m.head, m.glide()), ('Q', 'U'));
    }

    #[test]
    fn glide_keeps_its_own_case() {
        let m = detect("gÍa").unwrap();
        assert_eq!((m.cluster, m.uppercase, m.glide()), (Cluster::Gi, true, 'I'));

        let m = detect("Qủa").unwrap();
        assert_eq!((m.cluster, m.uppercase, m.glide()), (Cluster::Qu, false, 'u'));
    }

    #[test]
    fn lifts_tone_off_the_glide() {
        let m = detect("gìa").unwrap();
        assert_eq!(m.glide(), 'i');
        assert_eq!(m.tone, Some(ToneMark::Grave));

        let m = detect("qỤa").unwrap();
        assert_eq!(m.glide(), 'U');
        assert_eq!(m.tone, Some(ToneMark::DotBelow));
    }

    #[test]
    fn short_words_have_no_cluster() {
        assert_eq!(detect(""), None);
        assert_eq!(detect("g"), None);
        assert_eq!(detect("gì"), None);
        assert_eq!(detect("qu"), None);
    }

    #[test]
    fn other_openings_are_not_clusters() {
        assert_eq!(detect("gya"), None);
        assert_eq!(detect("qia"), None);
        assert_eq!(detect("ngia"), None);
        assert_eq!(detect("tua"), None);
        assert_eq!(detect("gưa"), None);
    }
}
