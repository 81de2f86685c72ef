//! Vietnamese tone-mark placement.
//!
//! Input methods disagree on which vowel of a syllable carries the tone mark
//! ("tòan" or "toàn", "thuỷ" or "thủy"). This crate moves the mark of every
//! word onto the vowel Vietnamese orthography puts it on and leaves
//! everything else alone.
//!
//! ```
//! use vitone::normalize_vietnamese_accent;
//!
//! assert_eq!(normalize_vietnamese_accent("toà nhà tòan"), "tòa nhà toàn");
//! ```
//!
//! The word-level resolver ([`AccentEngine`]) also builds without `std`
//! when the `heapless` feature is enabled.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod buffers;
pub mod cluster;
pub mod engine;
pub mod tone;

#[cfg(feature = "std")]
pub mod mask;
#[cfg(feature = "std")]
pub mod slug;
#[cfg(feature = "std")]
pub mod text;

pub use cluster::{Cluster, ClusterMatch};
pub use engine::{AccentEngine, Placement, VowelOccurrence};
pub use tone::{ToneMark, VowelChar, VowelLetter, classify, compose};

#[cfg(feature = "std")]
pub use mask::{MaskError, mask, try_mask};
#[cfg(feature = "std")]
pub use text::{Segment, VietnameseText, normalize_vietnamese_accent, segments};

#[cfg(all(test, feature = "std"))]
mod tests;
