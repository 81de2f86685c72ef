use crate::engine::VowelOccurrence;

/// Scratch capacity was exceeded; only reachable with the `heapless` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

#[cfg(feature = "heapless")]
pub type CharBuffer = heapless::Vec<char, 32>;

#[cfg(feature = "heapless")]
pub type VowelRun = heapless::Vec<VowelOccurrence, 32>;

#[cfg(feature = "heapless")]
pub type OutBuffer = heapless::String<128>;

#[cfg(not(feature = "heapless"))]
pub type CharBuffer = Vec<char>;

#[cfg(not(feature = "heapless"))]
pub type VowelRun = Vec<VowelOccurrence>;

#[cfg(not(feature = "heapless"))]
pub type OutBuffer = String;

#[cfg(all(not(feature = "std"), not(feature = "heapless")))]
compile_error!(
    "no_std build requires `heapless` feature (use --no-default-features --features heapless)"
);

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_char_buffer() -> CharBuffer {
    CharBuffer::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_vowel_run() -> VowelRun {
    VowelRun::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    OutBuffer::new()
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push_char(buf: &mut CharBuffer, c: char) -> Result<(), Overflow> {
    buf.push(c).map_err(|_| Overflow)
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push_vowel(run: &mut VowelRun, vowel: VowelOccurrence) -> Result<(), Overflow> {
    run.push(vowel).map_err(|_| Overflow)
}

#[cfg(feature = "heapless")]
#[inline(always)]
pub fn push_out(buf: &mut OutBuffer, c: char) -> Result<(), Overflow> {
    buf.push(c).map_err(|()| Overflow)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_char_buffer() -> CharBuffer {
    Vec::with_capacity(32)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_vowel_run() -> VowelRun {
    Vec::with_capacity(8)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn new_out_buffer() -> OutBuffer {
    String::with_capacity(128)
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push_char(buf: &mut CharBuffer, c: char) -> Result<(), Overflow> {
    buf.push(c);
    Ok(())
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push_vowel(run: &mut VowelRun, vowel: VowelOccurrence) -> Result<(), Overflow> {
    run.push(vowel);
    Ok(())
}

#[cfg(not(feature = "heapless"))]
#[inline(always)]
pub fn push_out(buf: &mut OutBuffer, c: char) -> Result<(), Overflow> {
    buf.push(c);
    Ok(())
}
