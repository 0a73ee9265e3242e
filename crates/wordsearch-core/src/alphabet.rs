//! Filler alphabets.
//!
//! Empty cells left over after word placement are camouflaged with
//! characters that look like they belong next to the hidden words. An
//! [`Alphabet`] is a pure mapping from a pseudo-random draw to one
//! well-formed character of a script, which keeps the placement and
//! collision logic script-agnostic.

/// Maps a pseudo-random draw to a plausible character of one script.
pub trait Alphabet {
    /// Produce a filler character from a raw pseudo-random draw.
    fn filler(&self, draw: u32) -> char;

    /// Short name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Unicode index (into the standard choseong table) of each initial
/// consonant the filler draws from. The double consonants are left out so
/// the synthetic syllables look like ordinary Korean text.
const CHOSEONG: [u32; 14] = [0, 2, 3, 5, 6, 7, 9, 11, 12, 14, 15, 16, 17, 18];

/// All 21 medial vowels are eligible.
const JUNGSEONG_COUNT: u32 = 21;

/// Unicode index (into the standard jongseong table) of each eligible
/// final consonant. Index 0 means no final consonant; cluster finals are
/// left out.
const JONGSEONG: [u32; 15] = [0, 1, 4, 7, 8, 16, 17, 19, 21, 22, 23, 24, 25, 26, 27];

/// First code point of the precomposed Hangul syllables block.
const SYLLABLE_BASE: u32 = 0xAC00;

/// Composes complete Hangul syllables from single jamo.
///
/// A syllable is `base + choseong * 588 + jungseong * 28 + jongseong`,
/// with each component's standard Unicode table index. Drawing the
/// components independently produces nonsense syllables, which is the
/// point: they blend in with Korean words without spelling anything.
pub struct Hangul;

impl Alphabet for Hangul {
    fn filler(&self, draw: u32) -> char {
        let cho = CHOSEONG[(draw % CHOSEONG.len() as u32) as usize];
        let rest = draw / CHOSEONG.len() as u32;
        let jung = rest % JUNGSEONG_COUNT;
        let rest = rest / JUNGSEONG_COUNT;
        let jong = JONGSEONG[(rest % JONGSEONG.len() as u32) as usize];
        let code = SYLLABLE_BASE + cho * 588 + jung * 28 + jong;
        // Every composed code point lands inside the syllables block.
        char::from_u32(code).unwrap_or('가')
    }

    fn name(&self) -> &'static str {
        "hangul"
    }
}

/// Lowercase Latin letters, for English word lists.
pub struct Latin;

impl Alphabet for Latin {
    fn filler(&self, draw: u32) -> char {
        (b'a' + (draw % 26) as u8) as char
    }

    fn name(&self) -> &'static str {
        "latin"
    }
}
