//! The native machine word a [`DoubleWord`](crate::DoubleWord) doubles.

/// The single-word base type.
///
/// Feature `u32` forces the word to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the word to be 64-bit even on 32-bit architectures.
///
/// This is done only for easier testing (a 64-bit host can then exercise the
/// 32-bit-word configuration the type was designed around).
pub type Word = word::Word;

/// Signed twin of [`Word`].
pub type SignedWord = word::SignedWord;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod word {
    pub type Word = u32;
    pub type SignedWord = i32;
}

#[cfg(feature = "u64")]
mod word {
    pub type Word = u64;
    pub type SignedWord = i64;
}
