//! The trifid fractionating cipher.

use crate::cipher::bifid::{blocks, defractionate, fractionate};
use crate::cipher::Cipher;
use crate::error::ScytaleError;
use crate::square::Polybius;

/// Félix Delastelle's trifid cipher: the bifid mechanism over a
/// three-dimensional coordinate cube.
///
/// The key supplies the cube's entire alphabet, so its deduplicated
/// length must be a perfect cube (8 for a 2x2x2 cube, 27 for the
/// classic 3x3x3 one).
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Trifid};
///
/// let cipher = Trifid::with_period("epsducvwym.zlkxnbtfgorijhaq", 5).unwrap();
/// assert_eq!(
///     cipher.encrypt("defendtheeastwallofthecastle").unwrap(),
///     "suefecphsegyyjiximfofocejlrf"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Trifid {
    square: Polybius,
    period: usize,
}

impl Trifid {
    /// Creates a trifid cipher fractionating the whole text as one
    /// block.
    ///
    /// # Errors
    /// Returns [`ScytaleError::StructuralMismatch`] if the deduplicated
    /// key length has no integral cube root.
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        Self::with_period(key, 0)
    }

    /// Creates a trifid cipher that fractionates in blocks of `period`
    /// characters.
    ///
    /// # Errors
    /// Returns [`ScytaleError::StructuralMismatch`] if the deduplicated
    /// key length has no integral cube root.
    pub fn with_period(key: &str, period: usize) -> Result<Self, ScytaleError> {
        let mut alphabet = String::with_capacity(key.len());
        for c in key.chars() {
            if !alphabet.contains(c) {
                alphabet.push(c);
            }
        }
        let square = Polybius::with_alphabet(key, &alphabet, 3)?;
        Self::from_square(square, period)
    }

    /// Creates a trifid cipher from an existing cube.
    ///
    /// # Errors
    /// Returns [`ScytaleError::StructuralMismatch`] unless the square is
    /// three-dimensional.
    pub fn from_square(square: Polybius, period: usize) -> Result<Self, ScytaleError> {
        if square.dimensions() != 3 {
            return Err(ScytaleError::StructuralMismatch(format!(
                "trifid needs a 3-dimensional square, got {} dimensions",
                square.dimensions()
            )));
        }
        Ok(Trifid { square, period })
    }
}

impl Cipher for Trifid {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(chars.len());
        for block in blocks(&chars, self.period) {
            out.push_str(&fractionate(&self.square, block)?);
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.chars().collect();
        let mut out = String::with_capacity(chars.len());
        for block in blocks(&chars, self.period) {
            out.push_str(&defractionate(&self.square, block)?);
        }
        Ok(out)
    }
}
