//! The bifid fractionating cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;
use crate::square::Polybius;

/// Félix Delastelle's bifid cipher: fractionation through a Polybius
/// square.
///
/// Within each block, every character's coordinates are written as a
/// column; the grid is then read back row by row and the digits
/// re-paired into new coordinates. A period of 0 treats the whole text
/// as one block. Characters outside the square are a hard error, not a
/// passthrough.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Bifid, Cipher};
///
/// let cipher = Bifid::new("bgwkzqpndsioaxefclumthyvr").unwrap();
/// assert_eq!(cipher.encrypt("fleeatonce").unwrap(), "uaeolwrins");
/// assert_eq!(cipher.decrypt("uaeolwrins").unwrap(), "fleeatonce");
/// ```
#[derive(Debug, Clone)]
pub struct Bifid {
    square: Polybius,
    period: usize,
}

impl Bifid {
    /// Creates a bifid cipher over the classic 25-letter alphabet,
    /// fractionating the whole text as one block.
    ///
    /// # Errors
    /// Propagates [`Polybius`] construction failures.
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        let square = Polybius::new(key)?;
        Self::from_square(square, 0)
    }

    /// Creates a bifid cipher that fractionates in blocks of `period`
    /// characters.
    ///
    /// # Errors
    /// Propagates [`Polybius`] construction failures.
    pub fn with_period(key: &str, period: usize) -> Result<Self, ScytaleError> {
        let square = Polybius::new(key)?;
        Self::from_square(square, period)
    }

    /// Creates a bifid cipher from an existing square. A period of 0
    /// fractionates the whole text as one block.
    ///
    /// # Errors
    /// Returns [`ScytaleError::StructuralMismatch`] unless the square is
    /// two-dimensional.
    pub fn from_square(square: Polybius, period: usize) -> Result<Self, ScytaleError> {
        if square.dimensions() != 2 {
            return Err(ScytaleError::StructuralMismatch(format!(
                "bifid needs a 2-dimensional square, got {} dimensions",
                square.dimensions()
            )));
        }
        Ok(Bifid { square, period })
    }
}

impl Cipher for Bifid {
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

/// Splits text into fractionation blocks; a period of 0 means one block.
pub(super) fn blocks(chars: &[char], period: usize) -> impl Iterator<Item = &[char]> {
    let size = if period == 0 { chars.len().max(1) } else { period };
    chars.chunks(size)
}

/// The forward fractionation shared by bifid and trifid: write each
/// character's coordinates column-wise, read the digit grid back
/// row-major, and re-group into coordinate tuples.
pub(super) fn fractionate(square: &Polybius, block: &[char]) -> Result<String, ScytaleError> {
    let dims = square.dimensions();
    let mut rows: Vec<Vec<usize>> = vec![Vec::with_capacity(block.len()); dims];
    for &c in block {
        for (row, &digit) in rows.iter_mut().zip(square.coordinates(c)?) {
            row.push(digit);
        }
    }
    let flat: Vec<usize> = rows.concat();
    let mut out = String::with_capacity(block.len());
    for coord in flat.chunks(dims) {
        out.push(square.char_at(coord)?);
    }
    Ok(out)
}

/// The inverse fractionation: flatten the coordinates, split the digit
/// stream back into `dims` equal rows, and read tuples column-wise.
pub(super) fn defractionate(square: &Polybius, block: &[char]) -> Result<String, ScytaleError> {
    let dims = square.dimensions();
    let mut flat: Vec<usize> = Vec::with_capacity(block.len() * dims);
    for &c in block {
        flat.extend_from_slice(square.coordinates(c)?);
    }
    let n = block.len();
    let mut out = String::with_capacity(n);
    for i in 0..n {
        let coord: Vec<usize> = (0..dims).map(|d| flat[d * n + i]).collect();
        out.push(square.char_at(&coord)?);
    }
    Ok(out)
}
