//! The columnar transposition cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;

/// Columnar transposition: the text is written into rows under the key
/// and the columns are read off in alphabetical key order.
///
/// The key's characters must be unique so the column order is
/// unambiguous. The text is padded to fill the final row; decryption
/// strips the trailing padding.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Column};
///
/// let cipher = Column::new("german").unwrap();
/// assert_eq!(
///     cipher.encrypt("defendtheeastwallofthecastle").unwrap(),
///     "nalcxehwttdttfseeleedsoaxfeahl"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    key: Vec<char>,
    order: Vec<usize>,
    pad: char,
}

impl Column {
    /// Creates a columnar transposition with padding `x`.
    ///
    /// # Errors
    /// See [`with_pad`](Self::with_pad).
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        Self::with_pad(key, 'x')
    }

    /// Creates a columnar transposition with an explicit padding
    /// character.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if the key is empty or its
    /// characters are not pairwise unique.
    pub fn with_pad(key: &str, pad: char) -> Result<Self, ScytaleError> {
        let key: Vec<char> = key.chars().collect();
        if key.is_empty() {
            return Err(ScytaleError::InvalidKey("key is empty".into()));
        }
        for (i, c) in key.iter().enumerate() {
            if key[..i].contains(c) {
                return Err(ScytaleError::InvalidKey(
                    "key characters must be unique".into(),
                ));
            }
        }
        let mut order: Vec<usize> = (0..key.len()).collect();
        order.sort_by_key(|&i| key[i]);
        Ok(Column { key, order, pad })
    }
}

impl Cipher for Column {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut chars: Vec<char> = text.chars().collect();
        while chars.len() % self.key.len() != 0 {
            chars.push(self.pad);
        }
        let mut out = String::with_capacity(chars.len());
        for &i in &self.order {
            out.extend(chars.iter().skip(i).step_by(self.key.len()));
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.chars().collect();
        let width = self.key.len();
        if chars.len() % width != 0 {
            return Err(ScytaleError::MalformedInput(format!(
                "ciphertext length {} is not a multiple of the key length {}",
                chars.len(),
                width
            )));
        }
        let height = chars.len() / width;

        // Columns arrive in sorted-key order; put them back under the
        // original key positions.
        let mut columns: Vec<&[char]> = vec![&[]; width];
        for (slot, &i) in self.order.iter().enumerate() {
            columns[i] = &chars[slot * height..(slot + 1) * height];
        }

        let mut out = String::with_capacity(chars.len());
        for r in 0..height {
            for column in &columns {
                out.push(column[r]);
            }
        }
        while out.ends_with(self.pad) {
            out.pop();
        }
        Ok(out)
    }
}
