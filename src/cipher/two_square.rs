//! The two-square digraph substitution cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;
use crate::square::{Polybius, ALPHABET_25};

/// Arrangement of the two squares relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arrangement {
    Vertical,
    Horizontal,
}

/// Félix Delastelle's two-square (double Playfair) cipher.
///
/// The first letter of a digraph is located in the first square, the
/// second in the second square. A pair aligned on the shared axis
/// (same column for the vertical arrangement, same row for the
/// horizontal one) passes unchanged; otherwise the opposite-axis
/// coordinates are swapped between the squares. The transformation is
/// an involution, so encryption and decryption are the same operation.
///
/// A trailing unpaired character is preserved unchanged.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, TwoSquare};
///
/// let cipher = TwoSquare::new("example", "keyword").unwrap();
/// assert_eq!(cipher.encrypt("help").unwrap(), "hecm");
/// assert_eq!(cipher.decrypt("hecm").unwrap(), "help");
/// ```
#[derive(Debug, Clone)]
pub struct TwoSquare {
    first: Polybius,
    second: Polybius,
    arrangement: Arrangement,
}

impl TwoSquare {
    /// Creates a vertical two-square cipher over the classic 25-letter
    /// alphabet.
    ///
    /// # Errors
    /// Propagates [`Polybius`] construction failures for either key.
    pub fn new(key1: &str, key2: &str) -> Result<Self, ScytaleError> {
        Self::build(key1, key2, Arrangement::Vertical)
    }

    /// Creates a horizontal two-square cipher.
    ///
    /// # Errors
    /// Propagates [`Polybius`] construction failures for either key.
    pub fn horizontal(key1: &str, key2: &str) -> Result<Self, ScytaleError> {
        Self::build(key1, key2, Arrangement::Horizontal)
    }

    fn build(key1: &str, key2: &str, arrangement: Arrangement) -> Result<Self, ScytaleError> {
        let first = Polybius::with_alphabet(&key1.to_lowercase(), ALPHABET_25, 2)?;
        let second = Polybius::with_alphabet(&key2.to_lowercase(), ALPHABET_25, 2)?;
        Ok(TwoSquare {
            first,
            second,
            arrangement,
        })
    }

    fn normalize(&self, text: &str) -> Vec<char> {
        text.to_lowercase()
            .chars()
            .filter(|&c| self.first.contains(c))
            .collect()
    }

    /// The shared involution behind both directions.
    fn transform(&self, text: &str) -> Result<String, ScytaleError> {
        let chars = self.normalize(text);
        let mut out = String::with_capacity(chars.len());
        for pair in chars.chunks(2) {
            if pair.len() == 1 {
                out.push(pair[0]);
                break;
            }
            let ca = self.first.coordinates(pair[0])?;
            let cb = self.second.coordinates(pair[1])?;
            let (na, nb) = match self.arrangement {
                Arrangement::Vertical if ca[1] == cb[1] => {
                    ([ca[0], ca[1]], [cb[0], cb[1]])
                }
                Arrangement::Vertical => ([ca[0], cb[1]], [cb[0], ca[1]]),
                Arrangement::Horizontal if ca[0] == cb[0] => {
                    ([ca[0], ca[1]], [cb[0], cb[1]])
                }
                Arrangement::Horizontal => ([cb[0], ca[1]], [ca[0], cb[1]]),
            };
            out.push(self.first.char_at(&na)?);
            out.push(self.second.char_at(&nb)?);
        }
        Ok(out)
    }
}

impl Cipher for TwoSquare {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        self.transform(text)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        self.transform(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_encryption() {
        let cipher = TwoSquare::new("example", "keyword").unwrap();
        // h and e share a column, so the first pair passes unchanged.
        assert_eq!(cipher.encrypt("help").unwrap(), "hecm");
    }

    #[test]
    fn test_self_inverse() {
        let cipher = TwoSquare::new("example", "keyword").unwrap();
        let plaintext = "thequickbrownfoxiumpsoverthelazydog";
        let ciphertext = cipher.encrypt(plaintext).unwrap();
        assert_eq!(cipher.encrypt(&ciphertext).unwrap(), plaintext);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_horizontal_self_inverse() {
        let cipher = TwoSquare::horizontal("example", "keyword").unwrap();
        let plaintext = "meetmebythecanal";
        let ciphertext = cipher.encrypt(plaintext).unwrap();
        assert_ne!(ciphertext, plaintext);
        assert_eq!(cipher.encrypt(&ciphertext).unwrap(), plaintext);
    }

    #[test]
    fn test_trailing_single_is_preserved() {
        let cipher = TwoSquare::new("example", "keyword").unwrap();
        let ciphertext = cipher.encrypt("hel").unwrap();
        assert_eq!(ciphertext.len(), 3);
        assert!(ciphertext.ends_with('l'));
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "hel");
    }

    #[test]
    fn test_case_folding_and_filtering() {
        let cipher = TwoSquare::new("example", "keyword").unwrap();
        assert_eq!(
            cipher.encrypt("He lp!").unwrap(),
            cipher.encrypt("help").unwrap()
        );
    }

    #[test]
    fn test_bad_keys() {
        assert!(TwoSquare::new("j", "keyword").is_err());
        assert!(TwoSquare::new("example", "key word").is_err());
    }
}
