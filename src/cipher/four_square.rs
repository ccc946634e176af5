//! The four-square digraph substitution cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;
use crate::square::{Polybius, ALPHABET_25};

/// Félix Delastelle's four-square cipher: two plain squares on one
/// diagonal and two keyed squares on the other.
///
/// Each plaintext digraph is located in the plain squares; the
/// ciphertext digraph is read from the keyed squares at the crossing
/// coordinates. Input is lowercased and filtered to the alphabet, and an
/// odd-length text is completed with the padding character.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, FourSquare};
///
/// let cipher = FourSquare::new("example", "keyword").unwrap();
/// assert_eq!(cipher.encrypt("help").unwrap(), "fynf");
/// assert_eq!(cipher.decrypt("fynf").unwrap(), "help");
/// ```
#[derive(Debug, Clone)]
pub struct FourSquare {
    plain: Polybius,
    upper: Polybius,
    lower: Polybius,
    padding: char,
}

impl FourSquare {
    /// Creates a four-square cipher over the classic 25-letter alphabet
    /// with padding `x`.
    ///
    /// # Errors
    /// See [`with_options`](Self::with_options).
    pub fn new(key1: &str, key2: &str) -> Result<Self, ScytaleError> {
        Self::with_options(key1, key2, ALPHABET_25, 'x')
    }

    /// Creates a four-square cipher over an arbitrary alphabet.
    ///
    /// # Errors
    /// - [`ScytaleError::InvalidKey`] if the padding is outside the
    ///   alphabet, or either key contains a character outside it.
    /// - [`ScytaleError::StructuralMismatch`] if the alphabet does not
    ///   fill a square.
    pub fn with_options(
        key1: &str,
        key2: &str,
        alphabet: &str,
        padding: char,
    ) -> Result<Self, ScytaleError> {
        if !alphabet.contains(padding) {
            return Err(ScytaleError::InvalidKey(format!(
                "padding {:?} is not in the alphabet",
                padding
            )));
        }
        let plain = Polybius::with_alphabet("", alphabet, 2)?;
        let upper = Polybius::with_alphabet(&key1.to_lowercase(), alphabet, 2)?;
        let lower = Polybius::with_alphabet(&key2.to_lowercase(), alphabet, 2)?;
        Ok(FourSquare {
            plain,
            upper,
            lower,
            padding,
        })
    }

    fn normalize(&self, text: &str) -> Vec<char> {
        text.to_lowercase()
            .chars()
            .filter(|&c| self.plain.contains(c))
            .collect()
    }
}

impl Cipher for FourSquare {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut chars = self.normalize(text);
        if chars.len() % 2 != 0 {
            chars.push(self.padding);
        }
        let mut out = String::with_capacity(chars.len());
        for pair in chars.chunks(2) {
            let ca = self.plain.coordinates(pair[0])?;
            let cb = self.plain.coordinates(pair[1])?;
            out.push(self.upper.char_at(&[ca[0], cb[1]])?);
            out.push(self.lower.char_at(&[cb[0], ca[1]])?);
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.len() % 2 != 0 {
            return Err(ScytaleError::MalformedInput(
                "four-square ciphertext must have even length".into(),
            ));
        }
        let mut out = String::with_capacity(chars.len());
        for pair in chars.chunks(2) {
            let ca = self.upper.coordinates(pair[0])?;
            let cb = self.lower.coordinates(pair[1])?;
            out.push(self.plain.char_at(&[ca[0], cb[1]])?);
            out.push(self.plain.char_at(&[cb[0], ca[1]])?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption() {
        let cipher = FourSquare::new("example", "keyword").unwrap();
        assert_eq!(cipher.encrypt("help").unwrap(), "fynf");
        // Case folding and passthrough filtering happen before pairing.
        assert_eq!(cipher.encrypt("He lp!").unwrap(), "fynf");
    }

    #[test]
    fn test_decryption() {
        let cipher = FourSquare::new("example", "keyword").unwrap();
        assert_eq!(cipher.decrypt("fynf").unwrap(), "help");
    }

    #[test]
    fn test_odd_input_is_padded() {
        let cipher = FourSquare::new("example", "keyword").unwrap();
        let ciphertext = cipher.encrypt("hel").unwrap();
        assert_eq!(ciphertext.len(), 4);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "helx");
    }

    #[test]
    fn test_round_trip() {
        let cipher = FourSquare::new("example", "keyword").unwrap();
        let plaintext = "fourscoreandsevenyearsago";
        let ciphertext = cipher.encrypt(plaintext).unwrap();
        // 25 letters pad to 26; the padding survives the round trip.
        assert_eq!(
            cipher.decrypt(&ciphertext).unwrap(),
            "fourscoreandsevenyearsagox"
        );
    }

    #[test]
    fn test_malformed_ciphertext() {
        let cipher = FourSquare::new("example", "keyword").unwrap();
        assert!(matches!(
            cipher.decrypt("abc"),
            Err(ScytaleError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_bad_construction() {
        // Padding outside the alphabet.
        assert!(FourSquare::with_options("a", "b", "abcd", 'x').is_err());
        // Key character outside the alphabet.
        assert!(FourSquare::new("example!", "keyword").is_err());
        // Alphabet that does not fill a square.
        assert!(matches!(
            FourSquare::with_options("", "", "abcdef", 'a'),
            Err(ScytaleError::StructuralMismatch(_))
        ));
    }
}
