//! The Vigenère polyalphabetic cipher.

use crate::cipher::{Cipher, LOWERCASE};
use crate::error::ScytaleError;
use crate::tabula::TabulaRecta;

/// Polyalphabetic substitution driven by a cyclically repeated
/// keystream.
///
/// Each plaintext character is combined with its keystream character
/// through a tabula recta: addition of alphabet indices to encrypt,
/// subtraction to decrypt. Both tables are precomputed at construction.
/// Input is lowercased; characters outside the alphabet are a hard
/// error.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Vigenere};
///
/// let cipher = Vigenere::new("lemon").unwrap();
/// assert_eq!(cipher.encrypt("attackatdawn").unwrap(), "lxfopvefrnhr");
/// assert_eq!(cipher.decrypt("lxfopvefrnhr").unwrap(), "attackatdawn");
/// ```
#[derive(Debug, Clone)]
pub struct Vigenere {
    key: Vec<char>,
    forward: TabulaRecta,
    reverse: TabulaRecta,
}

impl Vigenere {
    /// Creates a Vigenère cipher over the plain lowercase alphabet.
    ///
    /// # Errors
    /// See [`with_alphabet`](Self::with_alphabet).
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        Self::with_alphabet(key, LOWERCASE)
    }

    /// Creates a Vigenère cipher over an arbitrary alphabet.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if the key is empty, falls
    /// outside the alphabet, or the alphabet has duplicates.
    pub fn with_alphabet(key: &str, alphabet: &str) -> Result<Self, ScytaleError> {
        let key: Vec<char> = key.to_lowercase().chars().collect();
        if key.is_empty() {
            return Err(ScytaleError::InvalidKey("key is empty".into()));
        }
        let forward = TabulaRecta::new(alphabet)?;
        let reverse = TabulaRecta::reversed(alphabet)?;
        if let Some(&c) = key.iter().find(|c| !forward.contains(**c)) {
            return Err(ScytaleError::InvalidKey(format!(
                "key character {:?} is not in the alphabet",
                c
            )));
        }
        Ok(Vigenere {
            key,
            forward,
            reverse,
        })
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        text.to_lowercase()
            .chars()
            .zip(self.key.iter().cycle())
            .map(|(c, &k)| self.forward.lookup(c, k))
            .collect()
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        text.to_lowercase()
            .chars()
            .zip(self.key.iter().cycle())
            .map(|(c, &k)| self.reverse.lookup(c, k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption() {
        let cipher = Vigenere::new("lemon").unwrap();
        assert_eq!(cipher.encrypt("attackatdawn").unwrap(), "lxfopvefrnhr");
    }

    #[test]
    fn test_decryption() {
        let cipher = Vigenere::new("lemon").unwrap();
        assert_eq!(cipher.decrypt("lxfopvefrnhr").unwrap(), "attackatdawn");
    }

    #[test]
    fn test_single_letter_key_is_caesar() {
        let cipher = Vigenere::new("d").unwrap();
        assert_eq!(cipher.encrypt("test").unwrap(), "whvw");
    }

    #[test]
    fn test_key_a_is_identity() {
        let cipher = Vigenere::new("a").unwrap();
        assert_eq!(cipher.encrypt("anything").unwrap(), "anything");
    }

    #[test]
    fn test_case_is_folded() {
        let cipher = Vigenere::new("lemon").unwrap();
        assert_eq!(cipher.encrypt("AttackAtDawn").unwrap(), "lxfopvefrnhr");
    }

    #[test]
    fn test_unknown_characters_fail() {
        let cipher = Vigenere::new("lemon").unwrap();
        assert!(matches!(
            cipher.encrypt("attack at dawn"),
            Err(ScytaleError::KeyNotFound(_))
        ));
    }

    #[test]
    fn test_bad_keys() {
        assert!(Vigenere::new("").is_err());
        assert!(Vigenere::new("not a key").is_err());
    }
}
