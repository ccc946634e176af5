//! The Atbash mirror cipher.

use std::collections::HashMap;

use crate::cipher::{substitute, Cipher, LOWERCASE};
use crate::error::ScytaleError;

/// Monoalphabetic substitution pairing an alphabet with its own
/// reverse: the first letter swaps with the last, the second with the
/// second-to-last, and so on.
///
/// Originally a Hebrew scribal tradition (aleph-tav-beth-shin, whence
/// the name). Reciprocal: encryption and decryption are the same
/// operation.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Atbash, Cipher};
///
/// let cipher = Atbash::new();
/// assert_eq!(cipher.encrypt("test").unwrap(), "gvhg");
/// assert_eq!(cipher.encrypt("gvhg").unwrap(), "test");
/// ```
#[derive(Debug, Clone)]
pub struct Atbash {
    mapping: HashMap<char, char>,
}

impl Atbash {
    /// Creates an Atbash cipher over the plain lowercase alphabet.
    pub fn new() -> Self {
        Self::with_alphabet(LOWERCASE)
    }

    /// Creates an Atbash cipher over an arbitrary alphabet.
    ///
    /// Duplicate alphabet characters are permitted; later pairings win,
    /// so an alphabet followed by its own reverse yields the identity.
    pub fn with_alphabet(alphabet: &str) -> Self {
        let mut mapping = HashMap::new();
        for (a, b) in alphabet.chars().zip(alphabet.chars().rev()) {
            mapping.insert(a, b);
        }
        Atbash { mapping }
    }
}

impl Default for Atbash {
    fn default() -> Self {
        Self::new()
    }
}

impl Cipher for Atbash {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.mapping))
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption() {
        let cipher = Atbash::new();
        assert_eq!(cipher.encrypt("test").unwrap(), "gvhg");
        assert_eq!(cipher.encrypt("CaSepReSeRvE").unwrap(), "XzHvkIvHvIeV");
        assert_eq!(cipher.encrypt(".#~").unwrap(), ".#~");
    }

    #[test]
    fn test_custom_alphabet() {
        let cipher = Atbash::with_alphabet("abc");
        assert_eq!(cipher.encrypt("abc").unwrap(), "cba");
        assert_eq!(cipher.encrypt("cabvc").unwrap(), "acbva");
    }

    #[test]
    fn test_palindromic_alphabet_is_identity() {
        let cipher = Atbash::with_alphabet("abcdefghijklmnopqrstuvwxyzzyxwvutsrqponmlkjihgfedcba");
        assert_eq!(cipher.encrypt("identity").unwrap(), "identity");
    }

    #[test]
    fn test_reciprocal() {
        let cipher = Atbash::new();
        assert_eq!(
            cipher.encrypt("test").unwrap(),
            cipher.decrypt("test").unwrap()
        );
        assert_eq!(
            cipher.encrypt(&cipher.encrypt("test").unwrap()).unwrap(),
            "test"
        );
    }
}
