//! The autokey polyalphabetic cipher.

use crate::cipher::{Cipher, LOWERCASE};
use crate::error::ScytaleError;
use crate::tabula::TabulaRecta;

/// Vigenère's stronger variant: the keystream is the key followed by
/// the plaintext itself, so the key never repeats.
///
/// Encryption can zip plaintext against the extended keystream in one
/// pass. Decryption is inherently sequential: each recovered character
/// extends the keystream used for the characters after it.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Autokey, Cipher};
///
/// let cipher = Autokey::new("queenly").unwrap();
/// assert_eq!(cipher.encrypt("attackatdawn").unwrap(), "qnxepvytwtwp");
/// assert_eq!(cipher.decrypt("qnxepvytwtwp").unwrap(), "attackatdawn");
/// ```
#[derive(Debug, Clone)]
pub struct Autokey {
    key: Vec<char>,
    forward: TabulaRecta,
    reverse: TabulaRecta,
}

impl Autokey {
    /// Creates an autokey cipher over the plain lowercase alphabet.
    ///
    /// # Errors
    /// See [`with_alphabet`](Self::with_alphabet).
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        Self::with_alphabet(key, LOWERCASE)
    }

    /// Creates an autokey cipher over an arbitrary alphabet.
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
        Ok(Autokey {
            key,
            forward,
            reverse,
        })
    }
}

impl Cipher for Autokey {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let plain: Vec<char> = text.to_lowercase().chars().collect();
        let keystream = self.key.iter().chain(plain.iter());
        plain
            .iter()
            .zip(keystream)
            .map(|(&c, &k)| self.forward.lookup(c, k))
            .collect()
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let ciphertext: Vec<char> = text.to_lowercase().chars().collect();
        let mut keystream = self.key.clone();
        let mut out = String::with_capacity(ciphertext.len());
        for (i, &c) in ciphertext.iter().enumerate() {
            let p = self.reverse.lookup(c, keystream[i])?;
            keystream.push(p);
            out.push(p);
        }
        Ok(out)
    }
}
