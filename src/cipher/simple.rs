//! Caller-supplied substitution tables: simple and homophonic.

use std::collections::HashMap;

use rand::Rng;

use crate::cipher::{invert, substitute, Cipher};
use crate::error::ScytaleError;

/// Monoalphabetic substitution through a mapping supplied directly by
/// the caller.
///
/// The decrypt table is the inverse of the supplied mapping; duplicate
/// values collapse silently with later entries winning.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use scytale::cipher::{Cipher, Simple};
///
/// let mapping: HashMap<char, char> =
///     "abc".chars().zip("xyz".chars()).collect();
/// let cipher = Simple::new(mapping);
/// assert_eq!(cipher.encrypt("cab").unwrap(), "zxy");
/// assert_eq!(cipher.decrypt("zxy").unwrap(), "cab");
/// ```
#[derive(Debug, Clone)]
pub struct Simple {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl Simple {
    /// Creates a simple substitution cipher from the given mapping.
    pub fn new(mapping: HashMap<char, char>) -> Self {
        let inverse = invert(&mapping);
        Simple {
            forward: mapping,
            inverse,
        }
    }
}

impl Cipher for Simple {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.forward))
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.inverse))
    }
}

/// Homophonic substitution: each plaintext character maps to one of
/// several ciphertext alternatives, chosen pseudo-randomly at encrypt
/// time.
///
/// Flattening the frequency distribution this way was the classical
/// defence against frequency analysis. Encryption is deliberately
/// non-deterministic, but every alternative decrypts back to the same
/// plaintext character, so `decrypt(encrypt(text))` always restores the
/// input.
#[derive(Debug, Clone)]
pub struct Homophonic {
    forward: HashMap<char, Vec<char>>,
    inverse: HashMap<char, char>,
}

impl Homophonic {
    /// Creates a homophonic cipher from a mapping of plaintext
    /// characters to their ciphertext alternatives.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if any character has no
    /// alternatives, or if two plaintext characters share one (the
    /// inverse would be ambiguous).
    pub fn new(mapping: HashMap<char, Vec<char>>) -> Result<Self, ScytaleError> {
        let mut inverse = HashMap::new();
        for (&plain, alternatives) in &mapping {
            if alternatives.is_empty() {
                return Err(ScytaleError::InvalidKey(format!(
                    "character {:?} has no ciphertext alternatives",
                    plain
                )));
            }
            for &alt in alternatives {
                if inverse.insert(alt, plain).is_some() {
                    return Err(ScytaleError::InvalidKey(format!(
                        "alternative {:?} belongs to more than one character",
                        alt
                    )));
                }
            }
        }
        Ok(Homophonic {
            forward: mapping,
            inverse,
        })
    }
}

impl Cipher for Homophonic {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut rng = rand::thread_rng();
        Ok(text
            .chars()
            .map(|c| match self.forward.get(&c.to_ascii_lowercase()) {
                Some(alternatives) => {
                    let pick = alternatives[rng.gen_range(0..alternatives.len())];
                    if c.is_ascii_uppercase() {
                        pick.to_ascii_uppercase()
                    } else {
                        pick
                    }
                }
                None => c,
            })
            .collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.inverse))
    }
}
