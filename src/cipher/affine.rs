//! The affine cipher.

use std::collections::HashMap;

use crate::cipher::{invert, substitute, Cipher, LOWERCASE};
use crate::error::ScytaleError;
use crate::modular::mmi;

/// Monoalphabetic substitution mapping the letter at index `i` to the
/// letter at index `a*i + b` modulo the alphabet length.
///
/// Decryption maps index `i` back through `mmi(a, n) * (i - b) mod n`,
/// so `a` must be coprime to the alphabet length for the cipher to be
/// invertible.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Affine, Cipher};
///
/// let cipher = Affine::new(5, 7).unwrap();
/// assert_eq!(cipher.encrypt("Defend the east wall").unwrap(),
///            "Wbgbuw yqb bhty nhkk");
/// assert!(Affine::new(2, 4).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Affine {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl Affine {
    /// Creates an affine cipher over the plain lowercase alphabet.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if `a` has no multiplicative
    /// inverse modulo 26.
    pub fn new(a: i64, b: i64) -> Result<Self, ScytaleError> {
        Self::with_alphabet(a, b, LOWERCASE)
    }

    /// Creates an affine cipher over an arbitrary alphabet.
    ///
    /// The alphabet is lowercased before use; case is re-applied per
    /// character during substitution.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if `a` has no multiplicative
    /// inverse modulo the alphabet length.
    pub fn with_alphabet(a: i64, b: i64, alphabet: &str) -> Result<Self, ScytaleError> {
        let letters: Vec<char> = alphabet.to_lowercase().chars().collect();
        let n = letters.len() as i64;
        mmi(a, n).map_err(|_| {
            ScytaleError::InvalidKey(format!(
                "multiplier {} is not prime relative to the alphabet length {}",
                a, n
            ))
        })?;

        let mut forward = HashMap::with_capacity(letters.len());
        for (i, &c) in letters.iter().enumerate() {
            let target = (a * i as i64 + b).rem_euclid(n) as usize;
            forward.insert(c, letters[target]);
        }
        let inverse = invert(&forward);
        Ok(Affine { forward, inverse })
    }
}

impl Cipher for Affine {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.forward))
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.inverse))
    }
}
