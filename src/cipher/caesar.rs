//! The Caesar shift cipher.

use std::collections::HashMap;

use crate::cipher::{invert, substitute, Cipher, LOWERCASE};
use crate::error::ScytaleError;

/// Monoalphabetic substitution replacing each letter with the letter a
/// fixed number of positions down the alphabet.
///
/// Named after Julius Caesar, who supposedly used it for his personal
/// correspondence. Case is preserved and non-alphabetic characters pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Caesar, Cipher};
///
/// let cipher = Caesar::new(3);
/// assert_eq!(cipher.encrypt("test").unwrap(), "whvw");
/// assert_eq!(cipher.decrypt("whvw").unwrap(), "test");
/// ```
#[derive(Debug, Clone)]
pub struct Caesar {
    shift: i64,
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl Caesar {
    /// Creates a Caesar cipher with the given shift.
    ///
    /// The shift is reduced modulo 26, so negative and oversized keys
    /// are fine: `Caesar::new(-22)` equals `Caesar::new(4)`.
    pub fn new(shift: i64) -> Self {
        let shift = shift.rem_euclid(26);
        let letters: Vec<char> = LOWERCASE.chars().collect();
        let mut forward = HashMap::with_capacity(letters.len());
        for (i, &c) in letters.iter().enumerate() {
            forward.insert(c, letters[(i + shift as usize) % letters.len()]);
        }
        let inverse = invert(&forward);
        Caesar {
            shift,
            forward,
            inverse,
        }
    }

    /// ROT13: the Caesar cipher with the shift fixed at 13.
    ///
    /// A reciprocal cipher; two successive encryptions restore the
    /// original text.
    ///
    /// # Examples
    ///
    /// ```
    /// use scytale::cipher::{Caesar, Cipher};
    ///
    /// let rot13 = Caesar::rot13();
    /// assert_eq!(rot13.encrypt("test").unwrap(), "grfg");
    /// assert_eq!(rot13.encrypt("grfg").unwrap(), "test");
    /// ```
    pub fn rot13() -> Self {
        Self::new(13)
    }

    /// The normalized shift value.
    pub fn shift(&self) -> i64 {
        self.shift
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.forward))
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.inverse))
    }
}
