//! The keyword substitution cipher.

use std::collections::HashMap;

use crate::cipher::{invert, substitute, Cipher, LOWERCASE};
use crate::error::ScytaleError;

/// Monoalphabetic substitution whose cipher alphabet is the
/// deduplicated key followed by the unused letters of the plain
/// alphabet.
///
/// Key characters need not be letters; whatever they are, they are
/// aligned positionally against the plain lowercase alphabet.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Keyword};
///
/// let cipher = Keyword::new("kryptos");
/// assert_eq!(cipher.encrypt("test").unwrap(), "ntmn");
/// assert_eq!(cipher.decrypt("ntmn").unwrap(), "test");
/// ```
#[derive(Debug, Clone)]
pub struct Keyword {
    forward: HashMap<char, char>,
    inverse: HashMap<char, char>,
}

impl Keyword {
    /// Creates a keyword cipher from the given key.
    pub fn new(key: &str) -> Self {
        let mut targets: Vec<char> = Vec::with_capacity(LOWERCASE.len());
        for c in key.chars() {
            if !targets.contains(&c) {
                targets.push(c);
            }
        }
        targets.extend(LOWERCASE.chars().filter(|c| !key.contains(*c)));

        let forward: HashMap<char, char> = LOWERCASE.chars().zip(targets).collect();
        let inverse = invert(&forward);
        Keyword { forward, inverse }
    }
}

impl Cipher for Keyword {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.forward))
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        Ok(substitute(text, &self.inverse))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption() {
        assert_eq!(Keyword::new("kryptos").encrypt("test").unwrap(), "ntmn");
        assert_eq!(
            Keyword::new("secret").encrypt("CaSepReSeRvE").unwrap(),
            "CsPtmOtPtOvT"
        );
        assert_eq!(Keyword::new("hush").encrypt(".#~").unwrap(), ".#~");
    }

    #[test]
    fn test_decryption() {
        assert_eq!(Keyword::new("kryptos").decrypt("ntmn").unwrap(), "test");
        assert_eq!(
            Keyword::new("secret").decrypt("CsPtmOtPtOvT").unwrap(),
            "CaSepReSeRvE"
        );
        assert_eq!(Keyword::new("hush").decrypt(".#~").unwrap(), ".#~");
    }

    #[test]
    fn test_repeated_key_collapses() {
        assert_eq!(
            Keyword::new("kryptos").encrypt("test").unwrap(),
            Keyword::new("kryptoskryptoskryptos").encrypt("test").unwrap()
        );
    }

    #[test]
    fn test_full_permutation_keys_invert_each_other() {
        let key1 = "dblkhjrevscmazyqipuwofgxtn";
        let key2 = "mbkahvweqfdclzurpgjysitxon";
        assert_eq!(
            Keyword::new(key1).encrypt("test").unwrap(),
            Keyword::new(key2).decrypt("test").unwrap()
        );
        assert_eq!(
            Keyword::new(key1).decrypt("test").unwrap(),
            Keyword::new(key2).encrypt("test").unwrap()
        );
    }

    #[test]
    fn test_degenerate_keys_are_identity() {
        assert_eq!(Keyword::new("").encrypt("test").unwrap(), "test");
        assert_eq!(Keyword::new("abc").encrypt("test").unwrap(), "test");
    }

    #[test]
    fn test_non_letter_key() {
        let cipher = Keyword::new(".#;@");
        assert_eq!(cipher.encrypt("ddbabcbc").unwrap(), "@@#.#;#;");
    }
}
