//! The Playfair digraph substitution cipher.

use crate::cipher::{Cipher, LOWERCASE};
use crate::error::ScytaleError;
use crate::square::Polybius;

/// Polygraphic substitution over a 5x5 keyed square, invented by
/// Charles Wheatstone and popularized by Lord Playfair.
///
/// One letter is merged into another to fit the alphabet into the
/// square (j into i by default). Plaintext is lowercased, filtered to
/// the square's alphabet, and tokenized into digraphs: a `breaker` is
/// inserted between doubled letters and a `padding` character completes
/// a trailing single. Each digraph then moves through the square: a
/// rectangle swaps columns, a shared row shifts columns, a shared
/// column shifts rows.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Playfair};
///
/// let cipher = Playfair::new("playfair example").unwrap();
/// assert_eq!(
///     cipher.encrypt("Hide the gold in the tree stump").unwrap(),
///     "bmodzbxdnabekudmuixmmouvif"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Playfair {
    square: Polybius,
    breaker: char,
    padding: char,
    omitted: Vec<(char, Option<char>)>,
}

impl Playfair {
    /// Creates a Playfair cipher with the conventional parameters:
    /// breaker `x`, padding `z`, and j merged into i.
    ///
    /// # Errors
    /// See [`with_options`](Self::with_options).
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        Self::with_options(key, 'x', 'z', &[('j', Some('i'))])
    }

    /// Creates a Playfair cipher with explicit breaker, padding, and
    /// omitted-letter handling.
    ///
    /// Each `omitted` entry maps a letter to its replacement, or to
    /// `None` to drop it from the text entirely. The omitted letters are
    /// removed from the alphabet, so exactly one must be given for the
    /// remaining 25 letters to fill the square.
    ///
    /// # Errors
    /// - [`ScytaleError::InvalidKey`] if an omitted letter or its
    ///   replacement is not a lowercase letter, a replacement does not
    ///   remain in the reduced alphabet, or the breaker or padding falls
    ///   outside it.
    /// - [`ScytaleError::StructuralMismatch`] if the reduced alphabet
    ///   does not fill a square.
    pub fn with_options(
        key: &str,
        breaker: char,
        padding: char,
        omitted: &[(char, Option<char>)],
    ) -> Result<Self, ScytaleError> {
        for &(from, to) in omitted {
            if !from.is_ascii_lowercase() {
                return Err(ScytaleError::InvalidKey(format!(
                    "omitted character {:?} is not a lowercase letter",
                    from
                )));
            }
            match to {
                Some(to) if !to.is_ascii_lowercase() => {
                    return Err(ScytaleError::InvalidKey(format!(
                        "replacement {:?} is not a lowercase letter",
                        to
                    )));
                }
                Some(to) if omitted.iter().any(|&(f, _)| f == to) => {
                    return Err(ScytaleError::InvalidKey(format!(
                        "replacement {:?} is itself omitted",
                        to
                    )));
                }
                _ => {}
            }
        }

        let alphabet: String = LOWERCASE
            .chars()
            .filter(|c| !omitted.iter().any(|&(f, _)| f == *c))
            .collect();
        if !alphabet.contains(breaker) {
            return Err(ScytaleError::InvalidKey(format!(
                "breaker {:?} is not in the alphabet",
                breaker
            )));
        }
        if !alphabet.contains(padding) {
            return Err(ScytaleError::InvalidKey(format!(
                "padding {:?} is not in the alphabet",
                padding
            )));
        }

        let omitted: Vec<(char, Option<char>)> = omitted.to_vec();
        let key: String = key
            .to_lowercase()
            .chars()
            .filter_map(|c| Self::apply_omitted(&omitted, c))
            .filter(|c| alphabet.contains(*c))
            .collect();
        let square = Polybius::with_alphabet(&key, &alphabet, 2)?;

        Ok(Playfair {
            square,
            breaker,
            padding,
            omitted,
        })
    }

    fn apply_omitted(omitted: &[(char, Option<char>)], c: char) -> Option<char> {
        for &(from, to) in omitted {
            if from == c {
                return to;
            }
        }
        Some(c)
    }

    /// Lowercases, applies the omitted-letter mapping, and drops
    /// anything outside the square.
    fn normalize(&self, text: &str) -> Vec<char> {
        text.to_lowercase()
            .chars()
            .filter_map(|c| Self::apply_omitted(&self.omitted, c))
            .filter(|&c| self.square.contains(c))
            .collect()
    }

    /// Tokenizes normalized plaintext into digraphs.
    ///
    /// Runs of the breaker collapse to a single occurrence first, so a
    /// doubled letter can always be split by inserting the breaker; a
    /// trailing single is completed with the padding character.
    fn plain_pairs(&self, text: &[char]) -> Vec<(char, char)> {
        let mut chars: Vec<char> = Vec::with_capacity(text.len());
        for &c in text {
            if c == self.breaker && chars.last() == Some(&self.breaker) {
                continue;
            }
            chars.push(c);
        }

        let mut pairs = Vec::with_capacity(chars.len() / 2 + 1);
        let mut i = 0;
        while i < chars.len() {
            let a = chars[i];
            if i + 1 == chars.len() {
                pairs.push((a, self.padding));
                break;
            }
            let b = chars[i + 1];
            if a == b {
                pairs.push((a, self.breaker));
                i += 1;
            } else {
                pairs.push((a, b));
                i += 2;
            }
        }
        pairs
    }

    /// Splits ciphertext into digraphs, rejecting structurally invalid
    /// input.
    fn cipher_pairs(&self, text: &str) -> Result<Vec<(char, char)>, ScytaleError> {
        let chars: Vec<char> = text.to_lowercase().chars().collect();
        if chars.len() % 2 != 0 {
            return Err(ScytaleError::MalformedInput(
                "Playfair ciphertext must have even length".into(),
            ));
        }
        let mut pairs = Vec::with_capacity(chars.len() / 2);
        for pair in chars.chunks(2) {
            if pair[0] == pair[1] {
                return Err(ScytaleError::MalformedInput(format!(
                    "Playfair ciphertext cannot contain the doubled digraph {0}{0}",
                    pair[0]
                )));
            }
            pairs.push((pair[0], pair[1]));
        }
        Ok(pairs)
    }

    /// Moves one digraph through the square; `shift` is +1 for
    /// encryption and -1 for decryption.
    fn transform(&self, a: char, b: char, shift: i64) -> Result<(char, char), ScytaleError> {
        let ca = self.square.coordinates(a)?;
        let cb = self.square.coordinates(b)?;
        let side = self.square.side() as i64;
        let step = |x: usize| ((x as i64 + shift).rem_euclid(side)) as usize;

        let (na, nb) = if ca[0] == cb[0] {
            ([ca[0], step(ca[1])], [cb[0], step(cb[1])])
        } else if ca[1] == cb[1] {
            ([step(ca[0]), ca[1]], [step(cb[0]), cb[1]])
        } else {
            ([ca[0], cb[1]], [cb[0], ca[1]])
        };
        Ok((self.square.char_at(&na)?, self.square.char_at(&nb)?))
    }
}

impl Cipher for Playfair {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let normalized = self.normalize(text);
        let mut out = String::with_capacity(normalized.len() + 1);
        for (a, b) in self.plain_pairs(&normalized) {
            let (a, b) = self.transform(a, b, 1)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut out = String::with_capacity(text.len());
        for (a, b) in self.cipher_pairs(text)? {
            let (a, b) = self.transform(a, b, -1)?;
            out.push(a);
            out.push(b);
        }
        Ok(out)
    }
}
