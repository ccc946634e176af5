//! The fractionated Morse cipher.

use std::collections::HashMap;

use crate::cipher::{Cipher, LOWERCASE};
use crate::error::ScytaleError;

/// Morse code for letters and digits.
const MORSE: [(char, &str); 36] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
];

/// Fractionation through Morse code.
///
/// The plaintext becomes a Morse stream with `x` separating letters and
/// `xx` separating words, padded with `x` to a multiple of three. The
/// stream's trigraphs over the symbols `.`, `-`, `x` (26 of them, since
/// `xxx` cannot occur) substitute through a keyed alphabet.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, FractionatedMorse};
///
/// let cipher = FractionatedMorse::new("roundtable").unwrap();
/// assert_eq!(cipher.encrypt("attack at dawn").unwrap(), "tkqvfcykzutdv");
/// assert_eq!(cipher.decrypt("tkqvfcykzutdv").unwrap(), "attack at dawn");
/// ```
#[derive(Debug, Clone)]
pub struct FractionatedMorse {
    to_morse: HashMap<char, &'static str>,
    from_morse: HashMap<&'static str, char>,
    to_letter: HashMap<String, char>,
    to_trigraph: HashMap<char, String>,
}

impl FractionatedMorse {
    /// Creates a fractionated Morse cipher from a key.
    ///
    /// The keyed alphabet is the deduplicated key followed by the
    /// remaining letters; the 26 possible trigraphs map onto it in
    /// lexicographic order (`.` before `-` before `x`).
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if the key contains anything
    /// but ascii letters.
    pub fn new(key: &str) -> Result<Self, ScytaleError> {
        let key = key.to_lowercase();
        if let Some(c) = key.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(ScytaleError::InvalidKey(format!(
                "key character {:?} is not a letter",
                c
            )));
        }

        let mut keyed: Vec<char> = Vec::with_capacity(26);
        for c in key.chars().chain(LOWERCASE.chars()) {
            if !keyed.contains(&c) {
                keyed.push(c);
            }
        }

        let mut to_letter = HashMap::with_capacity(26);
        let mut to_trigraph = HashMap::with_capacity(26);
        let mut keyed = keyed.into_iter();
        for a in ['.', '-', 'x'] {
            for b in ['.', '-', 'x'] {
                for c in ['.', '-', 'x'] {
                    if (a, b, c) == ('x', 'x', 'x') {
                        continue;
                    }
                    let trigraph: String = [a, b, c].iter().collect();
                    let letter = keyed.next().expect("26 trigraphs, 26 letters");
                    to_letter.insert(trigraph.clone(), letter);
                    to_trigraph.insert(letter, trigraph);
                }
            }
        }

        Ok(FractionatedMorse {
            to_morse: MORSE.iter().copied().collect(),
            from_morse: MORSE.iter().map(|&(c, code)| (code, c)).collect(),
            to_letter,
            to_trigraph,
        })
    }

    /// Encodes text into the separator-joined Morse stream.
    fn morse_stream(&self, text: &str) -> Result<String, ScytaleError> {
        let mut stream = String::new();
        let mut at_boundary = true;
        for c in text.to_lowercase().chars() {
            if c.is_whitespace() {
                // Word separator; runs of whitespace collapse.
                if !at_boundary {
                    stream.push_str("xx");
                    at_boundary = true;
                }
                continue;
            }
            if !at_boundary {
                stream.push('x');
            }
            let code = self
                .to_morse
                .get(&c)
                .ok_or_else(|| ScytaleError::unknown_char(c))?;
            stream.push_str(code);
            at_boundary = false;
        }
        // A trailing word separator carries no information.
        while stream.ends_with('x') {
            stream.pop();
        }
        Ok(stream)
    }
}

impl Cipher for FractionatedMorse {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut stream = self.morse_stream(text)?;
        while stream.len() % 3 != 0 {
            stream.push('x');
        }
        let symbols: Vec<char> = stream.chars().collect();
        let mut out = String::with_capacity(symbols.len() / 3);
        for trigraph in symbols.chunks(3) {
            let trigraph: String = trigraph.iter().collect();
            let letter = self.to_letter.get(&trigraph).ok_or_else(|| {
                ScytaleError::MalformedInput(format!("impossible trigraph {:?}", trigraph))
            })?;
            out.push(*letter);
        }
        Ok(out)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut stream = String::with_capacity(text.len() * 3);
        for c in text.to_lowercase().chars() {
            let trigraph = self
                .to_trigraph
                .get(&c)
                .ok_or_else(|| ScytaleError::unknown_char(c))?;
            stream.push_str(trigraph);
        }
        while stream.ends_with('x') {
            stream.pop();
        }

        let mut out = String::new();
        for group in stream.split('x') {
            if group.is_empty() {
                // Two adjacent separators: a word boundary.
                out.push(' ');
                continue;
            }
            let letter = self.from_morse.get(group).ok_or_else(|| {
                ScytaleError::MalformedInput(format!("unknown Morse group {:?}", group))
            })?;
            out.push(*letter);
        }
        Ok(out)
    }
}
