//! The Bazeries cylinder cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;
use crate::square::{Polybius, ALPHABET_25};

/// Étienne Bazeries' combined transposition and substitution cipher,
/// keyed by a single number.
///
/// The number's decimal digits drive the transposition: runs of
/// `digit` characters are reversed in turn, cycling through the digits
/// until the text is exhausted. The substitution maps a plain square
/// (the alphabet written into columns) onto a square keyed by the
/// English spelling of the number. Input is lowercased with j merged
/// into i; other characters outside the squares are a hard error.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Bazeries, Cipher};
///
/// let cipher = Bazeries::new(2).unwrap();
/// assert_eq!(cipher.encrypt("hello").unwrap(), "uiooq");
/// assert_eq!(cipher.decrypt("uiooq").unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct Bazeries {
    digits: Vec<usize>,
    plain: Polybius,
    keyed: Polybius,
}

impl Bazeries {
    /// Creates a Bazeries cipher from a numeric key.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if the key is 0.
    pub fn new(key: u32) -> Result<Self, ScytaleError> {
        if key == 0 {
            return Err(ScytaleError::InvalidKey(
                "key must be a positive number".into(),
            ));
        }

        // Zero digits would take empty runs, so they contribute nothing
        // to the transposition cycle.
        let digits: Vec<usize> = key
            .to_string()
            .chars()
            .map(|c| c.to_digit(10).unwrap() as usize)
            .filter(|&d| d > 0)
            .collect();

        // The plain square holds the alphabet written down its columns.
        let side = 5;
        let alphabet: Vec<char> = ALPHABET_25.chars().collect();
        let mut by_column = String::with_capacity(alphabet.len());
        for r in 0..side {
            for c in 0..side {
                by_column.push(alphabet[c * side + r]);
            }
        }
        let plain = Polybius::with_alphabet("", &by_column, 2)?;

        let spelled: String = spell(key).chars().filter(|c| *c != ' ').collect();
        let keyed = Polybius::with_alphabet(&spelled, ALPHABET_25, 2)?;

        Ok(Bazeries {
            digits,
            plain,
            keyed,
        })
    }

    /// Reverses runs of characters sized by the key's digits, cycling
    /// through the digits. The operation is its own inverse.
    fn transpose(&self, chars: &[char]) -> Vec<char> {
        let mut out = Vec::with_capacity(chars.len());
        let mut pos = 0;
        let mut digit = self.digits.iter().cycle();
        while pos < chars.len() {
            let take = *digit.next().expect("digit cycle is never empty");
            let end = (pos + take).min(chars.len());
            out.extend(chars[pos..end].iter().rev());
            pos = end;
        }
        out
    }

    fn normalize(&self, text: &str) -> Vec<char> {
        text.to_lowercase()
            .chars()
            .map(|c| if c == 'j' { 'i' } else { c })
            .collect()
    }

    fn substitute(
        &self,
        chars: &[char],
        from: &Polybius,
        to: &Polybius,
    ) -> Result<Vec<char>, ScytaleError> {
        chars
            .iter()
            .map(|&c| to.char_at(from.coordinates(c)?))
            .collect()
    }
}

impl Cipher for Bazeries {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let transposed = self.transpose(&self.normalize(text));
        let substituted = self.substitute(&transposed, &self.plain, &self.keyed)?;
        Ok(substituted.into_iter().collect())
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let substituted = self.substitute(&self.normalize(text), &self.keyed, &self.plain)?;
        Ok(self.transpose(&substituted).into_iter().collect())
    }
}

/// Spells a number in English words ("eighty one thousand two hundred
/// fifty seven"). Only the letters matter to the cipher.
fn spell(n: u32) -> String {
    const UNITS: [&str; 20] = [
        "zero",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ];
    const TENS: [&str; 10] = [
        "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ];

    fn under_thousand(n: u32, words: &mut Vec<String>) {
        let (hundreds, rest) = (n / 100, n % 100);
        if hundreds > 0 {
            words.push(UNITS[hundreds as usize].to_string());
            words.push("hundred".to_string());
        }
        if rest >= 20 {
            words.push(TENS[(rest / 10) as usize].to_string());
            if rest % 10 > 0 {
                words.push(UNITS[(rest % 10) as usize].to_string());
            }
        } else if rest > 0 {
            words.push(UNITS[rest as usize].to_string());
        }
    }

    if n == 0 {
        return UNITS[0].to_string();
    }

    let mut words = Vec::new();
    let groups = [
        (n / 1_000_000_000, "billion"),
        (n / 1_000_000 % 1_000, "million"),
        (n / 1_000 % 1_000, "thousand"),
    ];
    for (count, scale) in groups {
        if count > 0 {
            under_thousand(count, &mut words);
            words.push(scale.to_string());
        }
    }
    under_thousand(n % 1_000, &mut words);
    words.join(" ")
}
