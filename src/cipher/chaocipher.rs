//! The Chaocipher two-disk autokey cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;

/// John F. Byrne's Chaocipher: two rotating alphabet disks that
/// permute themselves after every character.
///
/// The left disk carries ciphertext letters, the right disk plaintext
/// letters at the same positions. After each character both disks are
/// re-ordered around the zenith (position 0) and nadir (the opposite
/// position), so the substitution alphabet never repeats. Unlike every
/// other cipher here, the derived state evolves during a call; the
/// stored keys stay immutable and fresh working copies are built for
/// each `encrypt`/`decrypt`, so instances stay shareable across
/// threads.
///
/// The alphabet is closed: characters outside the disks are a hard
/// error.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Chaocipher, Cipher};
///
/// let cipher = Chaocipher::new(
///     "hxuczvamdslkpefjrigtwobnyq",
///     "ptlnbqdeoysfavzkgjrihwxumc",
/// ).unwrap();
/// assert_eq!(
///     cipher.encrypt("welldoneisbetterthanwellsaid").unwrap(),
///     "oahqhcnynxtszjrrhjbyhqksoujy"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Chaocipher {
    left: Vec<char>,
    right: Vec<char>,
}

impl Chaocipher {
    /// Creates a Chaocipher from the left (ciphertext) and right
    /// (plaintext) disk alphabets.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] unless both disks are
    /// permutations of the same set of characters.
    pub fn new(left: &str, right: &str) -> Result<Self, ScytaleError> {
        let left: Vec<char> = left.to_lowercase().chars().collect();
        let right: Vec<char> = right.to_lowercase().chars().collect();
        if left.len() != right.len() || left.is_empty() {
            return Err(ScytaleError::InvalidKey(
                "disk alphabets must have the same nonzero length".into(),
            ));
        }
        for disk in [&left, &right] {
            for (i, c) in disk.iter().enumerate() {
                if disk[..i].contains(c) {
                    return Err(ScytaleError::InvalidKey(format!(
                        "disk alphabet repeats {:?}",
                        c
                    )));
                }
            }
        }
        if left.iter().any(|c| !right.contains(c)) {
            return Err(ScytaleError::InvalidKey(
                "disks must permute the same alphabet".into(),
            ));
        }
        Ok(Chaocipher { left, right })
    }

    /// Permutes both working disks after a character at `pos` was used.
    ///
    /// Left disk: rotate the used position to the zenith, extract the
    /// letter at zenith+1 and reinsert it at the nadir. Right disk:
    /// rotate one position past the used one, extract the letter at
    /// zenith+2 and reinsert it at the nadir.
    fn advance(left: &mut Vec<char>, right: &mut Vec<char>, pos: usize) {
        let n = left.len();
        if n < 3 {
            return;
        }
        let nadir = n / 2;

        left.rotate_left(pos);
        let extracted = left.remove(1);
        left.insert(nadir, extracted);

        right.rotate_left((pos + 1) % n);
        let extracted = right.remove(2);
        right.insert(nadir, extracted);
    }

    /// Runs the disks over the text, looking characters up on `from`
    /// and emitting the letter at the same position on `to`.
    fn run(&self, text: &str, encrypting: bool) -> Result<String, ScytaleError> {
        let mut left = self.left.clone();
        let mut right = self.right.clone();
        let mut out = String::with_capacity(text.len());
        for c in text.to_lowercase().chars() {
            let (from, to): (&[char], &[char]) = if encrypting {
                (&right, &left)
            } else {
                (&left, &right)
            };
            let pos = from
                .iter()
                .position(|&d| d == c)
                .ok_or_else(|| ScytaleError::unknown_char(c))?;
            out.push(to[pos]);
            Self::advance(&mut left, &mut right, pos);
        }
        Ok(out)
    }
}

impl Cipher for Chaocipher {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        self.run(text, true)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        self.run(text, false)
    }
}
