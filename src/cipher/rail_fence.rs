//! The rail fence transposition cipher.

use crate::cipher::Cipher;
use crate::error::ScytaleError;

/// Rail fence transposition: the text zig-zags down and up across a
/// number of rails and is read off rail by rail.
///
/// Decryption replays the same zig-zag to recover each rail's length,
/// then zips the rails back together. One rail is the identity, as is
/// any rail count at or above the text length.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, RailFence};
///
/// let cipher = RailFence::new(3).unwrap();
/// assert_eq!(
///     cipher.encrypt("wearediscoveredfleeatonce").unwrap(),
///     "wecrlteerdsoeefeaocaivden"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Creates a rail fence cipher with the given number of rails.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if `rails` is 0.
    pub fn new(rails: usize) -> Result<Self, ScytaleError> {
        if rails == 0 {
            return Err(ScytaleError::InvalidKey(
                "rail count must be positive".into(),
            ));
        }
        Ok(RailFence { rails })
    }

    /// The zig-zag rail index for each of `n` successive positions.
    fn rail_sequence(&self, n: usize) -> Vec<usize> {
        let mut sequence = Vec::with_capacity(n);
        let mut rail = 0usize;
        let mut down = true;
        for _ in 0..n {
            sequence.push(rail);
            if self.rails == 1 {
                continue;
            }
            if down {
                if rail + 1 == self.rails {
                    down = false;
                    rail -= 1;
                } else {
                    rail += 1;
                }
            } else if rail == 0 {
                down = true;
                rail += 1;
            } else {
                rail -= 1;
            }
        }
        sequence
    }
}

impl Cipher for RailFence {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.chars().collect();
        let mut rails: Vec<String> = vec![String::new(); self.rails];
        for (c, rail) in chars.iter().zip(self.rail_sequence(chars.len())) {
            rails[rail].push(*c);
        }
        Ok(rails.concat())
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let chars: Vec<char> = text.chars().collect();
        let sequence = self.rail_sequence(chars.len());

        let mut lengths = vec![0usize; self.rails];
        for &rail in &sequence {
            lengths[rail] += 1;
        }

        let mut rails: Vec<std::slice::Iter<char>> = Vec::with_capacity(self.rails);
        let mut start = 0;
        for &len in &lengths {
            rails.push(chars[start..start + len].iter());
            start += len;
        }

        let mut out = String::with_capacity(chars.len());
        for rail in sequence {
            // Every rail iterator holds exactly as many characters as
            // the sequence visits it, so this cannot miss.
            if let Some(&c) = rails[rail].next() {
                out.push(c);
            }
        }
        Ok(out)
    }
}
