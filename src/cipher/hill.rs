//! The Hill matrix cipher.

use std::collections::HashMap;

use crate::cipher::{Cipher, LOWERCASE};
use crate::error::ScytaleError;
use crate::matrix::Matrix;

/// Lester Hill's polygraphic cipher: blocks of letter indices are
/// multiplied by a key matrix modulo the alphabet length.
///
/// The key must be square and invertible modulo the alphabet length;
/// the inverse matrix is computed once at construction and drives
/// decryption. Plaintext is lowercased and padded with `x` to a
/// multiple of the block size; characters outside the alphabet are a
/// hard error.
///
/// # Examples
///
/// ```
/// use scytale::cipher::{Cipher, Hill};
/// use scytale::Matrix;
///
/// let key = Matrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
/// let cipher = Hill::new(key).unwrap();
/// assert_eq!(cipher.encrypt("help").unwrap(), "hiat");
/// assert_eq!(cipher.decrypt("hiat").unwrap(), "help");
/// ```
#[derive(Debug, Clone)]
pub struct Hill {
    key: Matrix,
    inverse: Matrix,
    alphabet: Vec<char>,
    index: HashMap<char, usize>,
    padding: char,
}

impl Hill {
    /// Creates a Hill cipher over the plain lowercase alphabet.
    ///
    /// # Errors
    /// See [`with_alphabet`](Self::with_alphabet).
    pub fn new(key: Matrix) -> Result<Self, ScytaleError> {
        Self::with_alphabet(key, LOWERCASE)
    }

    /// Creates a Hill cipher from a string key whose letters fill a
    /// square matrix row by row ("ddcf" becomes `[[3,3],[2,5]]`).
    ///
    /// # Errors
    /// - [`ScytaleError::InvalidKey`] if the key length is not a perfect
    ///   square, a key character falls outside the alphabet, or the
    ///   resulting matrix is not invertible.
    pub fn from_key(key: &str) -> Result<Self, ScytaleError> {
        let alphabet: Vec<char> = LOWERCASE.chars().collect();
        let chars: Vec<char> = key.to_lowercase().chars().collect();
        let side = (chars.len() as f64).sqrt().round() as usize;
        if side * side != chars.len() || side == 0 {
            return Err(ScytaleError::InvalidKey(format!(
                "key length {} is not a perfect square",
                chars.len()
            )));
        }
        let mut rows = Vec::with_capacity(side);
        for chunk in chars.chunks(side) {
            let mut row = Vec::with_capacity(side);
            for &c in chunk {
                let index = alphabet
                    .iter()
                    .position(|&a| a == c)
                    .ok_or_else(|| {
                        ScytaleError::InvalidKey(format!(
                            "key character {:?} is not in the alphabet",
                            c
                        ))
                    })?;
                row.push(index as i64);
            }
            rows.push(row);
        }
        Self::new(Matrix::from_rows(&rows)?)
    }

    /// Creates a Hill cipher over an arbitrary alphabet.
    ///
    /// # Errors
    /// Returns [`ScytaleError::InvalidKey`] if the alphabet has
    /// duplicates, the matrix is not square, or it is not invertible
    /// modulo the alphabet length.
    pub fn with_alphabet(key: Matrix, alphabet: &str) -> Result<Self, ScytaleError> {
        let alphabet: Vec<char> = alphabet.chars().collect();
        let mut index = HashMap::with_capacity(alphabet.len());
        for (i, &c) in alphabet.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(ScytaleError::InvalidKey(
                    "alphabet has duplicate characters".into(),
                ));
            }
        }
        if key.rows() != key.cols() {
            return Err(ScytaleError::InvalidKey(
                "Hill key matrix must be square".into(),
            ));
        }
        let modulus = alphabet.len() as i64;
        let inverse = key.pow(-1, Some(modulus)).map_err(|_| {
            ScytaleError::InvalidKey(format!(
                "key matrix is not invertible modulo {}",
                modulus
            ))
        })?;
        let key = key.modulo(modulus)?;
        let padding = if alphabet.contains(&'x') { 'x' } else { alphabet[0] };
        Ok(Hill {
            key,
            inverse,
            alphabet,
            index,
            padding,
        })
    }

    fn indices(&self, text: &str) -> Result<Vec<usize>, ScytaleError> {
        text.to_lowercase()
            .chars()
            .map(|c| {
                self.index
                    .get(&c)
                    .copied()
                    .ok_or_else(|| ScytaleError::unknown_char(c))
            })
            .collect()
    }

    /// Multiplies each block of indices by the given matrix.
    fn apply(&self, matrix: &Matrix, indices: &[usize]) -> Result<String, ScytaleError> {
        let side = matrix.rows();
        let modulus = self.alphabet.len() as i64;
        let mut out = String::with_capacity(indices.len());
        for block in indices.chunks(side) {
            let column = Matrix::from_rows(
                &block.iter().map(|&i| vec![i as i64]).collect::<Vec<_>>(),
            )?;
            let product = matrix.try_mul(&column)?.modulo(modulus)?;
            for r in 0..side {
                out.push(self.alphabet[product.get(r, 0) as usize]);
            }
        }
        Ok(out)
    }
}

impl Cipher for Hill {
    fn encrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let mut indices = self.indices(text)?;
        let side = self.key.rows();
        while indices.len() % side != 0 {
            indices.push(self.index[&self.padding]);
        }
        self.apply(&self.key, &indices)
    }

    fn decrypt(&self, text: &str) -> Result<String, ScytaleError> {
        let indices = self.indices(text)?;
        if indices.len() % self.key.rows() != 0 {
            return Err(ScytaleError::MalformedInput(format!(
                "Hill ciphertext length must be a multiple of {}",
                self.key.rows()
            )));
        }
        self.apply(&self.inverse, &indices)
    }
}
