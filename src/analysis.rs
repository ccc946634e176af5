//! Utilities for studying and breaking classical ciphers.
//!
//! Frequency tables, Pearson's chi-squared goodness-of-fit, and the
//! index of coincidence. The n-gram tables these functions consume are
//! caller-supplied; the library ships no frequency data of its own.

use std::collections::HashMap;

use crate::error::ScytaleError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Generates an n-gram frequency table from a source text.
///
/// Counts overlapping n-grams; the resulting frequencies sum to 1.
/// Returns an empty table when the text is shorter than `ngram`.
///
/// # Examples
///
/// ```
/// use scytale::analysis::frequency_analysis;
///
/// let freqs = frequency_analysis("mississipi", 1);
/// assert_eq!(freqs["i"], 0.4);
/// assert_eq!(freqs["m"], 0.1);
/// ```
pub fn frequency_analysis(text: &str, ngram: usize) -> HashMap<String, f64> {
    let chars: Vec<char> = text.chars().collect();
    let mut freqs: HashMap<String, f64> = HashMap::new();
    if ngram == 0 || chars.len() < ngram {
        return freqs;
    }
    let total = (chars.len() - ngram + 1) as f64;
    for window in chars.windows(ngram) {
        *freqs.entry(window.iter().collect()).or_insert(0.0) += 1.0;
    }
    for count in freqs.values_mut() {
        *count /= total;
    }
    freqs
}

/// Performs Pearson's chi-squared test on a potential plaintext with
/// respect to a frequency table. Lower numbers are better.
///
/// Grams with zero expected frequency and zero observed count are
/// skipped; a zero expectation with a nonzero observation yields
/// infinity.
pub fn chi2(text: &str, freqs: &HashMap<String, f64>) -> f64 {
    let text_len = text.chars().count() as f64;
    let mut acc = 0.0;
    for (gram, freq) in freqs {
        let gram_len = gram.chars().count() as f64;
        let expected = freq * text_len / gram_len;
        let observed = text.matches(gram.as_str()).count() as f64;
        if expected == 0.0 {
            if observed > 0.0 {
                return f64::INFINITY;
            }
        } else {
            acc += (observed - expected).powi(2) / expected;
        }
    }
    acc
}

/// Calculates the monographic a-z index of coincidence for a text.
///
/// # Errors
/// Returns [`ScytaleError::MalformedInput`] if fewer than two in-alphabet
/// grams remain after filtering.
///
/// # Examples
///
/// ```
/// use scytale::analysis::ic;
///
/// assert_eq!(ic("abcdefghijklmnopqrstuvwxyz").unwrap(), 0.0);
/// ```
pub fn ic(text: &str) -> Result<f64, ScytaleError> {
    let unigrams: Vec<String> = LOWERCASE.chars().map(String::from).collect();
    let grams: Vec<&str> = unigrams.iter().map(String::as_str).collect();
    ic_over(text, &grams)
}

/// Calculates the index of coincidence over an arbitrary n-gram
/// alphabet (bigrams, trigrams, &c. for polygraphic IC).
///
/// The text is filtered to characters occurring in the alphabet before
/// the n-grams are collected.
///
/// # Errors
/// - [`ScytaleError::InvalidArgument`] if the grams are empty or not all
///   the same size.
/// - [`ScytaleError::MalformedInput`] if fewer than two grams remain.
pub fn ic_over(text: &str, ngrams: &[&str]) -> Result<f64, ScytaleError> {
    let n = ngrams
        .first()
        .map(|g| g.chars().count())
        .ok_or_else(|| ScytaleError::InvalidArgument("n-gram alphabet is empty".into()))?;
    if n == 0 || ngrams.iter().any(|g| g.chars().count() != n) {
        return Err(ScytaleError::InvalidArgument(
            "n-grams are not all the same size".into(),
        ));
    }

    let alphabet: Vec<char> = ngrams.iter().flat_map(|g| g.chars()).collect();
    let filtered: Vec<char> = text.chars().filter(|c| alphabet.contains(c)).collect();

    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    if filtered.len() >= n {
        for window in filtered.windows(n) {
            let gram: String = window.iter().collect();
            if ngrams.contains(&gram.as_str()) {
                *counts.entry(gram).or_insert(0) += 1;
                total += 1;
            }
        }
    }
    if total < 2 {
        return Err(ScytaleError::MalformedInput(
            "text is too short to measure coincidence".into(),
        ));
    }

    let coincidences: usize = counts.values().map(|&f| f * (f - 1)).sum();
    let expected = (total * (total - 1)) as f64 / ngrams.len() as f64;
    Ok(coincidences as f64 / expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_frequency_analysis_unigrams() {
        let freqs = frequency_analysis("mississipi", 1);
        assert_eq!(freqs.len(), 4);
        assert!(close(freqs["m"], 0.1));
        assert!(close(freqs["i"], 0.4));
        assert!(close(freqs["s"], 0.4));
        assert!(close(freqs["p"], 0.1));
    }

    #[test]
    fn test_frequency_analysis_bigrams() {
        let freqs = frequency_analysis("mississipi", 2);
        assert_eq!(freqs.len(), 6);
        assert!(close(freqs["mi"], 1.0 / 9.0));
        assert!(close(freqs["is"], 2.0 / 9.0));
        assert!(close(freqs["ss"], 2.0 / 9.0));
        assert!(close(freqs["si"], 2.0 / 9.0));
        assert!(close(freqs["ip"], 1.0 / 9.0));
        assert!(close(freqs["pi"], 1.0 / 9.0));
    }

    #[test]
    fn test_frequency_analysis_boundaries() {
        let freqs = frequency_analysis("mississipi", 10);
        assert_eq!(freqs.len(), 1);
        assert!(close(freqs["mississipi"], 1.0));

        assert!(frequency_analysis("mississipi", 11).is_empty());
        assert!(frequency_analysis("anything", 0).is_empty());
    }

    #[test]
    fn test_chi2() {
        let mut perfect = HashMap::new();
        perfect.insert("a".to_string(), 1.0);
        assert_eq!(chi2("aaa", &perfect), 0.0);

        let mut impossible = HashMap::new();
        impossible.insert("a".to_string(), 0.0);
        assert_eq!(chi2("aaa", &impossible), f64::INFINITY);
    }

    #[test]
    fn test_ic_uniform_text() {
        assert_eq!(ic("abcdefghijklmnopqrstuvwxyz").unwrap(), 0.0);
    }

    #[test]
    fn test_ic_english_text() {
        assert!(close(ic("something or other").unwrap(), 1.5166667));
    }

    #[test]
    fn test_ic_failures() {
        assert!(ic("").is_err());
        assert!(ic("a").is_err());
        assert!(matches!(
            ic_over("anything", &["ab", "c"]),
            Err(ScytaleError::InvalidArgument(_))
        ));
        assert!(matches!(
            ic_over("anything", &[]),
            Err(ScytaleError::InvalidArgument(_))
        ));
    }
}
