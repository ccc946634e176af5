//! Known-answer tests for the public API.
//!
//! All expected values are frozen vectors: the classic published
//! examples for each algorithm, plus hand-derived outputs for the
//! less-documented ones. Any change in output indicates a behavioral
//! regression, not an acceptable variation.

use std::collections::HashMap;

use scytale::cipher::{
    Affine, Atbash, Autokey, Bazeries, Bifid, Caesar, Chaocipher, Cipher, Column, FourSquare,
    FractionatedMorse, Hill, Keyword, Playfair, RailFence, Simple, Trifid, TwoSquare, Vigenere,
};
use scytale::modular::{egcd, mmi};
use scytale::{Matrix, Polybius, ScytaleError, TabulaRecta};

// ═══════════════════════════════════════════════════════════════════════
// Geometry: Polybius square, tabula recta, matrix
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn polybius_keyed_layout() {
    let square = Polybius::new("keyword").unwrap();
    assert_eq!(square.char_at(&[0, 0]).unwrap(), 'k');
    assert_eq!(square.char_at(&[4, 4]).unwrap(), 'z');
    assert_eq!(square.coordinates('e').unwrap(), &[0, 1]);
}

#[test]
fn tabula_recta_addition_and_subtraction() {
    let forward = TabulaRecta::new("abcdefghijklmnopqrstuvwxyz").unwrap();
    let reverse = TabulaRecta::reversed("abcdefghijklmnopqrstuvwxyz").unwrap();
    assert_eq!(forward.lookup('a', 'l').unwrap(), 'l');
    assert_eq!(reverse.lookup('l', 'l').unwrap(), 'a');
}

#[test]
fn matrix_modular_inverse() {
    let m = Matrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
    assert_eq!(
        m.pow(-1, Some(26)).unwrap(),
        Matrix::from_rows(&[vec![15, 17], vec![20, 9]]).unwrap()
    );
}

#[test]
fn modular_inverse_scenarios() {
    assert_eq!(mmi(5, 26).unwrap(), 21);
    assert!(mmi(2, 4).is_err());
    assert_eq!(egcd(120, 23), (1, -9, 47));
}

// ═══════════════════════════════════════════════════════════════════════
// Monoalphabetic substitution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn caesar_shift_three() {
    let cipher = Caesar::new(3);
    assert_eq!(cipher.encrypt("test").unwrap(), "whvw");
    assert_eq!(cipher.decrypt("whvw").unwrap(), "test");
}

#[test]
fn rot13_is_reciprocal() {
    let rot13 = Caesar::rot13();
    assert_eq!(rot13.encrypt("test").unwrap(), "grfg");
    assert_eq!(rot13.encrypt("grfg").unwrap(), "test");
}

#[test]
fn atbash_mirrors_the_alphabet() {
    let cipher = Atbash::new();
    assert_eq!(cipher.encrypt("test").unwrap(), "gvhg");
    assert_eq!(cipher.encrypt("CaSepReSeRvE").unwrap(), "XzHvkIvHvIeV");
}

#[test]
fn keyword_kryptos() {
    let cipher = Keyword::new("kryptos");
    assert_eq!(cipher.encrypt("test").unwrap(), "ntmn");
    assert_eq!(cipher.decrypt("ntmn").unwrap(), "test");
}

#[test]
fn affine_five_seven() {
    let cipher = Affine::new(5, 7).unwrap();
    assert_eq!(
        cipher.encrypt("Defend the east wall of the castle").unwrap(),
        "Wbgbuw yqb bhty nhkk zg yqb rhtykb"
    );
    assert_eq!(
        cipher.decrypt("Wbgbuw yqb bhty nhkk zg yqb rhtykb").unwrap(),
        "Defend the east wall of the castle"
    );
}

#[test]
fn simple_full_permutation() {
    let mapping: HashMap<char, char> = "abcdefghijklmnopqrstuvwxyz"
        .chars()
        .zip("sxbveqiagnuorpdfmcyhltzjkw".chars())
        .collect();
    let cipher = Simple::new(mapping);
    assert_eq!(
        cipher.encrypt("zyxwvutsrqponmlkjihgfedcba").unwrap(),
        "wkjztlhycmfdproungaiqevbxs"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Polygraphic substitution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn playfair_wheatstone_example() {
    let cipher = Playfair::new("playfair example").unwrap();
    assert_eq!(
        cipher.encrypt("Hide the gold in the tree stump").unwrap(),
        "bmodzbxdnabekudmuixmmouvif"
    );
    assert_eq!(
        cipher.decrypt("bmodzbxdnabekudmuixmmouvif").unwrap(),
        "hidethegoldinthetrexestump"
    );
}

#[test]
fn four_square_example_keyword() {
    let cipher = FourSquare::new("example", "keyword").unwrap();
    assert_eq!(cipher.encrypt("help").unwrap(), "fynf");
    assert_eq!(cipher.decrypt("fynf").unwrap(), "help");
}

#[test]
fn two_square_example_keyword() {
    let cipher = TwoSquare::new("example", "keyword").unwrap();
    assert_eq!(cipher.encrypt("help").unwrap(), "hecm");
    assert_eq!(cipher.decrypt("hecm").unwrap(), "help");
}

#[test]
fn bifid_whole_text_and_periodic() {
    let cipher = Bifid::new("bgwkzqpndsioaxefclumthyvr").unwrap();
    assert_eq!(cipher.encrypt("fleeatonce").unwrap(), "uaeolwrins");
    assert_eq!(cipher.decrypt("uaeolwrins").unwrap(), "fleeatonce");

    let cipher = Bifid::with_period("phqgmeaylnofdxkrcvszwbuti", 5).unwrap();
    assert_eq!(
        cipher.encrypt("defendtheeastwallofthecastle").unwrap(),
        "ffyhmkhycpliashadtrlhcchlblr"
    );
}

#[test]
fn trifid_periodic() {
    let cipher = Trifid::with_period("epsducvwym.zlkxnbtfgorijhaq", 5).unwrap();
    assert_eq!(
        cipher.encrypt("defendtheeastwallofthecastle").unwrap(),
        "suefecphsegyyjiximfofocejlrf"
    );
    assert_eq!(
        cipher.decrypt("suefecphsegyyjiximfofocejlrf").unwrap(),
        "defendtheeastwallofthecastle"
    );
}

#[test]
fn bazeries_key_two() {
    let cipher = Bazeries::new(2).unwrap();
    assert_eq!(cipher.encrypt("hello").unwrap(), "uiooq");
    assert_eq!(cipher.decrypt("uiooq").unwrap(), "hello");
}

// ═══════════════════════════════════════════════════════════════════════
// Matrix and keystream substitution
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn hill_classic_two_by_two() {
    let key = Matrix::from_rows(&[vec![3, 3], vec![2, 5]]).unwrap();
    let cipher = Hill::new(key).unwrap();
    assert_eq!(cipher.encrypt("help").unwrap(), "hiat");
    assert_eq!(cipher.decrypt("hiat").unwrap(), "help");
}

#[test]
fn vigenere_lemon() {
    let cipher = Vigenere::new("lemon").unwrap();
    assert_eq!(cipher.encrypt("attackatdawn").unwrap(), "lxfopvefrnhr");
    assert_eq!(cipher.decrypt("lxfopvefrnhr").unwrap(), "attackatdawn");
}

#[test]
fn autokey_queenly() {
    let cipher = Autokey::new("queenly").unwrap();
    assert_eq!(cipher.encrypt("attackatdawn").unwrap(), "qnxepvytwtwp");
    assert_eq!(cipher.decrypt("qnxepvytwtwp").unwrap(), "attackatdawn");
}

// ═══════════════════════════════════════════════════════════════════════
// Transposition
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn column_german() {
    let cipher = Column::new("german").unwrap();
    assert_eq!(
        cipher.encrypt("defendtheeastwallofthecastle").unwrap(),
        "nalcxehwttdttfseeleedsoaxfeahl"
    );
    assert_eq!(
        cipher.decrypt("nalcxehwttdttfseeleedsoaxfeahl").unwrap(),
        "defendtheeastwallofthecastle"
    );
}

#[test]
fn rail_fence_three_rails() {
    let cipher = RailFence::new(3).unwrap();
    assert_eq!(
        cipher.encrypt("wearediscoveredfleeatonce").unwrap(),
        "wecrlteerdsoeefeaocaivden"
    );
    assert_eq!(
        cipher.decrypt("wecrlteerdsoeefeaocaivden").unwrap(),
        "wearediscoveredfleeatonce"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Composite / fractionating
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn fractionated_morse_roundtable() {
    let cipher = FractionatedMorse::new("roundtable").unwrap();
    assert_eq!(cipher.encrypt("attack at dawn").unwrap(), "tkqvfcykzutdv");
    assert_eq!(cipher.decrypt("tkqvfcykzutdv").unwrap(), "attack at dawn");
}

#[test]
fn chaocipher_exhibit() {
    let cipher = Chaocipher::new(
        "hxuczvamdslkpefjrigtwobnyq",
        "ptlnbqdeoysfavzkgjrihwxumc",
    )
    .unwrap();
    assert_eq!(
        cipher.encrypt("welldoneisbetterthanwellsaid").unwrap(),
        "oahqhcnynxtszjrrhjbyhqksoujy"
    );
    assert_eq!(
        cipher.decrypt("oahqhcnynxtszjrrhjbyhqksoujy").unwrap(),
        "welldoneisbetterthanwellsaid"
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Error taxonomy through the public API
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn construction_failures_are_invalid_keys() {
    assert!(matches!(Affine::new(2, 4), Err(ScytaleError::InvalidKey(_))));
    assert!(matches!(Column::new("aa"), Err(ScytaleError::InvalidKey(_))));
    assert!(matches!(
        RailFence::new(0),
        Err(ScytaleError::InvalidKey(_))
    ));
    assert!(matches!(
        Bazeries::new(0),
        Err(ScytaleError::InvalidKey(_))
    ));
}

#[test]
fn geometry_failures_are_structural() {
    assert!(matches!(
        Trifid::new("ab"),
        Err(ScytaleError::StructuralMismatch(_))
    ));
    assert!(matches!(
        Polybius::with_alphabet("", "ab", 2),
        Err(ScytaleError::StructuralMismatch(_))
    ));
}

#[test]
fn decrypt_failures_are_malformed_input() {
    let playfair = Playfair::new("").unwrap();
    assert!(matches!(
        playfair.decrypt("odd"),
        Err(ScytaleError::MalformedInput(_))
    ));

    let column = Column::new("abc").unwrap();
    assert!(matches!(
        column.decrypt("abcd"),
        Err(ScytaleError::MalformedInput(_))
    ));
}

#[test]
fn out_of_alphabet_lookups_are_key_not_found() {
    let bifid = Bifid::new("bgwkzqpndsioaxefclumthyvr").unwrap();
    assert!(matches!(
        bifid.encrypt("!!!"),
        Err(ScytaleError::KeyNotFound(_))
    ));

    let vigenere = Vigenere::new("lemon").unwrap();
    assert!(matches!(
        vigenere.encrypt("attack at dawn"),
        Err(ScytaleError::KeyNotFound(_))
    ));
}
