use rand::Rng;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

const RANDOM_STRING_SYMBOLS: &[u8] = b"ABCDEF0123456789";

lazy_static::lazy_static! {
    static ref NON_ALPHANUMERIC_REGEX: Regex = Regex::new("[^a-zA-Z0-9]+").expect("valid regex");
}

/// Random string of `length` uppercase hexadecimal symbols.
pub fn generate_random_string(length: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..length)
        .map(|_| RANDOM_STRING_SYMBOLS[rng.gen_range(0..RANDOM_STRING_SYMBOLS.len())] as char)
        .collect()
}

/// Strips accents, turns every run of non-alphanumeric symbols into a single
/// space and trims the result: `"  Crème   brûlée!! "` -> `"Creme brulee"`.
pub fn clean_string(original: &str) -> String {
    let accentless: String = original
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();

    let alphanumeric = NON_ALPHANUMERIC_REGEX.replace_all(&accentless, " ");

    alphanumeric.split_whitespace().collect::<Vec<_>>().join(" ")
}
