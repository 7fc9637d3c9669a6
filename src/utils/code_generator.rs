//! Short code generation.

use rand::Rng;

/// Alphabet for short codes: mixed-case letters and digits, 62 symbols.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default code length. 62^6 is roughly 5.6e10 codes, so collisions stay
/// negligible until the store is enormous.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Draws a fixed-length code uniformly at random from the alphabet.
///
/// Pure draw: uniqueness against the live code set is enforced by the
/// store's atomic insert, not here.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}
