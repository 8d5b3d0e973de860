//! Random password suggestions.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use secrecy::SecretString;

pub const MIN_SUGGESTED_LENGTH: usize = 1;
pub const MAX_SUGGESTED_LENGTH: usize = 128;
pub const DEFAULT_SUGGESTED_LENGTH: usize = 12;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIALS: &[u8] = b"!@#$%^&*()-_=+";

const CLASSES: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SPECIALS];

/// Generates a password from the OS CSPRNG.
///
/// `length` is clamped to `1..=128`. From 4 characters up, the result holds
/// at least one lowercase, uppercase, digit and special character; shorter
/// results draw from the full alphabet with no guarantee.
pub fn suggest_password(length: usize) -> SecretString {
    let length = length.clamp(MIN_SUGGESTED_LENGTH, MAX_SUGGESTED_LENGTH);
    let mut rng = OsRng;

    let alphabet: Vec<u8> = CLASSES.concat();
    let mut chars: Vec<u8> = Vec::with_capacity(length);

    if length >= CLASSES.len() {
        for class in CLASSES {
            chars.extend(class.choose(&mut rng));
        }
    }
    while chars.len() < length {
        chars.extend(alphabet.choose(&mut rng));
    }
    chars.shuffle(&mut rng);

    let password: String = chars.into_iter().map(char::from).collect();
    SecretString::new(password.into())
}
