//! One-way password digest used wherever a password must be referenced
//! after analysis.

use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// SHA-256 of the UTF-8 password bytes, lowercase hex.
pub fn password_hash(password: &SecretString) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.expose_secret().as_bytes());
    hex::encode(hasher.finalize())
}
