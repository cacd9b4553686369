// src/auth/token.rs
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

/// 32 random bytes encode to a 43 char token.
pub const TOKEN_BYTES: usize = 32;

/// Fresh token from the OS RNG, for magic links and admin sessions.
pub fn new_token() -> String {
    generate_token(&mut OsRng, TOKEN_BYTES)
}

/// URL-safe base64 (no padding) over `nbytes` random bytes, so the token
/// can sit in a query string or cookie without escaping.
pub fn generate_token<R: RngCore>(rng: &mut R, nbytes: usize) -> String {
    let mut buf = vec![0u8; nbytes];
    rng.fill_bytes(&mut buf);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(&buf)
}

/// SHA-256 of the raw token. Only this ever reaches the database.
pub fn hash_token(token: &str) -> [u8; 32] {
    Sha256::digest(token.as_bytes()).into()
}
