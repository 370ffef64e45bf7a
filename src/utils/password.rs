use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the supplied secret.
///
/// Whatever the client sends is hashed, so a client that pre-hashes its
/// password ends up with a hash of a hash in storage. Login hashes the same
/// way, which keeps the two paths comparable.
pub fn hash_password(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}
