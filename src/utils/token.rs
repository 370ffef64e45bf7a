use uuid::Uuid;

/// Returned by a successful login. There is no signing, expiry or per-user claim.
pub const LOGIN_TOKEN: &str = "dummy-jwt-token";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
