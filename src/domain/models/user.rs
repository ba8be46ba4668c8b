/// User model
///
/// `password_hash` is the bcrypt digest; the plaintext password is hashed
/// before persistence and never stored or logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// Fields of a new user; `id` is generated server-side.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
