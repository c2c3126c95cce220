//! One-way password hashing (Argon2id, PHC strings).

pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;
