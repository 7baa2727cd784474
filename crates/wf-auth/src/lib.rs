//! # wf-auth
//!
//! Authentication for Workforce RS.
//!
//! ## Features
//!
//! - HS256 bearer tokens with issuer, not-before and expiry checks
//! - Argon2 password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{extract_bearer_token, Claims, IssuedToken, JwtError, JwtService};
pub use password::{hash_password, verify_dummy_password, verify_password, PasswordError};
