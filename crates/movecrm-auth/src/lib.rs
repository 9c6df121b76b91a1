//! # movecrm-auth
//!
//! The authentication gate in front of the CRM.
//!
//! ## Modules
//!
//! - `jwt`: access token creation and validation
//! - `password`: Argon2id password hashing
//! - `session`: in-process registry of live sign-ins
//! - `gate`: sign in, authenticate, and sign out against configured staff accounts

pub mod gate;
pub mod jwt;
pub mod password;
pub mod session;

pub use gate::{AuthGate, SignedIn, StaffIdentity};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionRegistry;
