pub mod id_token;
pub mod verifier;

pub use id_token::IdTokenVerifier;
pub use verifier::{DecodedIdToken, TokenVerifier, VerifyError};
