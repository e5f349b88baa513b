//! Token codec - signing and verification of claim sets

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::{DomainResult, TokenError};

/// Symmetric-key codec for session tokens.
///
/// The codec is a pure cryptographic primitive: it signs a claim set into
/// an opaque compact string and verifies signature, structure, and (when
/// requested) issuer/audience on the way back. It deliberately does not
/// check expiry or revocation; both are the session manager's job, layered
/// on top against its injected clock and store.
pub struct TokenCodec {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenCodec {
    /// Creates a codec from a shared secret and algorithm
    pub fn new(secret: &[u8], algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
        }
    }

    /// Signs a claim set into a compact token string
    pub fn encode(&self, claims: &Claims) -> DomainResult<String> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::TokenGenerationFailed.into())
    }

    /// Verifies signature and structure, returning the claim set
    ///
    /// Issuer and audience are matched only when an expectation is
    /// supplied. Every failure collapses to `InvalidToken`; a caller
    /// learns nothing about why a forged token was rejected.
    pub fn decode(
        &self,
        token: &str,
        expected_issuer: Option<&str>,
        expected_audience: Option<&str>,
    ) -> DomainResult<Claims> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked by the manager against its injected clock
        validation.validate_exp = false;
        if let Some(issuer) = expected_issuer {
            validation.set_issuer(&[issuer]);
        }
        if let Some(audience) = expected_audience {
            validation.set_audience(&[audience]);
        }
        validation.validate_aud = expected_audience.is_some();

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::InvalidToken)?;

        Ok(data.claims)
    }
}
