use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use super::SessionClaims;
use crate::ClientError;

/// Decodes bearer tokens into [`SessionClaims`].
///
/// Signature validation is disabled: the signing secret lives on the
/// server, and the client only needs the payload to know who is logged in
/// and which dashboard to show. Expiry is still enforced so a stale token
/// behaves like no token at all.
#[derive(Clone)]
pub struct TokenDecoder {
    validation: Validation,
    // HS256 key is unused with signature validation off, but the decode
    // API requires one
    key: DecodingKey,
}

impl TokenDecoder {
    /// Creates a decoder for the service's HS256 tokens.
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        Self {
            validation,
            key: DecodingKey::from_secret(&[]),
        }
    }

    /// Decodes a raw bearer token into claims.
    ///
    /// # Errors
    ///
    /// - `ClientError::TokenInvalid` - the token is not a well-formed JWT
    ///   or its payload is missing required fields
    /// - `ClientError::TokenExpired` - the payload carries an `exp` in
    ///   the past
    pub fn decode(&self, token: &str) -> Result<SessionClaims, ClientError> {
        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|_| ClientError::TokenInvalid)?;

        if data.claims.is_expired_at(Utc::now()) {
            return Err(ClientError::TokenExpired);
        }

        Ok(data.claims)
    }
}

impl Default for TokenDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header};

    use super::*;

    fn encode(payload: &serde_json::Value) -> String {
        let key = EncodingKey::from_secret(b"server-side-secret");
        jsonwebtoken::encode(&Header::default(), payload, &key).unwrap()
    }

    #[test]
    fn test_decode_round_trips_claims() {
        let token = encode(&serde_json::json!({
            "id": "65a1f0c2",
            "email": "a@b.com",
            "isAdmin": true,
        }));

        let decoder = TokenDecoder::new();
        let claims = decoder.decode(&token).unwrap();

        assert_eq!(claims.id, "65a1f0c2");
        assert_eq!(claims.email, "a@b.com");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_decode_without_knowing_the_secret() {
        // Any signing key works: the client decodes structurally
        let key = EncodingKey::from_secret(b"some-other-secret");
        let token = jsonwebtoken::encode(
            &Header::default(),
            &serde_json::json!({"id": "1", "email": "a@b.com"}),
            &key,
        )
        .unwrap();

        let decoder = TokenDecoder::new();
        assert!(decoder.decode(&token).is_ok());
    }

    #[test]
    fn test_malformed_token() {
        let decoder = TokenDecoder::new();
        assert_eq!(
            decoder.decode("not-a-token").unwrap_err(),
            ClientError::TokenInvalid
        );
        assert_eq!(decoder.decode("").unwrap_err(), ClientError::TokenInvalid);
    }

    #[test]
    fn test_payload_missing_required_fields() {
        // well-formed JWT whose payload lacks id/email
        let token = encode(&serde_json::json!({"role": "none"}));

        let decoder = TokenDecoder::new();
        assert_eq!(
            decoder.decode(&token).unwrap_err(),
            ClientError::TokenInvalid
        );
    }

    #[test]
    fn test_expired_token() {
        let token = encode(&serde_json::json!({
            "id": "1",
            "email": "a@b.com",
            "exp": (Utc::now() - Duration::hours(1)).timestamp(),
        }));

        let decoder = TokenDecoder::new();
        assert_eq!(
            decoder.decode(&token).unwrap_err(),
            ClientError::TokenExpired
        );
    }

    #[test]
    fn test_future_expiry_accepted() {
        let token = encode(&serde_json::json!({
            "id": "1",
            "email": "a@b.com",
            "exp": (Utc::now() + Duration::hours(1)).timestamp(),
        }));

        let decoder = TokenDecoder::new();
        assert!(decoder.decode(&token).is_ok());
    }

    #[test]
    fn test_token_without_expiry_accepted() {
        let token = encode(&serde_json::json!({"id": "1", "email": "a@b.com"}));

        let decoder = TokenDecoder::new();
        assert!(decoder.decode(&token).is_ok());
    }
}
