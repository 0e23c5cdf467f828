use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::application::ports::{SignatureError, SignatureVerifier};

/// Claims carried by a QStash delivery signature token.
#[derive(Debug, Deserialize)]
struct SignatureClaims {
    /// Base64url-encoded SHA-256 of the delivered body.
    body: String,
}

/// Verifies the JWT that the queue service attaches to each webhook
/// delivery.
///
/// The token is an HS256 JWT whose `body` claim is the base64url SHA-256 of
/// the raw request body. Two signing keys are accepted so the queue can
/// rotate keys without dropping deliveries: the current key is tried first,
/// then the next one.
pub struct QstashSignatureVerifier {
    current_key: DecodingKey,
    next_key: DecodingKey,
    validation: Validation,
}

impl QstashSignatureVerifier {
    pub fn new(current_signing_key: &str, next_signing_key: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // clock skew between queue and receiver
        validation.set_issuer(&["Upstash"]);

        Self {
            current_key: DecodingKey::from_secret(current_signing_key.as_bytes()),
            next_key: DecodingKey::from_secret(next_signing_key.as_bytes()),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<SignatureClaims, SignatureError> {
        decode::<SignatureClaims>(token, &self.current_key, &self.validation)
            .or_else(|_| decode::<SignatureClaims>(token, &self.next_key, &self.validation))
            .map(|data| data.claims)
            .map_err(|e| SignatureError::InvalidSignature(e.to_string()))
    }
}

impl SignatureVerifier for QstashSignatureVerifier {
    fn verify(&self, signature: &str, body: &[u8]) -> Result<(), SignatureError> {
        let claims = self.decode_claims(signature)?;
        let body_hash = URL_SAFE_NO_PAD.encode(Sha256::digest(body));
        if claims.body != body_hash {
            return Err(SignatureError::BodyMismatch);
        }
        Ok(())
    }
}
