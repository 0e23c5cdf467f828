/// Verifies that a webhook delivery was produced by the queue service.
///
/// Verification is over the raw request body, so the webhook handler must
/// read the body as bytes before parsing it.
pub trait SignatureVerifier: Send + Sync {
    fn verify(&self, signature: &str, body: &[u8]) -> Result<(), SignatureError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid signature: {0}")]
    InvalidSignature(String),
    #[error("signature body hash does not match delivered body")]
    BodyMismatch,
}
