use paperquiz::application::ports::{SignatureError, SignatureVerifier};
use paperquiz::infrastructure::queue::QstashSignatureVerifier;

use crate::helpers::{CURRENT_SIGNING_KEY, NEXT_SIGNING_KEY, sign_delivery};

fn verifier() -> QstashSignatureVerifier {
    QstashSignatureVerifier::new(CURRENT_SIGNING_KEY, NEXT_SIGNING_KEY)
}

#[test]
fn given_delivery_signed_with_current_key_when_verifying_then_accepted() {
    let body = br#"{"jobId": "job-1"}"#;
    let signature = sign_delivery(CURRENT_SIGNING_KEY, body);

    assert!(verifier().verify(&signature, body).is_ok());
}

#[test]
fn given_delivery_signed_with_next_key_when_verifying_then_accepted() {
    let body = br#"{"jobId": "job-1"}"#;
    let signature = sign_delivery(NEXT_SIGNING_KEY, body);

    assert!(verifier().verify(&signature, body).is_ok());
}

#[test]
fn given_delivery_signed_with_unknown_key_when_verifying_then_rejected() {
    let body = br#"{"jobId": "job-1"}"#;
    let signature = sign_delivery("rogue-key", body);

    let result = verifier().verify(&signature, body);

    assert!(matches!(result, Err(SignatureError::InvalidSignature(_))));
}

#[test]
fn given_signature_over_other_body_when_verifying_then_body_mismatch() {
    let signature = sign_delivery(CURRENT_SIGNING_KEY, b"original body");

    let result = verifier().verify(&signature, b"tampered body");

    assert!(matches!(result, Err(SignatureError::BodyMismatch)));
}

#[test]
fn given_garbage_token_when_verifying_then_rejected() {
    let result = verifier().verify("not.a.jwt", b"body");

    assert!(matches!(result, Err(SignatureError::InvalidSignature(_))));
}
