mod qstash_dispatcher;
mod signature;

pub use qstash_dispatcher::QstashDispatcher;
pub use signature::QstashSignatureVerifier;

/// Header carrying the delivery signature on webhook requests.
pub const SIGNATURE_HEADER: &str = "upstash-signature";
