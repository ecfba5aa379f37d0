//! Ed25519 check of an oracle reading against the trusted key.
//!
//! Pure and stateless: it neither reads nor writes contract storage.

use common::pricefeed::types::{OracleError, PriceRecord};
use ed25519_dalek::{PublicKey, Signature};

pub fn verify_price_signature(
    oracle_key: &[u8; 32],
    record: &PriceRecord,
    signature: &[u8; 64],
) -> Result<(), OracleError> {
    let public_key =
        PublicKey::from_bytes(oracle_key).map_err(|_| OracleError::InvalidSignature)?;
    let signature =
        Signature::try_from(&signature[..]).map_err(|_| OracleError::InvalidSignature)?;

    // Runs in wasm rather than through the host's ed25519_verify, which traps on a bad
    // signature instead of returning. Costs binary size and instruction budget per call.
    public_key
        .verify_strict(&record.message(), &signature)
        .map_err(|_| OracleError::InvalidSignature)
}
