use crate::filter::normalize_full_name;
use sha2::{Digest, Sha256};

const ALIAS_PREFIX: char = 'T';

/// Diagram node identifier for a fully-qualified type name
///
/// `T` followed by the uppercase hex of the first 8 bytes of SHA-256 over the
/// normalized name, so ids survive regeneration and stay grammar-safe.
pub fn alias(full_name: &str) -> String {
    let digest = Sha256::digest(normalize_full_name(full_name).as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    format!("{}{:016X}", ALIAS_PREFIX, u64::from_be_bytes(head))
}
