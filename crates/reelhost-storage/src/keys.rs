//! Remote object key generation.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

/// Generate a collision-resistant remote object identifier.
///
/// 32 bytes from a CSPRNG, URL-safe unpadded base64 (43 characters), safe
/// to embed directly in a URL path segment. No uniqueness check is
/// performed; 256 bits of entropy make collisions a non-concern.
pub fn generate_object_key() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_url_safe() {
        let key = generate_object_key();
        assert_eq!(key.len(), 43); // ceil(32 * 8 / 6) without padding
        assert!(key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn keys_are_distinct_across_many_generations() {
        let keys: HashSet<String> = (0..10_000).map(|_| generate_object_key()).collect();
        assert_eq!(keys.len(), 10_000);
    }
}
