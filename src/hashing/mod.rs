//! BLAKE3 content hashes for memoization keys and corpus record ids.

/// Computes the full 32-byte BLAKE3 hash of an input text.
#[inline]
pub fn hash_input(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
///
/// Used for memoization-cache keys and corpus record ids. With 64 bits the
/// collision probability stays negligible for corpus and cache sizes in the
/// millions, and a collision only causes a spurious cache hit on the memo
/// path or a rejected duplicate id at corpus load time, never silent data
/// corruption.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let bytes: [u8; 8] = hash.as_bytes()[0..8]
        .try_into()
        .expect("BLAKE3 always produces at least 8 bytes");
    u64::from_le_bytes(bytes)
}

/// Derives a stable record id from a corpus statement.
#[inline]
pub fn statement_id(statement: &str) -> u64 {
    hash_to_u64(statement.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_input_is_stable() {
        assert_eq!(hash_input("water boils at 100C"), hash_input("water boils at 100C"));
        assert_ne!(hash_input("water boils at 100C"), hash_input("water boils at 90C"));
    }

    #[test]
    fn hash_to_u64_differs_by_content() {
        assert_ne!(hash_to_u64(b"a"), hash_to_u64(b"b"));
        assert_eq!(hash_to_u64(b"a"), hash_to_u64(b"a"));
    }

    #[test]
    fn statement_id_matches_hash_of_statement() {
        let s = "The Great Wall of China is visible from space.";
        assert_eq!(statement_id(s), hash_to_u64(s.as_bytes()));
    }
}
