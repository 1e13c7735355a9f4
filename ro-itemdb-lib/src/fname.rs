//! Short deterministic asset tokens.

use data_encoding::BASE32_NOPAD;

/// Derive a 13-character lowercase base32 token from an asset reference.
///
/// The MD5 digest is XOR-folded in half (byte `i` with byte `i + 8`) and the
/// 8 resulting bytes are base32 encoded without padding. Text is hashed as
/// its UTF-8 bytes.
pub fn generate_filename(reference: impl AsRef<[u8]>) -> String {
    let digest = md5::compute(reference.as_ref()).0;

    let mut folded = [0u8; 8];
    for (i, byte) in folded.iter_mut().enumerate() {
        *byte = digest[i] ^ digest[i + 8];
    }

    BASE32_NOPAD.encode(&folded).to_lowercase()
}

#[cfg(test)]
#[path = "tests/fname_tests.rs"]
mod tests;
