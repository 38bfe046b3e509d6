//! AES-128 encryption of whole buffers, ECB mode with PKCS#7 padding.
//!
//! There is no IV and no authentication tag: the output is exactly the
//! padded plaintext length, and identical 16-byte plaintext blocks under
//! the same key produce identical ciphertext blocks.  A wrong key is
//! detected only through the padding check on decrypt.
//!
//! Layout of the returned byte buffer:
//!   [ AES-128(block_0) | AES-128(block_1) | ... | AES-128(last block + padding) ]

use aes::Aes128;
use ecb::cipher::block_padding::Pkcs7;
use ecb::cipher::{BlockDecryptMut, BlockEncryptMut, KeyInit};

use crate::errors::{Result, SecureFilesError};

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// Encrypt `plaintext` with a 16-byte `key`.
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes128EcbEnc::new_from_slice(key)
        .map_err(|e| SecureFilesError::Crypto(format!("invalid key length: {e}")))?;

    Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails when the ciphertext is not a whole number of blocks or when the
/// padding does not check out (the usual symptom of a wrong key).
pub fn decrypt(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return Err(SecureFilesError::Crypto(format!(
            "ciphertext length {} is not a positive multiple of {BLOCK_LEN}",
            ciphertext.len()
        )));
    }

    let cipher = Aes128EcbDec::new_from_slice(key)
        .map_err(|e| SecureFilesError::Crypto(format!("invalid key length: {e}")))?;

    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| SecureFilesError::Crypto("bad padding — wrong key or corrupted data".into()))
}
