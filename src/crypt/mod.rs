//! Symmetric encryption of serializable values.
//!
//! Values are serialized as JSON and sealed with AES-256-GCM under a key
//! derived from a caller-supplied (or content-derived) key string. The
//! random nonce is prepended to the ciphertext and the whole envelope is
//! base64-encoded.
//!
//! The key string is the unit of exchange: [`encrypt`] returns it
//! alongside the ciphertext, and [`decrypt`] takes the same string back.
//! The actual 256-bit cipher key is derived from it internally.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CryptError;
use crate::hash::md5::md5_hex;

const NONCE_LEN: usize = 12;

/// The result of [`encrypt`]: the sealed value and the key string needed
/// to decrypt it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encrypted {
    /// Base64 envelope: nonce followed by ciphertext.
    pub value: String,

    /// The key string to pass to [`decrypt`].
    pub key: String,
}

/// Serializes `value` as JSON and encrypts it.
///
/// The key string is chosen as:
/// - `md5_key == true` and a key is given: the MD5 hex of that key
/// - a key is given: the key verbatim
/// - no key: the MD5 hex of the serialized plaintext
///
/// # Example
///
/// ```
/// use fileslice::crypt;
///
/// let sealed = crypt::encrypt(&"secret note", Some("passphrase"), false)?;
/// let back: String = crypt::decrypt(&sealed.value, &sealed.key)?;
/// assert_eq!(back, "secret note");
/// # Ok::<(), fileslice::CryptError>(())
/// ```
pub fn encrypt<T: Serialize>(
    value: &T,
    key: Option<&str>,
    md5_key: bool,
) -> Result<Encrypted, CryptError> {
    let plaintext = serde_json::to_vec(value)?;
    let key_string = match key {
        Some(k) if md5_key => md5_hex(k.as_bytes()),
        Some(k) => k.to_string(),
        None => md5_hex(&plaintext),
    };

    let cipher = cipher_for(&key_string);
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
    let ciphertext = cipher
        .encrypt(&nonce, plaintext.as_slice())
        .map_err(|_| CryptError::Cipher)?;

    let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(nonce.as_slice());
    envelope.extend_from_slice(&ciphertext);

    Ok(Encrypted {
        value: STANDARD.encode(envelope),
        key: key_string,
    })
}

/// Decrypts a value produced by [`encrypt`] and deserializes it.
///
/// Fails with [`CryptError::Cipher`] on a wrong key or tampered
/// ciphertext (the GCM tag does not verify).
pub fn decrypt<T: DeserializeOwned>(value: &str, key: &str) -> Result<T, CryptError> {
    let envelope = STANDARD.decode(value)?;
    if envelope.len() < NONCE_LEN {
        return Err(CryptError::Malformed);
    }
    let (nonce, ciphertext) = envelope.split_at(NONCE_LEN);

    let cipher = cipher_for(key);
    let plaintext = cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptError::Cipher)?;

    Ok(serde_json::from_slice(&plaintext)?)
}

/// Derives the AES-256 key from a key string: the 32 hex bytes of its MD5
/// digest, so arbitrary-length key strings map onto a fixed-size key.
fn cipher_for(key_string: &str) -> Aes256Gcm {
    let hex = md5_hex(key_string.as_bytes());
    Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(hex.as_bytes()))
}
