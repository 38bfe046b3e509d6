//! Integration tests for the SecureFiles crypto module.

use securefiles::crypto::{decrypt, derive_key, encrypt, hash_password, verify_password};

// ---------------------------------------------------------------------------
// Password hashing
// ---------------------------------------------------------------------------

#[test]
fn verify_accepts_matching_password() {
    for pw in ["correct-horse", "", "  spaces  ", "ünïcödé"] {
        let stored = hash_password(pw);
        assert!(verify_password(pw, &stored), "own hash must verify: {pw:?}");
    }
}

#[test]
fn verify_rejects_different_passwords() {
    let pairs = [
        ("correct-horse", "wrong"),
        ("password", "Password"),
        ("hunter2", "hunter3"),
        ("", " "),
    ];

    for (real, guess) in pairs {
        assert!(
            !verify_password(guess, &hash_password(real)),
            "{guess:?} must not verify against {real:?}"
        );
    }
}

#[test]
fn hash_is_unsalted_and_deterministic() {
    assert_eq!(hash_password("same"), hash_password("same"));
    assert_ne!(hash_password("same"), hash_password("other"));
}

// ---------------------------------------------------------------------------
// Key derivation
// ---------------------------------------------------------------------------

#[test]
fn derived_key_is_prefix_of_password_hash() {
    let key = derive_key("correct-horse");
    let hash = hash_password("correct-horse");
    assert_eq!(key.as_bytes()[..], hash[..16]);
}

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = derive_key("correct-horse");
    let inputs: [&[u8]; 4] = [b"", b"x", b"exactly 16 bytes", &[0xFFu8; 1000]];

    for plaintext in inputs {
        let ciphertext = encrypt(key.as_bytes(), plaintext).expect("encrypt");
        assert_eq!(ciphertext.len() % 16, 0);
        assert!(ciphertext.len() > plaintext.len());

        let recovered = decrypt(key.as_bytes(), &ciphertext).expect("decrypt");
        assert_eq!(recovered, plaintext);
    }
}

#[test]
fn encryption_is_deterministic() {
    let key = derive_key("pw");

    let ct1 = encrypt(key.as_bytes(), b"same input").unwrap();
    let ct2 = encrypt(key.as_bytes(), b"same input").unwrap();

    // No IV: the same plaintext always gives the same ciphertext.
    assert_eq!(ct1, ct2);
}

#[test]
fn identical_blocks_encrypt_identically() {
    let key = derive_key("pw");
    let plaintext = b"ABCDEFGHIJKLMNOP".repeat(2);

    let ct = encrypt(key.as_bytes(), &plaintext).unwrap();
    assert_eq!(ct.len(), 48);
    assert_eq!(ct[0..16], ct[16..32]);
    assert_ne!(ct[16..32], ct[32..48]);
}

#[test]
fn decrypt_with_wrong_key_fails() {
    let cases: [(&str, &str, &[u8]); 4] = [
        ("hunter2", "hunter3", b"TOP SECRET"),
        ("alpha", "beta", b"The quick brown fox jumps over the lazy dog"),
        ("password", "Password", b"Hello, vault!"),
        ("correct-horse", "battery-staple", b"line one\nline two\n"),
    ];

    for (right, wrong, plaintext) in cases {
        let ciphertext = encrypt(derive_key(right).as_bytes(), plaintext).unwrap();
        let result = decrypt(derive_key(wrong).as_bytes(), &ciphertext);
        assert!(result.is_err(), "{wrong:?} must not decrypt data for {right:?}");
    }
}

#[test]
fn decrypt_with_truncated_data_fails() {
    let key = derive_key("pw");
    let ciphertext = encrypt(key.as_bytes(), b"some longer plaintext here").unwrap();

    assert!(decrypt(key.as_bytes(), &ciphertext[..ciphertext.len() - 3]).is_err());
    assert!(decrypt(key.as_bytes(), &[]).is_err());
}
