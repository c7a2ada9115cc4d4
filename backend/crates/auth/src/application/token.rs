//! Session Tokens
//!
//! The cookie value is `{session_id}.{signature}` where the signature is
//! HMAC-SHA256 over the UUID string, base64url encoded without padding.
//! The token carries no state; it is only a tamper-evident reference to a
//! server-side session record.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::digest::Key;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use uuid::Uuid;

type HmacSha256 = Hmac<Sha256>;

/// Issue a signed token for a session id
pub fn issue(session_id: Uuid, secret: &[u8; 32]) -> String {
    let id_str = session_id.to_string();
    let sig = sign(&id_str, secret);
    format!("{id_str}.{sig}")
}

/// Verify a token and extract the session id.
///
/// Returns `None` for any malformed or tampered token. Verification never
/// distinguishes failure modes; a bad token is simply not a session.
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (id_str, sig) = token.split_once('.')?;

    // Constant-time comparison via the Mac verify API
    let mut mac = keyed(secret);
    mac.update(id_str.as_bytes());
    let sig_bytes = URL_SAFE_NO_PAD.decode(sig).ok()?;
    mac.verify_slice(&sig_bytes).ok()?;

    Uuid::parse_str(id_str).ok()
}

fn sign(id_str: &str, secret: &[u8; 32]) -> String {
    let mut mac = keyed(secret);
    mac.update(id_str.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

// HMAC zero-pads keys shorter than the block size, so keying from a
// zero-padded block is identical to keying from the 32 byte secret.
fn keyed(secret: &[u8; 32]) -> HmacSha256 {
    let mut key = Key::<HmacSha256>::default();
    key[..secret.len()].copy_from_slice(secret);
    HmacSha256::new(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8; 32] = b"test-secret-key-0123456789abcdef";
    const OTHER_SECRET: &[u8; 32] = b"another-secret-0123456789abcdef!";

    #[test]
    fn test_issue_verify_roundtrip() {
        let id = Uuid::new_v4();
        let token = issue(id, SECRET);
        assert_eq!(verify(&token, SECRET), Some(id));
    }

    #[test]
    fn test_tampered_id_is_rejected() {
        let token = issue(Uuid::new_v4(), SECRET);
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), sig);
        assert_eq!(verify(&forged, SECRET), None);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = issue(Uuid::new_v4(), SECRET);
        assert_eq!(verify(&token, OTHER_SECRET), None);
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        assert_eq!(verify("", SECRET), None);
        assert_eq!(verify("no-dot-here", SECRET), None);
        assert_eq!(verify("not-a-uuid.c2ln", SECRET), None);
        assert_eq!(verify(".", SECRET), None);
    }
}
