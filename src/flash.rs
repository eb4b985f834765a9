//! One-shot notices that survive a single redirect.
//!
//! Messages live as a percent-encoded JSON array in the signed `flash` cookie
//! and are removed again by the next page that renders them. A cookie whose
//! signature does not check out is treated as absent.

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use sha2::{Digest, Sha512};

pub const FLASH_COOKIE: &str = "flash";

/// Derives the cookie signing key from a secret of any length.
///
/// `Key` wants 64 bytes of master key material, which SHA-512 provides.
pub fn signing_key(secret: impl AsRef<[u8]>) -> Key {
    let master = Sha512::digest(secret.as_ref());
    Key::from(master.as_slice())
}

fn pending(jar: &SignedCookieJar) -> Vec<String> {
    jar.get(FLASH_COOKIE)
        .and_then(|c| urlencoding::decode(c.value()).ok().map(|v| v.into_owned()))
        .and_then(|v| serde_json::from_str(&v).ok())
        .unwrap_or_default()
}

/// Queues a notice for the next rendered page, keeping any already pending.
pub fn push(jar: SignedCookieJar, message: impl Into<String>) -> SignedCookieJar {
    let mut messages = pending(&jar);
    messages.push(message.into());
    let json = serde_json::to_string(&messages).unwrap_or_else(|_| "[]".to_string());
    let value = urlencoding::encode(&json).into_owned();

    jar.add(
        Cookie::build((FLASH_COOKIE, value))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Takes all pending notices and clears the cookie.
pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    if jar.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }

    let messages = pending(&jar);
    (jar.remove(Cookie::build(FLASH_COOKIE).path("/")), messages)
}
