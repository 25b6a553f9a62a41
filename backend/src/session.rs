use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use common::{Error, Identity, Result};
use time::Duration;

pub const COOKIE_NAME: &str = "gamechars-session";

const MAX_AGE_DAYS: i64 = 30;

/// Reads the caller's identity from the signed session cookie.
///
/// No cookie, or one whose signature does not check out, means the caller is
/// anonymous. A correctly signed cookie that cannot be decoded is an error.
pub fn identity_from_jar(jar: &SignedCookieJar) -> Result<Identity> {
    let Some(cookie) = jar.get(COOKIE_NAME) else {
        return Ok(Identity::anonymous());
    };

    let bytes = hex::decode(cookie.value()).map_err(|_| Error::InvalidSession)?;
    let identity: Identity = serde_json::from_slice(&bytes).map_err(|_| Error::InvalidSession)?;

    if identity.authenticated {
        Ok(identity)
    } else {
        Ok(Identity::anonymous())
    }
}

pub fn sign_in<S: Into<String>>(jar: SignedCookieJar, user_name: S) -> Result<SignedCookieJar> {
    Ok(jar.add(session_cookie(&Identity::user(user_name))?))
}

pub fn sign_out(jar: SignedCookieJar) -> Result<SignedCookieJar> {
    Ok(jar.add(session_cookie(&Identity::anonymous())?))
}

fn session_cookie(identity: &Identity) -> Result<Cookie<'static>> {
    let value = hex::encode(serde_json::to_vec(identity)?);

    Ok(Cookie::build((COOKIE_NAME, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(MAX_AGE_DAYS))
        .build())
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Key;

    use super::*;

    fn jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn no_cookie_is_anonymous() {
        assert_eq!(identity_from_jar(&jar()).unwrap(), Identity::anonymous());
    }

    #[test]
    fn sign_in_then_read_back() {
        let jar = sign_in(jar(), "alice").unwrap();

        assert_eq!(identity_from_jar(&jar).unwrap(), Identity::user("alice"));
    }

    #[test]
    fn sign_out_clears_identity() {
        let jar = sign_in(jar(), "alice").unwrap();
        let jar = sign_out(jar).unwrap();

        assert_eq!(identity_from_jar(&jar).unwrap(), Identity::anonymous());
    }

    #[test]
    fn payload_is_hex_encoded_json() {
        let jar = sign_in(jar(), "alice").unwrap();
        let cookie = jar.get(COOKIE_NAME).unwrap();

        assert!(!cookie.value().contains("alice"));
        assert_eq!(
            String::from_utf8(hex::decode(cookie.value()).unwrap()).unwrap(),
            r#"{"userName":"alice","authenticated":true}"#
        );
    }

    #[test]
    fn undecodable_payload_is_rejected() {
        let jar = jar().add(Cookie::new(COOKIE_NAME, "not hex"));

        assert!(matches!(
            identity_from_jar(&jar).unwrap_err(),
            Error::InvalidSession
        ));
    }
}
