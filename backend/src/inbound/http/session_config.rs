//! Session configuration parsing and validation.
//!
//! Centralises the environment-driven session cookie settings so they are
//! validated consistently and can be tested with a mocked environment.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const SESSION_KEY_DEFAULT_PATH: &str = "/var/run/secrets/session_key";
const SESSION_KEY_MIN_LEN: usize = 64;
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Build mode for session configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and emit warnings for missing toggles.
    Debug,
    /// Release builds require explicit, valid session toggles.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Session cookie settings derived from the environment.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// Configured `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

impl SessionSettings {
    /// Settings for local runs and tests: fresh key, insecure `Lax` cookie.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            key: Key::generate(),
            cookie_secure: false,
            same_site: SameSite::Lax,
        }
    }
}

/// Errors raised while validating session configuration.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the session key file failed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The session key file is too short for release builds.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// `SameSite=None` requires a secure cookie in release builds.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Release builds must not allow ephemeral session keys.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build session settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use storefront::inbound::http::session_config::{session_settings_from_env, BuildMode};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|_| None);
///
/// let settings = session_settings_from_env(&env, BuildMode::Debug).expect("debug defaults");
/// assert!(settings.cookie_secure);
/// ```
///
/// # Errors
/// Release builds reject missing or malformed toggles and unreadable or short
/// key files; see [`SessionConfigError`].
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = flag_from_env(env, mode, COOKIE_SECURE_ENV, true)?;
    let same_site = same_site_from_env(env, mode, cookie_secure)?;
    let allow_ephemeral = flag_from_env(env, mode, ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key = session_key_from_env(env, mode, allow_ephemeral)?;

    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

/// Return `fallback` in debug builds (after warning) or `error` in release.
fn debug_fallback<T>(
    mode: BuildMode,
    fallback: T,
    error: SessionConfigError,
) -> Result<T, SessionConfigError> {
    if mode.is_debug() {
        warn!(%error, "session setting fallback applied");
        Ok(fallback)
    } else {
        Err(error)
    }
}

fn flag_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    default_value: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return debug_fallback(mode, default_value, SessionConfigError::MissingEnv { name });
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None => debug_fallback(
            mode,
            default_value,
            SessionConfigError::InvalidEnv {
                name,
                value,
                expected: BOOL_EXPECTED,
            },
        ),
    }
}

fn same_site_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let default_same_site = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };

    let Some(value) = env.string(SAMESITE_ENV) else {
        return debug_fallback(
            mode,
            default_same_site,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
        );
    };

    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => debug_fallback(
            mode,
            SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
        ),
        _ => debug_fallback(
            mode,
            default_same_site,
            SessionConfigError::InvalidEnv {
                name: SAMESITE_ENV,
                value,
                expected: SAMESITE_EXPECTED,
            },
        ),
    }
}

fn session_key_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| SESSION_KEY_DEFAULT_PATH.to_owned()),
    );

    match std::fs::read(&path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if length < SESSION_KEY_MIN_LEN {
                bytes.zeroize();
                let error = SessionConfigError::KeyTooShort {
                    path,
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                };
                return debug_fallback(mode, Key::generate(), error);
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(error) if mode.is_debug() || allow_ephemeral => {
            warn!(
                path = %path.display(),
                error = %error,
                "using temporary session key (dev only)"
            );
            Ok(Key::generate())
        }
        Err(source) => Err(SessionConfigError::KeyRead { path, source }),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
