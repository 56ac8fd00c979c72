pub mod password;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config::{Environment, SecurityConfig};

/// HS512 needs a key at least as long as its 512-bit output
pub const MIN_SECRET_BYTES: usize = 64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User email
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT secret is not valid base64")]
    InvalidSecret,

    #[error("JWT secret must be at least {MIN_SECRET_BYTES} bytes, got {0}")]
    SecretTooShort(usize),

    #[error("JWT claims string is empty")]
    EmptyToken,

    #[error("Invalid JWT signature")]
    InvalidSignature,

    #[error("JWT token is expired")]
    Expired,

    #[error("JWT token is unsupported: {0}")]
    Unsupported(String),

    #[error("Invalid JWT token: {0}")]
    Malformed(String),

    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
}

impl From<jsonwebtoken::errors::Error> for JwtError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => JwtError::InvalidSignature,
            ErrorKind::ExpiredSignature => JwtError::Expired,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName | ErrorKind::MissingAlgorithm => {
                JwtError::Unsupported(err.to_string())
            }
            _ => JwtError::Malformed(err.to_string()),
        }
    }
}

/// Signs and verifies the bearer tokens handed out at login
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration: Duration,
}

impl JwtService {
    /// Build from config. A missing or unusable secret is only tolerated in
    /// development, where a throwaway key is generated instead.
    pub fn from_config(security: &SecurityConfig, environment: Environment) -> Result<Self, JwtError> {
        match decode_secret(&security.jwt_secret) {
            Ok(key) => {
                tracing::info!("JWT signing key loaded from configuration");
                Ok(Self::new(&key, security.jwt_expiration_ms))
            }
            Err(e) if environment.is_development() => {
                tracing::warn!(
                    "JWT secret unusable ({}); generated a random HS512 key for development. \
                     Set JWT_SECRET to a base64-encoded key of at least {} bytes (see `employee-api generate-secret`)",
                    e,
                    MIN_SECRET_BYTES
                );
                Ok(Self::new(&random_key_bytes(), security.jwt_expiration_ms))
            }
            Err(e) => Err(e),
        }
    }

    pub fn new(key: &[u8], expiration_ms: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(key),
            decoding_key: DecodingKey::from_secret(key),
            validation,
            expiration: Duration::milliseconds(i64::try_from(expiration_ms).unwrap_or(i64::MAX)),
        }
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    pub fn generate_token(&self, subject: &str, roles: &[String]) -> Result<String, JwtError> {
        tracing::debug!("Generating JWT token for user: {}", subject);
        let now = Utc::now();
        let exp = now
            .checked_add_signed(self.expiration)
            .ok_or_else(|| JwtError::TokenGeneration("expiration overflows".to_string()))?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            roles: roles.to_vec(),
        };
        self.encode(&claims)
    }

    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        encode(&Header::new(Algorithm::HS512), claims, &self.encoding_key)
            .map_err(|e| JwtError::TokenGeneration(e.to_string()))
    }

    /// Verify signature, algorithm and expiry, returning the claims
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        if token.trim().is_empty() {
            return Err(JwtError::EmptyToken);
        }

        match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => {
                tracing::debug!("JWT token is valid");
                Ok(data.claims)
            }
            Err(e) => {
                let err = JwtError::from(e);
                tracing::error!("{}", err);
                Err(err)
            }
        }
    }

    pub fn subject(&self, token: &str) -> Result<String, JwtError> {
        self.validate_token(token).map(|claims| claims.sub)
    }
}

fn decode_secret(secret: &str) -> Result<Vec<u8>, JwtError> {
    let key = STANDARD
        .decode(secret.trim())
        .map_err(|_| JwtError::InvalidSecret)?;
    if key.len() < MIN_SECRET_BYTES {
        return Err(JwtError::SecretTooShort(key.len()));
    }
    Ok(key)
}

fn random_key_bytes() -> Vec<u8> {
    (0..MIN_SECRET_BYTES / 16)
        .flat_map(|_| *Uuid::new_v4().as_bytes())
        .collect()
}

/// Fresh base64 secret suitable for `JWT_SECRET`
pub fn generate_secret() -> String {
    STANDARD.encode(random_key_bytes())
}
