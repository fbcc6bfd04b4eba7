//! JWT-backed reset tokens

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sa_shared::config::ResetTokenConfig;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::traits::ResetTokenService;

/// Claims carried by a reset token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetClaims {
    /// Account id
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
    /// SHA-256 of the password hash at issue time
    pub fpr: String,
}

/// HS256 reset tokens bound to the account's password hash
pub struct JwtResetTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    ttl_seconds: i64,
}

impl JwtResetTokenService {
    pub fn new(config: &ResetTokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            ttl_seconds: config.ttl_seconds,
        }
    }

    /// Decode and validate signature, issuer and expiry
    pub fn decode_claims(&self, token: &str) -> Option<ResetClaims> {
        decode::<ResetClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| debug!(error = %e, "Reset token rejected"))
            .ok()
    }
}

fn fingerprint(password_hash: &str) -> String {
    hex::encode(Sha256::digest(password_hash.as_bytes()))
}

impl ResetTokenService for JwtResetTokenService {
    fn issue(&self, user: &User) -> Result<String, DomainError> {
        let now = Utc::now();
        let expires_at = Duration::try_seconds(self.ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| DomainError::Internal {
                message: format!("Reset token TTL out of range: {}s", self.ttl_seconds),
            })?;
        let claims = ResetClaims {
            sub: user.id.to_string(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            fpr: fingerprint(&user.password_hash),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign reset token: {}", e),
            }
        })
    }

    fn verify(&self, user: &User, token: &str) -> bool {
        match self.decode_claims(token) {
            Some(claims) => {
                claims.sub == user.id.to_string() && claims.fpr == fingerprint(&user.password_hash)
            }
            None => false,
        }
    }
}
