use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use sha2::{Digest, Sha256};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenRepository},
    common::entities::app_errors::CoreError,
};

/// HS256 tokens keyed by the hex SHA-256 digest of the configured secret.
#[derive(Clone)]
pub struct JwtTokenRepository {
    secret: String,
    expiration: i64,
}

impl JwtTokenRepository {
    pub fn new(secret: &str, expiration: i64) -> Self {
        Self {
            secret: hex::encode(Sha256::digest(secret.as_bytes())),
            expiration,
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    async fn sign(&self, claim: JwtClaim) -> Result<String, CoreError> {
        encode(
            &Header::new(Algorithm::HS256),
            &claim,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    async fn verify(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(
            &token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => {
                debug!("Rejected token: {}", e);
                CoreError::InvalidToken
            }
        })
    }

    fn expiration(&self) -> i64 {
        self.expiration
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::entities::Role;

    #[tokio::test]
    async fn test_sign_then_verify() {
        let repository = JwtTokenRepository::new("secret", 3600);
        let claim = JwtClaim::new(Uuid::new_v4(), Role::Admin, repository.expiration());

        let token = repository.sign(claim.clone()).await.unwrap();
        let verified = repository.verify(token).await.unwrap();

        assert_eq!(verified, claim);
    }

    #[tokio::test]
    async fn test_expired_token() {
        let repository = JwtTokenRepository::new("secret", 3600);
        let claim = JwtClaim::new(Uuid::new_v4(), Role::User, -3600);

        let token = repository.sign(claim).await.unwrap();

        assert_eq!(repository.verify(token).await, Err(CoreError::TokenExpired));
    }

    #[tokio::test]
    async fn test_token_from_other_secret_is_invalid() {
        let signer = JwtTokenRepository::new("secret", 3600);
        let verifier = JwtTokenRepository::new("other", 3600);
        let token = signer
            .sign(JwtClaim::new(Uuid::new_v4(), Role::User, 3600))
            .await
            .unwrap();

        assert_eq!(verifier.verify(token).await, Err(CoreError::InvalidToken));
        assert_eq!(
            verifier.verify("garbage".to_string()).await,
            Err(CoreError::InvalidToken)
        );
    }
}
