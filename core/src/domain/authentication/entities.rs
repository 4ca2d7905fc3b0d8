use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::Role;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub id: Uuid,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(id: Uuid, role: Role, expiration_seconds: i64) -> Self {
        let now = Utc::now();

        Self {
            id,
            role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiration_seconds)).timestamp(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizeRequestInput {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_expiration_is_relative_to_issue_time() {
        let claim = JwtClaim::new(Uuid::new_v4(), Role::Admin, 3600);
        assert_eq!(claim.exp - claim.iat, 3600);
    }
}
