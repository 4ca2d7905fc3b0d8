use tracing::{info, instrument};

use crate::domain::{
    authentication::{
        entities::{AuthorizeRequestInput, JwtClaim},
        ports::{AuthService, TokenRepository},
        value_objects::{AuthenticateOutput, Identity, LoginInput, RegisterInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    department::ports::{DepartmentRepository, PositionRepository},
    employee::ports::EmployeeRepository,
    health::ports::HealthCheckRepository,
    user::{
        entities::{Role, User},
        ports::UserRepository,
    },
};

impl<U, E, D, P, H, T, HC> AuthService for Service<U, E, D, P, H, T, HC>
where
    U: UserRepository,
    E: EmployeeRepository,
    D: DepartmentRepository,
    P: PositionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register(&self, input: RegisterInput) -> Result<User, CoreError> {
        let email_count = self
            .user_repository
            .count_by_email(input.email.clone(), None)
            .await?;
        if email_count != 0 {
            return Err(CoreError::Validation("Email already in use".to_string()));
        }

        let username_count = self
            .user_repository
            .count_by_username(input.username.clone(), None)
            .await?;
        if username_count != 0 {
            return Err(CoreError::Validation("Username already in use".to_string()));
        }

        let password_hash = self.hasher_repository.hash_password(&input.password).await?;
        let user = User::new(input.email, input.username, password_hash, Role::User);

        let user = self.user_repository.create_user(user).await?;
        info!(user_id = %user.id, "user registered");

        Ok(user)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn login(&self, input: LoginInput) -> Result<AuthenticateOutput, CoreError> {
        let user = self
            .user_repository
            .get_by_email(input.email)
            .await?
            .ok_or(CoreError::InvalidCredentials)?;

        let is_valid = self
            .hasher_repository
            .verify_password(&input.password, &user.password)
            .await?;
        if !is_valid {
            return Err(CoreError::InvalidCredentials);
        }

        let claim = JwtClaim::new(user.id, user.role, self.token_repository.expiration());
        let access_token = self.token_repository.sign(claim).await?;

        Ok(AuthenticateOutput {
            user_id: user.id,
            access_token,
        })
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claim = self.token_repository.verify(input.token).await?;

        Ok(Identity::new(claim.id, claim.role))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::domain::common::services::tests::MockPorts;

    fn register_input() -> RegisterInput {
        RegisterInput {
            email: "budi@example.com".to_string(),
            username: "budi".to_string(),
            password: "secret123".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_rejects_used_email() {
        let mut ports = MockPorts::default();
        ports
            .user_repository
            .expect_count_by_email()
            .with(eq("budi@example.com".to_string()), eq(None))
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let result = ports.into_service().register(register_input()).await;

        assert_eq!(
            result,
            Err(CoreError::Validation("Email already in use".to_string()))
        );
    }

    #[tokio::test]
    async fn test_register_rejects_used_username() {
        let mut ports = MockPorts::default();
        ports
            .user_repository
            .expect_count_by_email()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_username()
            .returning(|_, _| Box::pin(async { Ok(1) }));

        let result = ports.into_service().register(register_input()).await;

        assert_eq!(
            result,
            Err(CoreError::Validation("Username already in use".to_string()))
        );
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_assigns_user_role() {
        let mut ports = MockPorts::default();
        ports
            .user_repository
            .expect_count_by_email()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .user_repository
            .expect_count_by_username()
            .returning(|_, _| Box::pin(async { Ok(0) }));
        ports
            .hasher_repository
            .expect_hash_password()
            .returning(|_| Box::pin(async { Ok("hashed".to_string()) }));
        ports
            .user_repository
            .expect_create_user()
            .withf(|user| user.password == "hashed" && user.role == Role::User)
            .returning(|user| Box::pin(async move { Ok(user) }));

        let user = ports.into_service().register(register_input()).await.unwrap();

        assert_eq!(user.email, "budi@example.com");
        assert_eq!(user.username, "budi");
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_is_invalid_credentials() {
        let mut ports = MockPorts::default();
        ports
            .user_repository
            .expect_get_by_email()
            .returning(|_| Box::pin(async { Ok(None) }));

        let result = ports
            .into_service()
            .login(LoginInput {
                email: "nobody@example.com".to_string(),
                password: "secret123".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_invalid_credentials() {
        let mut ports = MockPorts::default();
        let user = User::new(
            "budi@example.com".to_string(),
            "budi".to_string(),
            "hashed".to_string(),
            Role::User,
        );
        ports
            .user_repository
            .expect_get_by_email()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        ports
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(false) }));

        let result = ports
            .into_service()
            .login(LoginInput {
                email: "budi@example.com".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_returns_signed_token() {
        let mut ports = MockPorts::default();
        let user = User::new(
            "admin@example.com".to_string(),
            "admin".to_string(),
            "hashed".to_string(),
            Role::Admin,
        );
        let user_id = user.id;
        ports
            .user_repository
            .expect_get_by_email()
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(Some(user)) })
            });
        ports
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| Box::pin(async { Ok(true) }));
        ports.token_repository.expect_expiration().return_const(3600i64);
        ports
            .token_repository
            .expect_sign()
            .withf(move |claim| claim.id == user_id && claim.role == Role::Admin)
            .returning(|_| Box::pin(async { Ok("signed.jwt.token".to_string()) }));

        let output = ports
            .into_service()
            .login(LoginInput {
                email: "admin@example.com".to_string(),
                password: "admin123".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(output.user_id, user_id);
        assert_eq!(output.access_token, "signed.jwt.token");
    }

    #[tokio::test]
    async fn test_authorize_request_builds_identity_from_claims() {
        let mut ports = MockPorts::default();
        let user_id = Uuid::new_v4();
        ports
            .token_repository
            .expect_verify()
            .returning(move |_| Box::pin(async move { Ok(JwtClaim::new(user_id, Role::User, 60)) }));

        let identity = ports
            .into_service()
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(identity, Identity::new(user_id, Role::User));
    }

    #[tokio::test]
    async fn test_authorize_request_propagates_expiry() {
        let mut ports = MockPorts::default();
        ports
            .token_repository
            .expect_verify()
            .returning(|_| Box::pin(async { Err(CoreError::TokenExpired) }));

        let result = ports
            .into_service()
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::TokenExpired));
    }
}
