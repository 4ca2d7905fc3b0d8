use crate::domain::{
    authentication::{
        entities::{AuthorizeRequestInput, JwtClaim},
        value_objects::{AuthenticateOutput, Identity, LoginInput, RegisterInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

pub trait AuthService: Send + Sync {
    fn register(&self, input: RegisterInput)
    -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(
        &self,
        input: LoginInput,
    ) -> impl Future<Output = Result<AuthenticateOutput, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}

/// Signs and verifies access tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn sign(&self, claim: JwtClaim) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// Fails with `TokenExpired` or `InvalidToken`.
    fn verify(&self, token: String) -> impl Future<Output = Result<JwtClaim, CoreError>> + Send;

    /// Lifetime of newly signed tokens, in seconds.
    fn expiration(&self) -> i64;
}
