use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(
        &self,
        password: &str,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    /// `Ok(false)` on mismatch; errors are reserved for unreadable hashes.
    fn verify_password(
        &self,
        password: &str,
        password_hash: &str,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
