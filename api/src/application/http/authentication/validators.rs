use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "johndoe@example.com")]
    pub email: String,

    #[validate(length(min = 3, max = 30, message = "Username must be 3 to 30 characters"))]
    #[schema(example = "john_doe")]
    pub username: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "john1234")]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(email(message = "Invalid email address"))]
    #[schema(example = "johndoe@example.com")]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "john1234")]
    pub password: String,
}
