use crate::api::error::ApiError;
use crate::validation::error::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OwmError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Environment variable {0} is not set")]
    MissingEnvVar(&'static str),
}
