use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use rocket::Request;
use thiserror::Error;

pub(crate) type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Couldn't get a database connection: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("Database query failed: {0}")]
    Query(#[from] diesel::result::Error),

    #[error("Couldn't run migrations: {0}")]
    Migration(#[from] diesel_migrations::RunMigrationsError),

    #[error("Database task did not finish: {0}")]
    Task(#[from] rocket::tokio::task::JoinError),
}

/// Failures that stop the process before or while serving.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Couldn't launch server: {0}")]
    Launch(Box<rocket::Error>),
}

impl From<rocket::Error> for StartupError {
    fn from(err: rocket::Error) -> Self {
        StartupError::Launch(Box::new(err))
    }
}

#[derive(Debug)]
pub(crate) enum ErrorResponse {
    /// 400 with an empty body.
    BadRequest,
    /// 404 with an empty body.
    NotFound,
    Store(StoreError),
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        ErrorResponse::Store(err)
    }
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        match self {
            ErrorResponse::BadRequest => Response::build().status(Status::BadRequest).ok(),
            ErrorResponse::NotFound => Response::build().status(Status::NotFound).ok(),
            ErrorResponse::Store(err) => {
                tracing::error!(method = %req.method(), uri = %req.uri(), "{}", err);
                // Hand over to the default catcher.
                Err(Status::InternalServerError)
            }
        }
    }
}
