use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tonic::{Code, Status};
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("user with this email already exists")]
    AlreadyExists,
    #[error("user not found")]
    NotFound,
    #[error("invalid credentials")]
    Unauthorized,

    // infra things
    #[error(transparent)]
    Db(DbErr),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<DbErr> for AppError {
    fn from(e: DbErr) -> Self {
        AppError::from_db(e)
    }
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::NotFound => "NOT_FOUND",
            Self::Unauthorized => "UNAUTHENTICATED",
            Self::Db(_) => "DB_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn code(&self) -> Code {
        match self {
            Self::AlreadyExists => Code::AlreadyExists,
            Self::NotFound => Code::NotFound,
            Self::Unauthorized => Code::Unauthenticated,
            Self::Db(_) | Self::Internal(_) => Code::Internal,
        }
    }

    fn from_db(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::AlreadyExists;
        }
        match &err {
            DbErr::RecordNotFound(_) => AppError::NotFound,
            _ => AppError::Db(err),
        }
    }
}

impl From<AppError> for Status {
    fn from(e: AppError) -> Self {
        match e.code() {
            Code::Internal => {
                // storage details stay in the log, the caller gets a generic message
                error!(kind = e.kind(), error = %e, "Request failed");
                Status::internal("internal storage error")
            }
            code => Status::new(code, e.to_string()),
        }
    }
}
