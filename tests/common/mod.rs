#![allow(dead_code)]

use std::sync::Arc;
use tempfile::TempDir;
use user_service::db::sqlite_service::SqliteService;
use user_service::grpc::users::UserSvc;

pub struct TestContext {
    pub db: Arc<SqliteService>,
    pub svc: UserSvc,
    pub _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> TestContext {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display());

        let db = Arc::new(
            SqliteService::new(&db_url, 5)
                .await
                .expect("Failed to initialize SqliteService")
        );

        TestContext {
            svc: UserSvc::new(db.clone()),
            db,
            _dir: dir,
        }
    }
}

// Test data helpers
pub mod test_data {
    use user_service::grpc::pb::{CreateUserRequest, LoginRequest, UpdateUserRequest};
    use user_service::types::user::DBUserCreate;
    use user_service::utils::token::new_id;

    pub fn sample_row(email: &str) -> DBUserCreate {
        DBUserCreate {
            id: new_id(),
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "stored-hash".to_string(),
            role: "user".to_string(),
        }
    }

    pub fn create_request(name: &str, email: &str, secret: &str, role: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: secret.to_string(),
            role: role.to_string(),
        }
    }

    pub fn update_request(id: &str, name: &str, email: &str, secret: &str, role: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: secret.to_string(),
            role: role.to_string(),
        }
    }

    pub fn login_request(email: &str, secret: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password_hash: secret.to_string(),
        }
    }
}
