use super::pb::{
    user_service_server::{UserService, UserServiceServer},
    CreateUserRequest, DeleteUserRequest, Empty, GetUserRequest, ListUsersResponse, LoginRequest,
    LoginResponse, UpdateUserRequest, User, UserResponse,
};
use crate::db::sqlite_service::SqliteService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate},
};
use crate::utils::{
    password::hash_password,
    token::{new_id, LOGIN_TOKEN},
};
use entity::user::Model as UserModel;
use std::sync::Arc;
use tonic::{Request, Response, Status};
use tracing::{debug, info};

impl From<UserModel> for User {
    fn from(m: UserModel) -> Self {
        User {
            id: m.id,
            name: m.name,
            email: m.email,
            password_hash: m.password_hash,
            role: m.role,
        }
    }
}

fn user_response(model: UserModel) -> Response<UserResponse> {
    Response::new(UserResponse {
        user: Some(model.into()),
    })
}

#[derive(Clone)]
pub struct UserSvc {
    pub sqlite_service: Arc<SqliteService>,
}

impl UserSvc {
    pub fn new(sqlite_service: Arc<SqliteService>) -> Self {
        Self { sqlite_service }
    }

    async fn require_user(&self, id: &str) -> Result<UserModel, AppError> {
        self.sqlite_service
            .get_user_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }
}

#[tonic::async_trait]
impl UserService for UserSvc {
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let r = request.into_inner();
        debug!(email = %r.email, "CreateUser");

        let created = self
            .sqlite_service
            .insert_user(DBUserCreate {
                id: new_id(),
                name: r.name,
                email: r.email,
                password_hash: hash_password(&r.password_hash),
                role: r.role,
            })
            .await?;

        info!(user_id = %created.id, "User created");
        Ok(user_response(created))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let r = request.into_inner();
        debug!(user_id = %r.id, "GetUser");

        Ok(user_response(self.require_user(&r.id).await?))
    }

    async fn update_user(
        &self,
        request: Request<UpdateUserRequest>,
    ) -> Result<Response<UserResponse>, Status> {
        let r = request.into_inner();
        debug!(user_id = %r.id, "UpdateUser");

        self.require_user(&r.id).await?;

        let updated = self
            .sqlite_service
            .update_user(
                &r.id,
                DBUserUpdate {
                    name: r.name,
                    email: r.email,
                    password_hash: hash_password(&r.password_hash),
                    role: r.role,
                },
            )
            .await?;

        info!(user_id = %updated.id, "User updated");
        Ok(user_response(updated))
    }

    async fn delete_user(
        &self,
        request: Request<DeleteUserRequest>,
    ) -> Result<Response<Empty>, Status> {
        let r = request.into_inner();
        debug!(user_id = %r.id, "DeleteUser");

        self.require_user(&r.id).await?;
        self.sqlite_service.delete_user(&r.id).await?;

        info!(user_id = %r.id, "User deleted");
        Ok(Response::new(Empty {}))
    }

    async fn list_users(
        &self,
        _request: Request<Empty>,
    ) -> Result<Response<ListUsersResponse>, Status> {
        let users = self.sqlite_service.list_users().await?;
        debug!(count = users.len(), "ListUsers");

        Ok(Response::new(ListUsersResponse {
            users: users.into_iter().map(User::from).collect(),
        }))
    }

    async fn login(
        &self,
        request: Request<LoginRequest>,
    ) -> Result<Response<LoginResponse>, Status> {
        let r = request.into_inner();
        debug!(email = %r.email, "Login");

        let password_hash = hash_password(&r.password_hash);
        self.sqlite_service
            .get_user_by_email_and_password_hash(&r.email, &password_hash)
            .await?
            .ok_or(AppError::Unauthorized)?;

        Ok(Response::new(LoginResponse {
            token: LOGIN_TOKEN.to_string(),
        }))
    }
}

pub fn server(sqlite_service: Arc<SqliteService>) -> UserServiceServer<UserSvc> {
    UserServiceServer::new(UserSvc::new(sqlite_service))
}
