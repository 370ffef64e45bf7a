use crate::db::sqlite_service::SqliteService;
use crate::types::{
    error::AppError,
    user::{DBUserCreate, DBUserUpdate},
};
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

// Every method is one statement; the storage engine gives single-row atomicity.
impl SqliteService {
    /// Fails with [`AppError::AlreadyExists`] when the email is taken.
    pub async fn insert_user(&self, payload: DBUserCreate) -> Result<UserModel, AppError> {
        User::insert(UserActive {
            id: Set(payload.id.clone()),
            name: Set(payload.name.clone()),
            email: Set(payload.email.clone()),
            password_hash: Set(payload.password_hash.clone()),
            role: Set(payload.role.clone()),
        })
        .exec_without_returning(&self.database_connection)
        .await?;

        Ok(UserModel {
            id: payload.id,
            name: payload.name,
            email: payload.email,
            password_hash: payload.password_hash,
            role: payload.role,
        })
    }

    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<UserModel>, AppError> {
        Ok(User::find_by_id(id)
            .one(&self.database_connection)
            .await?)
    }

    /// Overwrites all mutable columns of the row matching `id`.
    ///
    /// Not-found is decided by the affected-row count of the `UPDATE` itself,
    /// so a row deleted concurrently is reported instead of silently skipped.
    /// Email uniqueness is left to the storage constraint.
    pub async fn update_user(&self, id: &str, fields: DBUserUpdate) -> Result<UserModel, AppError> {
        let result = User::update_many()
            .set(UserActive {
                name: Set(fields.name.clone()),
                email: Set(fields.email.clone()),
                password_hash: Set(fields.password_hash.clone()),
                role: Set(fields.role.clone()),
                ..Default::default()
            })
            .filter(Column::Id.eq(id))
            .exec(&self.database_connection)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(UserModel {
            id: id.to_string(),
            name: fields.name,
            email: fields.email,
            password_hash: fields.password_hash,
            role: fields.role,
        })
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        let result = User::delete_by_id(id)
            .exec(&self.database_connection)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    /// All rows in storage order.
    pub async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(User::find().all(&self.database_connection).await?)
    }

    pub async fn get_user_by_email_and_password_hash(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<Option<UserModel>, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .filter(Column::PasswordHash.eq(password_hash))
            .one(&self.database_connection)
            .await?)
    }
}
