use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::blog::models::BlogId;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;

pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &PgRow) -> Result<User, UserError> {
        let id: Uuid = row.try_get("id").map_err(database_error)?;
        let username: String = row.try_get("username").map_err(database_error)?;
        let blogs: Vec<Uuid> = row.try_get("blogs").map_err(database_error)?;

        Ok(User {
            id: UserId(id),
            username: Username::new(username)?,
            name: row.try_get("name").map_err(database_error)?,
            password_hash: row.try_get("password_hash").map_err(database_error)?,
            blogs: blogs.into_iter().map(BlogId).collect(),
        })
    }
}

fn database_error(e: sqlx::Error) -> UserError {
    UserError::DatabaseError(e.to_string())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: User) -> Result<User, UserError> {
        let blogs: Vec<Uuid> = user.blogs.iter().map(|id| id.0).collect();

        sqlx::query(
            r#"
            INSERT INTO users (id, username, name, password_hash, blogs)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id.0)
        .bind(user.username.as_str())
        .bind(user.name.as_deref())
        .bind(&user.password_hash)
        .bind(blogs)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, name, password_hash, blogs
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, name, password_hash, blogs
            FROM users
            WHERE username = $1
            ORDER BY seq
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> Result<Vec<User>, UserError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, username, name, password_hash, blogs
            FROM users
            WHERE id = ANY($1)
            ORDER BY seq
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, name, password_hash, blogs
            FROM users
            ORDER BY seq
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn append_blog(&self, id: &UserId, blog_id: &BlogId) -> Result<(), UserError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET blogs = array_append(blogs, $2)
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .bind(blog_id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(UserError::NotFound(id.to_string()));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), UserError> {
        sqlx::query("DELETE FROM users")
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
