use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;

const BLOG_COLUMNS: &str = "id, title, author, url, likes, user_id, comments";

pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_blog(row: &PgRow) -> Result<Blog, BlogError> {
        let id: Uuid = row.try_get("id").map_err(database_error)?;
        let user_id: Option<Uuid> = row.try_get("user_id").map_err(database_error)?;

        Ok(Blog {
            id: BlogId(id),
            title: row.try_get("title").map_err(database_error)?,
            author: row.try_get("author").map_err(database_error)?,
            url: row.try_get("url").map_err(database_error)?,
            likes: row.try_get("likes").map_err(database_error)?,
            user: user_id.map(UserId),
            comments: row.try_get("comments").map_err(database_error)?,
        })
    }
}

fn database_error(e: sqlx::Error) -> BlogError {
    BlogError::DatabaseError(e.to_string())
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn create(&self, blog: Blog) -> Result<Blog, BlogError> {
        sqlx::query(
            r#"
            INSERT INTO blogs (id, title, author, url, likes, user_id, comments)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(blog.id.0)
        .bind(&blog.title)
        .bind(blog.author.as_deref())
        .bind(&blog.url)
        .bind(blog.likes)
        .bind(blog.user.map(|user| user.0))
        .bind(blog.comments.clone())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(blog)
    }

    async fn find_by_id(&self, id: &BlogId) -> Result<Option<Blog>, BlogError> {
        let row = sqlx::query(&format!("SELECT {BLOG_COLUMNS} FROM blogs WHERE id = $1"))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error)?;

        row.as_ref().map(Self::row_to_blog).transpose()
    }

    async fn find_by_ids(&self, ids: &[BlogId]) -> Result<Vec<Blog>, BlogError> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query(&format!(
            "SELECT {BLOG_COLUMNS} FROM blogs WHERE id = ANY($1) ORDER BY seq"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_blog).collect()
    }

    async fn list_all(&self) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query(&format!("SELECT {BLOG_COLUMNS} FROM blogs ORDER BY seq"))
            .fetch_all(&self.pool)
            .await
            .map_err(database_error)?;

        rows.iter().map(Self::row_to_blog).collect()
    }

    async fn set_likes(&self, id: &BlogId, likes: i64) -> Result<Blog, BlogError> {
        let row = sqlx::query(&format!(
            "UPDATE blogs SET likes = $2 WHERE id = $1 RETURNING {BLOG_COLUMNS}"
        ))
        .bind(id.0)
        .bind(likes)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Self::row_to_blog(&row),
            None => Err(BlogError::NotFound(*id)),
        }
    }

    async fn append_comment(&self, id: &BlogId, comment: &str) -> Result<Blog, BlogError> {
        let row = sqlx::query(&format!(
            "UPDATE blogs SET comments = array_append(comments, $2) WHERE id = $1 \
             RETURNING {BLOG_COLUMNS}"
        ))
        .bind(id.0)
        .bind(comment)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Self::row_to_blog(&row),
            None => Err(BlogError::NotFound(*id)),
        }
    }

    async fn delete(&self, id: &BlogId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(*id));
        }

        Ok(())
    }

    async fn delete_all(&self) -> Result<(), BlogError> {
        sqlx::query("DELETE FROM blogs")
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
