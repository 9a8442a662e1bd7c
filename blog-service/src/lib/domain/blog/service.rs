use std::collections::HashMap;
use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::BlogOwner;
use crate::domain::blog::models::BlogWithOwner;
use crate::domain::blog::models::Comment;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service implementation for blog operations.
pub struct BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    repository: Arc<BR>,
    user_repository: Arc<UR>,
}

impl<BR, UR> BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    /// Create a new blog service.
    ///
    /// # Arguments
    /// * `repository` - Blog persistence implementation
    /// * `user_repository` - User persistence, for owners and their blog lists
    pub fn new(repository: Arc<BR>, user_repository: Arc<UR>) -> Self {
        Self {
            repository,
            user_repository,
        }
    }

    async fn with_owners(&self, blogs: Vec<Blog>) -> Result<Vec<BlogWithOwner>, BlogError> {
        let owner_ids: Vec<UserId> = blogs
            .iter()
            .filter_map(|blog| blog.user)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let owners: HashMap<UserId, BlogOwner> = if owner_ids.is_empty() {
            HashMap::new()
        } else {
            self.user_repository
                .find_by_ids(&owner_ids)
                .await
                .map_err(storage_error)?
                .iter()
                .map(|user| (user.id, BlogOwner::from(user)))
                .collect()
        };

        Ok(blogs
            .into_iter()
            .map(|blog| {
                let owner = blog.user.and_then(|id| owners.get(&id).cloned());
                BlogWithOwner { blog, owner }
            })
            .collect())
    }

    async fn with_owner(&self, blog: Blog) -> Result<BlogWithOwner, BlogError> {
        let owner = match blog.user {
            Some(id) => self
                .user_repository
                .find_by_id(&id)
                .await
                .map_err(storage_error)?
                .as_ref()
                .map(BlogOwner::from),
            None => None,
        };

        Ok(BlogWithOwner { blog, owner })
    }

    async fn find_existing(&self, id: &BlogId) -> Result<Blog, BlogError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(*id))
    }
}

fn storage_error(err: UserError) -> BlogError {
    BlogError::DatabaseError(err.to_string())
}

#[async_trait]
impl<BR, UR> BlogServicePort for BlogService<BR, UR>
where
    BR: BlogRepository,
    UR: UserRepository,
{
    async fn list_blogs(&self) -> Result<Vec<BlogWithOwner>, BlogError> {
        let blogs = self.repository.list_all().await?;
        self.with_owners(blogs).await
    }

    async fn create_blog(
        &self,
        owner: &UserId,
        command: CreateBlogCommand,
    ) -> Result<BlogWithOwner, BlogError> {
        let user = self
            .user_repository
            .find_by_id(owner)
            .await
            .map_err(storage_error)?
            .ok_or(BlogError::OwnerNotFound(*owner))?;

        let blog = Blog {
            id: BlogId::new(),
            title: command.title,
            author: command.author,
            url: command.url,
            likes: command.likes,
            user: Some(user.id),
            comments: Vec::new(),
        };

        let created = self.repository.create(blog).await?;

        self.user_repository
            .append_blog(&user.id, &created.id)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    blog_id = %created.id,
                    user_id = %user.id,
                    "Blog stored but not recorded on its owner"
                );
                storage_error(e)
            })?;

        tracing::info!(blog_id = %created.id, user_id = %user.id, "Blog created");

        Ok(BlogWithOwner {
            blog: created,
            owner: Some(BlogOwner::from(&user)),
        })
    }

    async fn add_comment(
        &self,
        id: &BlogId,
        comment: Option<String>,
    ) -> Result<BlogWithOwner, BlogError> {
        self.find_existing(id).await?;
        let comment = Comment::new(comment)?;

        let updated = self.repository.append_comment(id, comment.as_str()).await?;
        tracing::debug!(blog_id = %id, comments = updated.comments.len(), "Comment added");

        self.with_owner(updated).await
    }

    async fn update_likes(
        &self,
        id: &BlogId,
        likes: Option<i64>,
    ) -> Result<BlogWithOwner, BlogError> {
        let blog = match likes {
            Some(likes) => self.repository.set_likes(id, likes).await?,
            None => self.find_existing(id).await?,
        };

        self.with_owner(blog).await
    }

    async fn delete_blog(&self, id: &BlogId, requester: &UserId) -> Result<(), BlogError> {
        let blog = self.find_existing(id).await?;

        if let Some(owner) = blog.user {
            if owner != *requester {
                tracing::warn!(
                    blog_id = %id,
                    owner_id = %owner,
                    requester_id = %requester,
                    "Refusing to delete blog owned by another user"
                );
                return Err(BlogError::Forbidden {
                    blog_id: *id,
                    user_id: *requester,
                });
            }
        }

        self.repository.delete(id).await?;
        tracing::info!(blog_id = %id, user_id = %requester, "Blog deleted");

        Ok(())
    }

    async fn delete_all_blogs(&self) -> Result<(), BlogError> {
        self.repository.delete_all().await
    }
}
