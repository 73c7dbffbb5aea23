use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;

/// Storage port for posts - the six operations the service needs.
///
/// Lookups signal absence with `Ok(None)`, never an error; storage failures
/// propagate uninterpreted as [`RepoError`].
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Persist a fully-constructed post as a new row.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Return every post, in storage-default order.
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Overwrite an existing row in place. Callers resolve existence first.
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Delete a post by id. Matching zero rows is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;

    /// Delete every post, returning how many rows were removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
