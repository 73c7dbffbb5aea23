use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - the single resource this service manages.
///
/// `id` and `time_stamp` are assigned once at creation and never change.
/// `body` is the only field mutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub poster: String,
    pub time_stamp: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a server-assigned id and creation timestamp.
    pub fn new(title: String, body: String, poster: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            poster,
            time_stamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_assigns_id_and_timestamp() {
        let before = Utc::now();
        let post = Post::new("A".to_owned(), "B".to_owned(), "C".to_owned());
        let after = Utc::now();

        assert!(!post.id.is_nil());
        assert!(post.time_stamp >= before && post.time_stamp <= after);
        assert_eq!(post.title, "A");
        assert_eq!(post.body, "B");
        assert_eq!(post.poster, "C");
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let a = Post::new("t".into(), "b".into(), "p".into());
        let b = Post::new("t".into(), "b".into(), "p".into());
        assert_ne!(a.id, b.id);
    }
}
