//! Post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use bulletin_core::domain::Post;
use bulletin_shared::dto::{PostPayload, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        body: post.body,
        poster: post.poster,
        time_stamp: post.time_stamp,
    }
}

/// GET /posts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;
    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{post_id}
pub async fn get(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let post = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /posts
///
/// Client-supplied `id`/`timeStamp` are ignored; the server assigns both.
/// The response is the row as re-fetched by id after the insert.
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();

    let post = Post::new(payload.title, payload.body, payload.poster);
    let post_id = post.id;
    state.posts.insert(post).await?;

    let persisted = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    tracing::debug!(post_id = %post_id, "Created post");
    Ok(HttpResponse::Ok().json(to_response(persisted)))
}

/// PUT /posts/{post_id}/{poster}
///
/// Only `body` is replaceable. When the payload names a different poster
/// than the stored row, the row is persisted unchanged and the request is
/// answered 404; the path's poster segment is routed but not consulted.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let (post_id, _poster) = path.into_inner();
    let payload = body.into_inner();

    let mut existing = state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    if existing.poster != payload.poster {
        state.posts.update(existing).await?;
        return Err(AppError::NotFound);
    }

    existing.body = payload.body;
    state.posts.update(existing).await?;

    Ok(HttpResponse::Ok().finish())
}

/// DELETE /posts/{post_id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or(AppError::NotFound)?;

    state.posts.delete_by_id(post_id).await?;

    tracing::debug!(post_id = %post_id, "Deleted post");
    Ok(HttpResponse::Ok().finish())
}

/// DELETE /posts/reset/{username}/{password}
pub async fn reset(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> AppResult<HttpResponse> {
    let (username, password) = path.into_inner();

    let Some(credentials) = &state.reset else {
        tracing::warn!("Reset requested but no credentials are configured");
        return Err(AppError::Unauthorized);
    };

    if !credentials.matches(&username, &password) {
        return Err(AppError::Unauthorized);
    }

    let removed = state.posts.delete_all().await?;
    tracing::info!(removed, "Post store reset");

    Ok(HttpResponse::Ok().finish())
}
