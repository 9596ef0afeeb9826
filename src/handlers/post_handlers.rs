use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Serialize;

use crate::dtos::post_dtos::{CreatePostDTO, UpdatePostDTO};
use crate::errors::ApiError;
use crate::models::post::Post;
use crate::repositories::post_repository::PostRepository;
use crate::AppState;

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct PostsResponse {
    posts: Vec<Post>,
}

#[derive(Serialize)]
struct PostResponse {
    post: Post,
}

/// Success is reported even when `user_id` matches no user, in which case
/// nothing was created.
#[post("/post")]
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostDTO>,
) -> Result<HttpResponse, ApiError> {
    PostRepository::create(&state.graph, &body).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Post created and linked to the user successfully".to_string(),
    }))
}

#[put("/post/{id}")]
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostDTO>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    PostRepository::update(&state.graph, post_id, &body).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Post updated successfully".to_string(),
    }))
}

#[delete("/post/{id}")]
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();
    PostRepository::delete(&state.graph, post_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Post deleted successfully".to_string(),
    }))
}

#[get("/posts")]
pub async fn get_posts(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let posts = PostRepository::list(&state.graph).await?;
    Ok(HttpResponse::Ok().json(PostsResponse { posts }))
}

#[get("/post/{id}")]
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let post_id = path.into_inner();

    match PostRepository::find_by_id(&state.graph, post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostResponse { post })),
        None => Ok(HttpResponse::NotFound().json(MessageResponse {
            message: "Post not found".to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn posts_envelope_uses_posts_key() {
        let body = PostsResponse {
            posts: vec![Post {
                id: 1,
                title: "hello".into(),
                content: "world".into(),
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["posts"][0]["title"], "hello");
    }

    #[test]
    fn not_found_body_carries_message_field() {
        let body = MessageResponse {
            message: "Post not found".to_string(),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["message"], "Post not found");
    }
}
