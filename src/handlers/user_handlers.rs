use actix_web::{delete, get, post, put, web, HttpResponse};
use serde::Serialize;

use crate::dtos::user_dtos::{CreateUserDTO, UpdateUserDTO};
use crate::errors::ApiError;
use crate::models::user::{User, UserListItem};
use crate::repositories::user_repository::UserRepository;
use crate::AppState;

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct UsersResponse {
    users: Vec<UserListItem>,
}

#[derive(Serialize)]
struct UserResponse {
    user: User,
}

#[post("/user")]
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserDTO>,
) -> Result<HttpResponse, ApiError> {
    UserRepository::create(&state.graph, &body).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User created successfully".to_string(),
    }))
}

/// Returns 200 whether or not a user with this id exists; a miss just makes
/// the underlying statement a no-op.
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdateUserDTO>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    UserRepository::update(&state.graph, user_id, &body).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}

#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    UserRepository::delete(&state.graph, user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}

#[get("/users")]
pub async fn get_users(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    list_users(&state).await
}

/// One deployed client hits the listing under this misspelled path; kept as
/// an alias so it keeps working.
#[get("/usersss")]
pub async fn get_users_legacy(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    list_users(&state).await
}

async fn list_users(state: &AppState) -> Result<HttpResponse, ApiError> {
    let users = UserRepository::list(&state.graph).await?;
    Ok(HttpResponse::Ok().json(UsersResponse { users }))
}

#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    match UserRepository::find_by_id(&state.graph, user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(UserResponse { user })),
        None => Ok(HttpResponse::NotFound().json(MessageResponse {
            message: "User not found".to_string(),
        })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_envelope_uses_users_key() {
        let body = UsersResponse {
            users: vec![UserListItem {
                username: "alice".into(),
                email: "alice@example.com".into(),
            }],
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["users"][0]["username"], "alice");
        assert!(value["users"][0].get("id").is_none());
    }

    #[test]
    fn user_envelope_includes_node_id() {
        let body = UserResponse {
            user: User {
                id: 3,
                username: "bob".into(),
                email: "bob@example.com".into(),
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["user"]["id"], 3);
    }
}
