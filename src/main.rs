mod config;
mod dtos;
mod errors;
mod handlers;
mod models;
mod repositories;

use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use neo4rs::Graph;

use crate::handlers::post_handlers::{create_post, delete_post, get_post, get_posts, update_post};
use crate::handlers::user_handlers::{
    create_user, delete_user, get_user, get_users, get_users_legacy, update_user,
};

fn mask_password(p: &str) -> String {
    if p.len() <= 4 {
        "[REDACTED]".to_string()
    } else {
        format!("{}***", &p[..2])
    }
}

#[derive(Clone)]
pub struct AppState {
    pub graph: Graph,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    dotenv::dotenv().ok();

    let graph_config = config::GraphConfig::from_env();
    info!("Neo4j URI: {}", graph_config.uri);
    info!("Neo4j user: {}", graph_config.user);
    info!("Neo4j password: {}", mask_password(&graph_config.password));

    let graph = match config::get_graph(&graph_config).await {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to connect to Neo4j: {:#}", e);
            std::process::exit(1);
        }
    };

    let state = web::Data::new(AppState { graph });

    let allowed_origins = env::var("ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".into());

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let bind_address = format!("0.0.0.0:{}", port);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec!["authorization", "content-type", "accept"])
            .max_age(3600);

        for origin in allowed_origins.split(',').map(|s| s.trim()).filter(|s| !s.is_empty()) {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(state.clone())
            .service(create_user)       // POST /user
            .service(update_user)       // PUT /user/{id}
            .service(delete_user)       // DELETE /user/{id}
            .service(get_users)         // GET /users
            .service(get_users_legacy)  // GET /usersss
            .service(get_user)          // GET /user/{id}
            .service(create_post)       // POST /post
            .service(update_post)       // PUT /post/{id}
            .service(delete_post)       // DELETE /post/{id}
            .service(get_posts)         // GET /posts
            .service(get_post)          // GET /post/{id}
    })
    .bind(&bind_address)?
    .run()
    .await
}
