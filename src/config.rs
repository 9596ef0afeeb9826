use std::env;

use anyhow::{Context, Result};
use neo4rs::{ConfigBuilder, Graph, Query};

/// Connection settings for the Neo4j instance backing the API.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
}

impl GraphConfig {
    /// Read connection settings from the environment, falling back to the
    /// local development instance.
    pub fn from_env() -> Self {
        Self {
            uri: env::var("NEO4J_URI").unwrap_or_else(|_| "bolt://localhost:7687".into()),
            user: env::var("NEO4J_USER").unwrap_or_else(|_| "neo4j".into()),
            password: env::var("NEO4J_PASSWORD").unwrap_or_else(|_| "12345678".into()),
        }
    }
}

/// Build the driver handle from config.
///
/// Note: neo4rs uses a lazy pool, so `Graph::connect` does not establish a
/// real bolt connection yet. We run a cheap `RETURN 1` ping immediately so
/// startup fails fast when Neo4j is unreachable instead of surfacing on the
/// first request.
pub async fn get_graph(config: &GraphConfig) -> Result<Graph> {
    let neo4j_config = ConfigBuilder::default()
        .uri(&config.uri)
        .user(&config.user)
        .password(&config.password)
        .db("neo4j")
        .build()
        .context("failed to build Neo4j config")?;

    let graph = Graph::connect(neo4j_config)
        .await
        .context("failed to create Neo4j connection pool")?;

    graph
        .run(Query::new("RETURN 1".to_string()))
        .await
        .context("Neo4j is not responding to queries")?;

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_falls_back_to_local_defaults() {
        // Only meaningful when the NEO4J_* vars are unset, which is the case
        // in the test environment.
        let cfg = GraphConfig::from_env();
        if env::var("NEO4J_URI").is_err() {
            assert_eq!(cfg.uri, "bolt://localhost:7687");
        }
        if env::var("NEO4J_USER").is_err() {
            assert_eq!(cfg.user, "neo4j");
        }
    }
}
