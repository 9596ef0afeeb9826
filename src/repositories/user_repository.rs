use anyhow::{Context, Result};
use neo4rs::{Graph, Node, Query};

use crate::dtos::user_dtos::{CreateUserDTO, UpdateUserDTO};
use crate::models::user::{User, UserListItem};

/// Cypher round trips for User nodes. Each fn issues exactly one statement
/// on one driver-managed session.
pub struct UserRepository;

impl UserRepository {
    pub async fn create(graph: &Graph, data: &CreateUserDTO) -> Result<()> {
        let query = Query::new(
            "CREATE (u:User {username: $username, email: $email})".to_string(),
        )
        .param("username", data.username.as_str())
        .param("email", data.email.as_str());

        graph.run(query).await.context("user creation query failed")?;
        Ok(())
    }

    /// A miss on `ID(u)` makes the statement a no-op; callers do not learn
    /// whether anything was updated.
    pub async fn update(graph: &Graph, user_id: i64, data: &UpdateUserDTO) -> Result<()> {
        let query = Query::new(
            "MATCH (u:User) WHERE ID(u) = $user_id \
             SET u.username = $new_username, u.email = $new_email"
                .to_string(),
        )
        .param("user_id", user_id)
        .param("new_username", data.new_username.as_str())
        .param("new_email", data.new_email.as_str());

        graph.run(query).await.context("user update query failed")?;
        Ok(())
    }

    /// DETACH DELETE: incident relationships go with the node, so posts by
    /// this user are left behind without their CREATED_BY edge.
    pub async fn delete(graph: &Graph, user_id: i64) -> Result<()> {
        let query = Query::new(
            "MATCH (u:User) WHERE ID(u) = $user_id DETACH DELETE u".to_string(),
        )
        .param("user_id", user_id);

        graph.run(query).await.context("user delete query failed")?;
        Ok(())
    }

    pub async fn list(graph: &Graph) -> Result<Vec<UserListItem>> {
        let query = Query::new(
            "MATCH (u:User) RETURN u.username AS username, u.email AS email".to_string(),
        );

        let mut result = graph
            .execute(query)
            .await
            .context("user listing query failed")?;

        let mut users = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            users.push(UserListItem {
                username: row.get("username").unwrap_or_default(),
                email: row.get("email").unwrap_or_default(),
            });
        }
        Ok(users)
    }

    pub async fn find_by_id(graph: &Graph, user_id: i64) -> Result<Option<User>> {
        let query = Query::new(
            "MATCH (u:User) WHERE ID(u) = $user_id RETURN u".to_string(),
        )
        .param("user_id", user_id);

        let mut result = graph
            .execute(query)
            .await
            .context("user lookup query failed")?;

        match result.next().await {
            Ok(Some(row)) => {
                let node: Node = row
                    .get("u")
                    .map_err(|e| anyhow::anyhow!("failed to read user node: {:?}", e))?;
                Ok(Some(User::from_node(&node)))
            }
            _ => Ok(None),
        }
    }
}
