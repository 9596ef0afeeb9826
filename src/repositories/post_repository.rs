use anyhow::{Context, Result};
use neo4rs::{Graph, Node, Query};

use crate::dtos::post_dtos::{CreatePostDTO, UpdatePostDTO};
use crate::models::post::Post;

pub struct PostRepository;

impl PostRepository {
    /// Creates the Post node and its CREATED_BY edge in a single statement.
    /// If `user_id` matches no User the MATCH yields nothing and no post is
    /// created; the caller is not told either way.
    pub async fn create(graph: &Graph, data: &CreatePostDTO) -> Result<()> {
        let query = Query::new(
            "MATCH (u:User) WHERE ID(u) = $user_id \
             CREATE (p:Post {title: $title, content: $content})-[:CREATED_BY]->(u)"
                .to_string(),
        )
        .param("user_id", data.user_id)
        .param("title", data.title.as_str())
        .param("content", data.content.as_str());

        graph.run(query).await.context("post creation query failed")?;
        Ok(())
    }

    pub async fn update(graph: &Graph, post_id: i64, data: &UpdatePostDTO) -> Result<()> {
        let query = Query::new(
            "MATCH (p:Post) WHERE ID(p) = $post_id \
             SET p.title = $new_title, p.content = $new_content"
                .to_string(),
        )
        .param("post_id", post_id)
        .param("new_title", data.new_title.as_str())
        .param("new_content", data.new_content.as_str());

        graph.run(query).await.context("post update query failed")?;
        Ok(())
    }

    pub async fn delete(graph: &Graph, post_id: i64) -> Result<()> {
        let query = Query::new(
            "MATCH (p:Post) WHERE ID(p) = $post_id DETACH DELETE p".to_string(),
        )
        .param("post_id", post_id);

        graph.run(query).await.context("post delete query failed")?;
        Ok(())
    }

    pub async fn list(graph: &Graph) -> Result<Vec<Post>> {
        let query = Query::new("MATCH (p:Post) RETURN p".to_string());

        let mut result = graph
            .execute(query)
            .await
            .context("post listing query failed")?;

        let mut posts = Vec::new();
        while let Ok(Some(row)) = result.next().await {
            let node: Node = row
                .get("p")
                .map_err(|e| anyhow::anyhow!("failed to read post node: {:?}", e))?;
            posts.push(Post::from_node(&node));
        }
        Ok(posts)
    }

    pub async fn find_by_id(graph: &Graph, post_id: i64) -> Result<Option<Post>> {
        let query = Query::new(
            "MATCH (p:Post) WHERE ID(p) = $post_id RETURN p".to_string(),
        )
        .param("post_id", post_id);

        let mut result = graph
            .execute(query)
            .await
            .context("post lookup query failed")?;

        match result.next().await {
            Ok(Some(row)) => {
                let node: Node = row
                    .get("p")
                    .map_err(|e| anyhow::anyhow!("failed to read post node: {:?}", e))?;
                Ok(Some(Post::from_node(&node)))
            }
            _ => Ok(None),
        }
    }
}
