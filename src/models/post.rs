use neo4rs::Node;
use serde::Serialize;

/// A Post node. The CREATED_BY edge to its author is set at creation and is
/// not exposed through any endpoint, so it does not appear here.
#[derive(Debug, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: node.id(),
            title: node.get("title").unwrap_or_default(),
            content: node.get("content").unwrap_or_default(),
        }
    }
}
