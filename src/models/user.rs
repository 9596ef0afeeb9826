use neo4rs::Node;
use serde::Serialize;

/// A User node as returned by the single-entity endpoints. `id` is the
/// database-internal node id; the application defines no key of its own.
#[derive(Debug, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl User {
    pub fn from_node(node: &Node) -> Self {
        Self {
            id: node.id(),
            username: node.get("username").unwrap_or_default(),
            email: node.get("email").unwrap_or_default(),
        }
    }
}

/// Projection used by the user listing, which only returns properties.
#[derive(Debug, Serialize)]
pub struct UserListItem {
    pub username: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_node_id() {
        let user = User {
            id: 7,
            username: "alice".into(),
            email: "alice@example.com".into(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["username"], "alice");
    }
}
