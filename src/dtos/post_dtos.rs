use serde::Deserialize;

/// `user_id` is the database-internal node id of the author; it is the only
/// external handle the API exposes for users.
#[derive(Debug, Deserialize)]
pub struct CreatePostDTO {
    pub user_id: i64,
    pub title: String,
    pub content: String,
}

/// Update payload, accepting both field spellings used by existing clients.
#[derive(Debug, Deserialize)]
pub struct UpdatePostDTO {
    #[serde(alias = "title")]
    pub new_title: String,
    #[serde(alias = "content")]
    pub new_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_post_dto_deserializes() {
        let dto: CreatePostDTO =
            serde_json::from_str(r#"{"user_id": 42, "title": "hi", "content": "body"}"#).unwrap();
        assert_eq!(dto.user_id, 42);
        assert_eq!(dto.title, "hi");
        assert_eq!(dto.content, "body");
    }

    #[test]
    fn update_post_dto_accepts_either_field_spelling() {
        let prefixed: UpdatePostDTO =
            serde_json::from_str(r#"{"new_title": "t", "new_content": "c"}"#).unwrap();
        assert_eq!(prefixed.new_title, "t");

        let plain: UpdatePostDTO =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        assert_eq!(plain.new_content, "c");
    }
}
