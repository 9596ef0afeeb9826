use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserDTO {
    pub username: String,
    pub email: String,
}

/// Update payload. Existing clients disagree on the field names (`username`
/// vs `new_username`), so both spellings are accepted.
#[derive(Debug, Deserialize)]
pub struct UpdateUserDTO {
    #[serde(alias = "username")]
    pub new_username: String,
    #[serde(alias = "email")]
    pub new_email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_dto_deserializes() {
        let dto: CreateUserDTO =
            serde_json::from_str(r#"{"username": "alice", "email": "alice@example.com"}"#)
                .unwrap();
        assert_eq!(dto.username, "alice");
        assert_eq!(dto.email, "alice@example.com");
    }

    #[test]
    fn update_user_dto_accepts_prefixed_field_names() {
        let dto: UpdateUserDTO =
            serde_json::from_str(r#"{"new_username": "bob", "new_email": "bob@example.com"}"#)
                .unwrap();
        assert_eq!(dto.new_username, "bob");
        assert_eq!(dto.new_email, "bob@example.com");
    }

    #[test]
    fn update_user_dto_accepts_plain_field_names() {
        let dto: UpdateUserDTO =
            serde_json::from_str(r#"{"username": "bob", "email": "bob@example.com"}"#).unwrap();
        assert_eq!(dto.new_username, "bob");
        assert_eq!(dto.new_email, "bob@example.com");
    }
}
