// MIT License - Copyright (c) 2026 visonic-alarm developers

use serde::Deserialize;

use super::de_title_case_opt;

/// Panel user as reported by the users endpoint.
///
/// Only master users see the full listing; other accounts get a reduced
/// view without the partition assignments.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: i64,
    #[serde(default, deserialize_with = "de_title_case_opt")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub partitions: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_fields() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "name": "MASTER USER",
            "email": "master@example.com",
            "partitions": [1, 2]
        }))
        .unwrap();

        assert_eq!(user.id, 1);
        assert_eq!(user.name.as_deref(), Some("Master User"));
        assert_eq!(user.email.as_deref(), Some("master@example.com"));
        assert_eq!(user.partitions, vec![1, 2]);
    }
}
