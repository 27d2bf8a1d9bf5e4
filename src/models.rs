use serde::Deserialize;

/// A single post as served by the posts endpoint
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Post {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(user_id: i64, id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Post {
            user_id,
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
