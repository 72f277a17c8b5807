use super::UserId;
use serde::{Deserialize, Serialize};

/// An organizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

pub fn find_user(users: &[User], id: UserId) -> Option<&User> {
    users.iter().find(|u| u.id == id)
}
