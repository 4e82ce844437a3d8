use serde::Serialize;

pub const FULL_NAME: &str = "example";
pub const USERNAME: &str = "example";
pub const EMAIL: &str = "user@example.com";
pub const PASSWORD: &str = "example";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of the registration request, the user record nested under `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationPayload {
    pub user: UserRecord,
}

impl RegistrationPayload {
    pub fn example() -> Self {
        Self {
            user: UserRecord {
                full_name: FULL_NAME.to_string(),
                username: USERNAME.to_string(),
                email: EMAIL.to_string(),
                password: PASSWORD.to_string(),
            },
        }
    }
}
