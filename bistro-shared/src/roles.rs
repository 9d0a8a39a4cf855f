use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::Customer
    }
}

impl Role {
    pub fn to_string(&self) -> String {
        match self {
            Role::Customer => "customer".to_string(),
            Role::Admin => "admin".to_string(),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}
