//! Request body elements shared by several operations.
//!
//! Fields are serialized with their snake_case wire names; `None` fields are
//! left out of the payload.

use serde::{Deserialize, Serialize};

use crate::SecureString;

/// A group and the permission granted to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupsMetadata {
    /// Group identifier.
    pub group_id: String,
    /// Granted permission, e.g. `can_administer`, `can_manage`, `can_use`.
    pub permission: String,
}

impl GroupsMetadata {
    /// Creates a group grant.
    pub fn new(group_id: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            permission: permission.into(),
        }
    }
}

/// A user and the permission granted to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersMetadata {
    /// User name.
    pub user_name: String,
    /// Granted permission.
    pub permission: String,
}

impl UsersMetadata {
    /// Creates a user grant.
    pub fn new(user_name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            permission: permission.into(),
        }
    }
}

/// A rule of a data policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPolicyRule {
    /// Actions covered by the rule, e.g. `select`, `insert`.
    pub actions: Vec<String>,
    /// `allow` or `deny`.
    pub effect: String,
    /// Who the rule applies to.
    pub grantee: RuleGrantee,
}

/// The subject of a [`DataPolicyRule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleGrantee {
    /// Grantee value, e.g. a user name.
    pub value: String,
    /// Grantee key, e.g. `user_name`.
    pub key: String,
    /// Grantee type, e.g. `user_identity`.
    #[serde(rename = "type")]
    pub grantee_type: String,
}

/// Object storage connection of a bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<SecureString>,
    pub bucket_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<SecureString>,
}

/// Connection details of a database registered as a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatabaseDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_name: Option<String>,
    pub hostname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<SecureString>,
    pub port: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sasl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tables: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_extension: Option<String>,
}

/// Node type and count of an engine tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeDescription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Sizing of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator: Option<NodeDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker: Option<NodeDescription>,
    /// Predefined size, e.g. `starter`, `small`, `custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_config: Option<String>,
}

/// A table to delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTableItem {
    pub catalog_name: String,
    pub schema_name: String,
    pub table_name: String,
}

/// Acknowledgement returned by most mutating operations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SuccessResponse {
    /// Message code, e.g. `success`.
    #[serde(rename = "_messageCode_", default)]
    pub message_code: Option<String>,
    /// Human readable message.
    #[serde(default)]
    pub message: Option<String>,
}
