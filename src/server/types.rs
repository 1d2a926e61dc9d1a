//! Serializable records for the main server configuration file.
//!
//! The field names here are fixed by the consumers of
//! `config_main_server.json`, hence the explicit renames.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Property label shared by every server record and reference
pub const SERVER_PROPERTY_LABEL: &str = "Server";

/// Data property used to identify the endpoints of a relationship
pub const LABEL_DATA_PROPERTY: &str = "Label";

/// Label of the cloud server
pub const CLOUD_LABEL: &str = "S0";

/// Top-level document written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub servers: Servers,
}

/// Address list plus one record per server, cloud first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Servers {
    pub ipv6: Vec<String>,
    pub server: Vec<ServerRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerRecord {
    #[serde(rename = "property-label")]
    pub property_label: String,
    #[serde(rename = "data-property")]
    pub data_property: DataProperty,
    #[serde(rename = "object-property")]
    pub object_property: Vec<ObjectProperty>,
}

impl ServerRecord {
    pub fn label(&self) -> &str {
        &self.data_property.label
    }

    /// The cloud server is the record labelled `S0`
    pub fn is_cloud(&self) -> bool {
        self.label() == CLOUD_LABEL
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataProperty {
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "IPv6Address")]
    pub ipv6_address: String,
    #[serde(rename = "ServedIPv6Pref")]
    pub served_prefix: String,
    #[serde(rename = "Description")]
    pub description: String,
}

/// A directed relationship between two servers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectProperty {
    pub from: PropertyRef,
    pub to: PropertyRef,
    #[serde(rename = "type")]
    pub relation: Relation,
}

impl ObjectProperty {
    pub fn new(from: &str, to: &str, relation: Relation) -> Self {
        Self {
            from: PropertyRef::server(from),
            to: PropertyRef::server(to),
            relation,
        }
    }
}

/// Reference to a server by its `Label` data property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRef {
    #[serde(rename = "property-label")]
    pub property_label: String,
    #[serde(rename = "data-property")]
    pub data_property: String,
    pub value: String,
}

impl PropertyRef {
    pub fn server(label: &str) -> Self {
        Self {
            property_label: SERVER_PROPERTY_LABEL.to_string(),
            data_property: LABEL_DATA_PROPERTY.to_string(),
            value: label.to_string(),
        }
    }
}

/// Hierarchical position of an edge server relative to the cloud server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Edge server sits below the cloud server
    #[serde(rename = "isLowerOf")]
    IsLowerOf,
    /// Cloud server sits above the edge server
    #[serde(rename = "isUpperOf")]
    IsUpperOf,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::IsLowerOf => write!(f, "isLowerOf"),
            Relation::IsUpperOf => write!(f, "isUpperOf"),
        }
    }
}
