use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field set of a stored document
pub type Fields = Map<String, Value>;

/// Collection names known to the API
pub mod collections {
    /// Patient records, read-only from this service
    pub const USERS: &str = "users";

    /// Vital readings, write-only from this service
    pub const VITALS: &str = "vitals";
}

/// Storage model for a single document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier of the document within its collection
    pub id: String,

    /// Opaque field set of the document
    pub fields: Fields,
}

impl Document {
    /// Create a document from its id and fields
    pub fn new(id: impl Into<String>, fields: Fields) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
