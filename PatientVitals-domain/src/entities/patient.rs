use patient_vitals_data::models::{Document, Fields};

/// A patient record from the `users` collection.
///
/// The fields are owned by whoever registers patients; this service hands
/// them back untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    /// Identifier the record is stored under
    pub id: String,

    /// Opaque document fields
    pub fields: Fields,
}

impl PatientRecord {
    /// Consume the record, keeping only its fields
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl From<Document> for PatientRecord {
    fn from(document: Document) -> Self {
        Self {
            id: document.id,
            fields: document.fields,
        }
    }
}
