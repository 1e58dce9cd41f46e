use serde::Serialize;
use serde_json::Value;
use patient_vitals_data::models::Fields;

/// Field stamped on every stored vital reading
pub const PATIENT_ID_FIELD: &str = "patientId";

/// A caller-submitted vital reading bound to a patient
#[derive(Debug, Clone, PartialEq)]
pub struct VitalReading {
    patient_id: String,
    fields: Fields,
}

impl VitalReading {
    /// Bind caller fields to a patient
    pub fn new(patient_id: impl Into<String>, fields: Fields) -> Self {
        Self {
            patient_id: patient_id.into(),
            fields,
        }
    }

    /// Patient the reading belongs to
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// Fields to persist. A caller-supplied `patientId` is replaced.
    pub fn into_document_fields(self) -> Fields {
        let mut fields = self.fields;
        fields.insert(PATIENT_ID_FIELD.to_string(), Value::String(self.patient_id));
        fields
    }
}

/// Result of storing a vital reading
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedVital {
    /// Store-generated id of the new document
    pub id: String,
}

/// Whether a parsed body counts as missing: `null`, `false`, `0`, `""`,
/// `[]` and `{}` are all treated like an absent body.
pub fn body_is_empty(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
