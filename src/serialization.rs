use super::{Field, ParsedName};
use serde::ser::{Serialize, SerializeStruct, Serializer};

impl Serialize for ParsedName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParsedName", Field::ALL.len())?;
        for field in Field::ALL {
            state.serialize_field(field.as_str(), self.get(field))?;
        }
        state.end()
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl ParsedName {
    /// All six fields as a JSON object, empty ones included.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
