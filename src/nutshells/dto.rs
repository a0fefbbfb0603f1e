use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use time::Date;

/// One contact record from the people endpoint.
///
/// `email` keeps the three states the endpoint can send: a string,
/// an explicit `null` (`Some(None)`), or no field at all (`None`).
/// Any other fields are carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(with = "crate::dates::ymd")]
    pub signup_date: Date,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Person {
    pub fn has_null_email(&self) -> bool {
        matches!(self.email, Some(None))
    }
}

/// Decodes the body of a successful page response.
///
/// The endpoint wraps the list in `{"people": [...]}`; a bare array is
/// accepted as well. The shape is picked first so that an error inside a
/// record (a bad `signup_date`, say) is reported as is.
pub fn decode_page(body: &[u8]) -> Result<Vec<Person>, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        people @ Value::Array(_) => serde_json::from_value(people),
        Value::Object(mut map) => match map.remove("people") {
            Some(people) => serde_json::from_value(people),
            None => Err(serde_json::Error::missing_field("people")),
        },
        other => Err(serde_json::Error::custom(format!(
            "expected a people list, got {other}"
        ))),
    }
}

// A present field, even `null`, becomes `Some`; a missing one falls back to the default `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
