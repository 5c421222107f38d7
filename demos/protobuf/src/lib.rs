//! Protocol buffer round trip for a two-field `Person` record
//!
//! Types are generated from `proto/person/v1/person.proto` by `build.rs`;
//! encoding and decoding are delegated to `prost`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use prost::Message;

/// Generated protobuf types for `person.v1`
#[allow(clippy::all, clippy::pedantic)]
pub mod proto {
    include!(concat!(env!("OUT_DIR"), "/person.v1.rs"));
}

pub use proto::Person;

#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    #[error("failed to deserialize: {0}")]
    Decode(#[from] prost::DecodeError),
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

/// Serialize to the protobuf binary encoding.
#[must_use]
pub fn encode_person(person: &Person) -> Vec<u8> {
    person.encode_to_vec()
}

/// Deserialize from the protobuf binary encoding.
///
/// # Errors
/// Returns [`DemoError::Decode`] if `bytes` is not a valid encoding.
pub fn decode_person(bytes: &[u8]) -> Result<Person, DemoError> {
    Ok(Person::decode(bytes)?)
}

/// Render as two-space indented JSON.
///
/// # Errors
/// Returns [`DemoError::Json`] if serialization fails.
pub fn to_pretty_json(person: &Person) -> Result<String, DemoError> {
    Ok(serde_json::to_string_pretty(person)?)
}
