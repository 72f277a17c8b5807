//! Integer ids for events, categories and users.
//!
//! The data service hands out ids either as JSON numbers or as numeric strings
//! (categories and users arrive as `"1"`, `"2"`, ...). Both are accepted and
//! coerced to integers; ids always serialize back as numbers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(pub i64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i64);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Str(String),
}

fn coerce(raw: RawId) -> Result<i64, String> {
    match raw {
        RawId::Int(n) => Ok(n),
        RawId::Str(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid id {:?}: {}", s, e)),
    }
}

macro_rules! id_type {
    ($name:ident) => {
        impl $name {
            pub fn get(self) -> i64 {
                self.0
            }
        }
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
                ser.serialize_i64(self.0)
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
                let raw = RawId::deserialize(de)?;
                coerce(raw).map(Self).map_err(serde::de::Error::custom)
            }
        }
        impl FromStr for $name {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                coerce(RawId::Str(s.to_string())).map(Self)
            }
        }
        impl From<i64> for $name {
            fn from(n: i64) -> Self {
                Self(n)
            }
        }
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
id_type!(EventId);
id_type!(CategoryId);
id_type!(UserId);
