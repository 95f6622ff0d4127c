//! Present-and-null versus absent for partial updates.
//!
//! Plain serde maps both a missing key and an explicit `null` onto `None` for
//! an `Option<Option<T>>` field. Annotating the field with
//! `#[serde(default, deserialize_with = "deserialize_nullable")]` keeps them
//! apart:
//!
//! | JSON              | Value           |
//! |-------------------|-----------------|
//! | key absent        | `None`          |
//! | `"key": null`     | `Some(None)`    |
//! | `"key": value`    | `Some(Some(v))` |
//!
//! Optional fields whose column is `NOT NULL` use [`deserialize_present`]
//! instead, so `"key": null` is rejected rather than read as "absent".

use serde::{Deserialize, Deserializer};

pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// For `#[serde(default, deserialize_with = "deserialize_present")]` on an
/// `Option<T>` that may be omitted but never `null`.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
