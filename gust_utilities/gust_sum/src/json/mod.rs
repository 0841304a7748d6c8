// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # JSON Codec
//!
//! The sum types are encoded without any discriminating wrapper:
//!
//! | Value     | Encoding                                  |
//! |-----------|-------------------------------------------|
//! | `None`    | `null`                                    |
//! | `Some(v)` | the encoding of `v`                       |
//! | `Ok(v)`   | the encoding of `v`                       |
//! | `Err(e)`  | encoding fails with `e`                   |
//!
//! Decoding into an option or a result always overwrites the target. If the input cannot be
//! decoded as `T`, an option is left as `None` and a result becomes `Err` holding the decoding
//! error; in both cases the same error is also returned to the caller.


use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{ErrBox, Payload, Result, VoidResult};

const NULL: &str = "null";

/// Encode an option. `None` is encoded as `null`.
pub fn encode_option<T: Serialize>(value: &Option<T>) -> Result<String> {
    match value {
        Some(value) => serde_json::to_string(value).map_err(ErrBox::from_error),
        None => Ok(NULL.to_string()),
    }
}

/// Decode into an option. The target is reset to `None` before decoding.
pub fn decode_option<T: DeserializeOwned>(target: &mut Option<T>, input: &str) -> VoidResult {
    *target = None;
    if input.trim() == NULL {
        return Ok(());
    }
    let value = serde_json::from_str::<T>(input).map_err(ErrBox::from_error)?;
    *target = Some(value);
    Ok(())
}

/// Encode a result. The error of an `Err` is returned instead of an encoding.
pub fn encode_result<T, E>(value: &Result<T, E>) -> Result<String>
where
    T: Serialize,
    E: Payload + Clone,
{
    match value {
        Ok(value) => serde_json::to_string(value).map_err(ErrBox::from_error),
        Err(err) => Err(ErrBox::new(err.clone())),
    }
}

/// Decode into a result. A decoding failure is stored in the target as well as being returned.
pub fn decode_result<T: DeserializeOwned>(target: &mut Result<T>, input: &str) -> VoidResult {
    match serde_json::from_str::<T>(input) {
        Ok(value) => {
            *target = Ok(value);
            Ok(())
        }
        Err(err) => {
            let err = ErrBox::from_error(err);
            *target = Err(err.clone());
            Err(err)
        }
    }
}

/// Serde adapter for `Result` fields, for use with `#[serde(with = "gust_sum::json::ok_value")]`.
///
/// Serializing an `Err` fails the enclosing serialization. Deserialization never fails because of
/// the shape of the field value: a value that cannot be read as `T` produces an `Err` field.
pub mod ok_value {
    use std::fmt::Display;

    use serde::de::DeserializeOwned;
    use serde::ser::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::{ErrBox, Result};

    pub fn serialize<S, T, E>(value: &Result<T, E>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
        E: Display,
    {
        match value {
            Ok(value) => value.serialize(serializer),
            Err(err) => Err(S::Error::custom(err)),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Result<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).map_err(ErrBox::from_error))
    }
}
