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

use std::any::type_name;
use thiserror::Error;

/// Error produced when a value is required from an [`Option`] that is `None`. The error names the
/// type of the missing value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("Expected a value of type `{type_name}` but the option was `None`.")]
pub struct NoneError {
    type_name: &'static str,
}

impl NoneError {
    pub fn of<T>() -> Self {
        NoneError {
            type_name: type_name::<T>(),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
