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

use thiserror::Error;

/// Invalid arguments to iterator adapters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IterError {
    #[error("The step of a stepping iterator must be positive.")]
    ZeroStep,
    #[error("The size of a chunk must be positive.")]
    ZeroChunkSize,
    #[error("The size of a window must be positive.")]
    ZeroWindowSize,
}
