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


mod chunk_by;
mod chunks;
mod intersperse;
mod result;
mod windows;

pub use chunk_by::ChunkBy;
pub use chunks::ArrayChunks;
pub use intersperse::{Intersperse, IntersperseWith};
pub use result::{InspectErr, RetMap};
pub use windows::Windows;
