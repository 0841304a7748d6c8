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


use std::error::Error;

use crate::{CtrlFlow, ErrBox, Errable, NoneError, Payload, Result, Void};

/// Early return from a function that returns a [`Result`] with an [`ErrBox`] error.
///
/// Calling [`Throw::or_throw`] followed by `?` on any member of the sum-type family either
/// produces the success value or returns the failure from the enclosing function. The failure
/// payload is boxed without being converted, so it can be recovered with
/// [`ErrBox::downcast_ref`] by the caller. Errors of a [`Result`] keep their chain of sources; a
/// result whose error is not an [`std::error::Error`] can be boxed first with
/// [`crate::ResultExt::box_payload`].
pub trait Throw {
    type Value;

    fn or_throw(self) -> Result<Self::Value>;
}

impl<T, E> Throw for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    type Value = T;

    fn or_throw(self) -> Result<T> {
        self.map_err(ErrBox::from_error)
    }
}

impl<T: 'static> Throw for Option<T> {
    type Value = T;

    fn or_throw(self) -> Result<T> {
        self.ok_or_else(|| ErrBox::from_error(NoneError::of::<T>()))
    }
}

impl<E: Payload> Throw for Errable<E> {
    type Value = Void;

    fn or_throw(self) -> Result<Void> {
        self.into_box_result()
    }
}

impl<B: Payload, C> Throw for CtrlFlow<B, C> {
    type Value = C;

    fn or_throw(self) -> Result<C> {
        self.into_box_result()
    }
}
