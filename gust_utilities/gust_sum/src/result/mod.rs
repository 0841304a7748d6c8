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


use std::any::Any;
use std::error::Error;

use crate::{CtrlFlow, ErrBox, Errable, Payload};

/// A result with an [`ErrBox`] as its default error type. With an explicit error type this is
/// simply the standard library result.
pub type Result<T, E = ErrBox> = std::result::Result<T, E>;

/// Placeholder for positions where there is no value.
pub type Void = ();

/// A result that carries no value on success.
pub type VoidResult = Result<Void>;

/// The successful [`VoidResult`].
#[inline]
pub fn ok_void() -> VoidResult {
    Ok(())
}

/// Build a result from a value and an optional error. If the error is present the result is `Err`
/// and the value is discarded. The chain of sources of the error stays searchable through
/// [`BoxResultExt::contains_err`].
pub fn ret<T, E>(value: T, err: Option<E>) -> Result<T>
where
    E: Error + Send + Sync + 'static,
{
    match err {
        Some(err) => Err(ErrBox::from_error(err)),
        None => Ok(value),
    }
}

/// Build a [`VoidResult`] from an optional error.
pub fn ret_void<E>(err: Option<E>) -> VoidResult
where
    E: Error + Send + Sync + 'static,
{
    ret((), err)
}

/// Conversions from a result with any error type into the other members of the sum-type family.
pub trait ResultExt<T, E>: Sized {
    /// Box the error, producing a [`Result`] with an [`ErrBox`] error. The chain of sources of
    /// the error is kept.
    fn box_err(self) -> Result<T>
    where
        E: Error + Send + Sync + 'static;

    /// Box an error that is not an [`Error`], such as a message or a code.
    fn box_payload(self) -> Result<T>
    where
        E: Payload;

    /// Discard the success value, keeping only the presence of an error.
    fn into_errable(self) -> Errable<E>;

    /// `Err` becomes `Break` and `Ok` becomes `Continue`.
    fn into_ctrl_flow(self) -> CtrlFlow<E, T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    fn box_err(self) -> Result<T>
    where
        E: Error + Send + Sync + 'static,
    {
        self.map_err(ErrBox::from_error)
    }

    fn box_payload(self) -> Result<T>
    where
        E: Payload,
    {
        self.map_err(ErrBox::new)
    }

    fn into_errable(self) -> Errable<E> {
        match self {
            Ok(_) => Errable::Ok,
            Err(err) => Errable::Err(err),
        }
    }

    fn into_ctrl_flow(self) -> CtrlFlow<E, T> {
        match self {
            Ok(value) => CtrlFlow::Continue(value),
            Err(err) => CtrlFlow::Break(err),
        }
    }
}

/// Queries on the error of a [`Result`] with an [`ErrBox`] error.
pub trait BoxResultExt<T> {
    /// Whether the result is an error equal to the target, or with the target in its chain.
    fn contains_err<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static;

    /// The payload of the error, if the result is an error with a payload of type `V`.
    fn err_val<V: Any>(&self) -> Option<&V>;
}

impl<T> BoxResultExt<T> for Result<T> {
    fn contains_err<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        match self {
            Ok(_) => false,
            Err(err) => err.is(target),
        }
    }

    fn err_val<V: Any>(&self) -> Option<&V> {
        self.as_ref().err().and_then(|err| err.downcast_ref::<V>())
    }
}
