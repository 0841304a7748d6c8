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

#[cfg(test)]
mod tests;

use std::any::type_name;
use std::fmt::{Display, Formatter};

use crate::{CtrlFlow, ErrBox, Payload, Result, Void, VoidResult};

/// The outcome of an operation that either succeeds with no value or fails with a payload of type
/// `E`. The presence of the payload indicates the failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Errable<E> {
    /// No error occurred.
    #[default]
    Ok,
    /// The operation failed.
    Err(E),
}

/// The [`Errable`] with no error.
#[inline]
pub fn non_errable<E>() -> Errable<E> {
    Errable::Ok
}

/// Interpret an optional error as an [`Errable`]. An absent error is a success.
#[inline]
pub fn to_errable<E>(err: Option<E>) -> Errable<E> {
    Errable::from(err)
}

impl<E> Errable<E> {
    pub fn is_err(&self) -> bool {
        matches!(self, Errable::Err(_))
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Errable::Ok)
    }

    pub fn as_ref(&self) -> Errable<&E> {
        match self {
            Errable::Ok => Errable::Ok,
            Errable::Err(err) => Errable::Err(err),
        }
    }

    /// # Panics
    /// If there is no error.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Errable::Err(err) => err,
            Errable::Ok => panic!(
                "called `Errable<{}>::unwrap_err()` on an `Ok` value",
                type_name::<E>()
            ),
        }
    }

    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Errable::Err(err) => err,
            Errable::Ok => default,
        }
    }

    /// Call a function with the error, if there is one.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Errable::Err(err) = &self {
            f(err);
        }
        self
    }

    /// Call a function if there is no error.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_ok() {
            f();
        }
        self
    }

    pub fn map_err<E2, F>(self, f: F) -> Errable<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Errable::Ok => Errable::Ok,
            Errable::Err(err) => Errable::Err(f(err)),
        }
    }

    pub fn into_result(self) -> Result<Void, E> {
        self.into()
    }

    pub fn into_box_result(self) -> VoidResult
    where
        E: Payload,
    {
        self.into_result().map_err(ErrBox::new)
    }

    /// The error as an option; the error is `Some`.
    pub fn into_option(self) -> Option<E> {
        self.into()
    }

    /// An error becomes `Break`.
    pub fn into_ctrl_flow(self) -> CtrlFlow<E, Void> {
        match self {
            Errable::Ok => CtrlFlow::Continue(()),
            Errable::Err(err) => CtrlFlow::Break(err),
        }
    }

    pub fn into_enum_result(self) -> Result<Void, E> {
        self.into_result()
    }

    /// The error boxed, or nothing.
    pub fn to_error(&self) -> Option<ErrBox>
    where
        E: Payload + Clone,
    {
        match self {
            Errable::Ok => None,
            Errable::Err(err) => Some(ErrBox::new(err.clone())),
        }
    }
}

impl<E> From<Option<E>> for Errable<E> {
    fn from(err: Option<E>) -> Self {
        match err {
            Some(err) => Errable::Err(err),
            None => Errable::Ok,
        }
    }
}

impl<E> From<Result<Void, E>> for Errable<E> {
    fn from(result: Result<Void, E>) -> Self {
        match result {
            Ok(()) => Errable::Ok,
            Err(err) => Errable::Err(err),
        }
    }
}

impl<E> From<Errable<E>> for Result<Void, E> {
    fn from(errable: Errable<E>) -> Self {
        match errable {
            Errable::Ok => Ok(()),
            Errable::Err(err) => Err(err),
        }
    }
}

impl<E> From<Errable<E>> for Option<E> {
    fn from(errable: Errable<E>) -> Self {
        match errable {
            Errable::Ok => None,
            Errable::Err(err) => Some(err),
        }
    }
}

impl<E: Display> Display for Errable<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Errable::Ok => f.write_str("Ok"),
            Errable::Err(err) => write!(f, "Err({})", err),
        }
    }
}
