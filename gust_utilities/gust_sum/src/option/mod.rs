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

//! Constructors for [`Option`] from two-valued returns and dynamically typed values, and the
//! [`OptionExt`] conversions into the rest of the sum-type family.


use std::any::Any;

use crate::{CtrlFlow, ErrBox, Errable, NoneError, Payload, Result, Void};

/// `Some(value)` if `ok` holds.
#[inline]
pub fn bool_opt<T>(value: T, ok: bool) -> Option<T> {
    if ok {
        Some(value)
    } else {
        None
    }
}

/// `None` if the value is the default (zero) value of its type.
pub fn zero_opt<T>(value: T) -> Option<T>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}

/// Attempt to recover a value of type `T` from a dynamically typed box. A value of any other type
/// produces `None`.
pub fn assert_opt<T: Any>(value: Box<dyn Any>) -> Option<T> {
    value.downcast::<T>().ok().map(|value| *value)
}

/// As [`assert_opt`], but `None` when `ok` does not hold.
pub fn bool_assert_opt<T: Any>(value: Box<dyn Any>, ok: bool) -> Option<T> {
    if ok {
        assert_opt(value)
    } else {
        None
    }
}

/// `Some(value)` unless an error is present.
#[inline]
pub fn ret_opt<T, E>(value: T, err: Option<E>) -> Option<T> {
    match err {
        Some(_) => None,
        None => Some(value),
    }
}

/// Operations on [`Option`] that are not provided by the standard library.
pub trait OptionExt<T>: Sized {
    /// Call a function if the option is `None`.
    fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce();

    /// Require a value, producing an error that names the type of the value if it is absent.
    fn some_or_err(self) -> Result<T>
    where
        T: 'static;

    /// Transform into a [`Result`], boxing the error payload if the option is `None`.
    fn ok_or_box<P: Payload>(self, err: P) -> Result<T>;

    /// As [`OptionExt::ok_or_box`] with a lazily computed error.
    fn ok_or_else_box<P, F>(self, f: F) -> Result<T>
    where
        P: Payload,
        F: FnOnce() -> P;

    /// Treat the contents of the option as an error.
    fn into_errable(self) -> Errable<T>;

    /// `Some` continues with the value and `None` breaks.
    fn into_ctrl_flow(self) -> CtrlFlow<Void, T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn inspect_none<F>(self, f: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_none() {
            f();
        }
        self
    }

    fn some_or_err(self) -> Result<T>
    where
        T: 'static,
    {
        self.ok_or_else(|| ErrBox::from_error(NoneError::of::<T>()))
    }

    fn ok_or_box<P: Payload>(self, err: P) -> Result<T> {
        self.ok_or_else(|| ErrBox::new(err))
    }

    fn ok_or_else_box<P, F>(self, f: F) -> Result<T>
    where
        P: Payload,
        F: FnOnce() -> P,
    {
        self.ok_or_else(|| ErrBox::new(f()))
    }

    fn into_errable(self) -> Errable<T> {
        Errable::from(self)
    }

    fn into_ctrl_flow(self) -> CtrlFlow<Void, T> {
        match self {
            Some(value) => CtrlFlow::Continue(value),
            None => CtrlFlow::Break(()),
        }
    }
}
