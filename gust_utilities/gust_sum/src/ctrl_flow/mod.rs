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
use std::ops::ControlFlow;

use crate::{ErrBox, Errable, Payload, Result};

/// Used by traversals to tell the caller whether to continue (with a value of type `C`) or to
/// stop early (with a value of type `B`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CtrlFlow<B, C = ()> {
    Continue(C),
    Break(B),
}

impl<B, C> CtrlFlow<B, C> {
    pub fn is_break(&self) -> bool {
        matches!(self, CtrlFlow::Break(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, CtrlFlow::Continue(_))
    }

    pub fn break_value(self) -> Option<B> {
        match self {
            CtrlFlow::Break(b) => Some(b),
            CtrlFlow::Continue(_) => None,
        }
    }

    pub fn continue_value(self) -> Option<C> {
        match self {
            CtrlFlow::Continue(c) => Some(c),
            CtrlFlow::Break(_) => None,
        }
    }

    pub fn map_break<B2, F>(self, f: F) -> CtrlFlow<B2, C>
    where
        F: FnOnce(B) -> B2,
    {
        match self {
            CtrlFlow::Break(b) => CtrlFlow::Break(f(b)),
            CtrlFlow::Continue(c) => CtrlFlow::Continue(c),
        }
    }

    pub fn map_continue<C2, F>(self, f: F) -> CtrlFlow<B, C2>
    where
        F: FnOnce(C) -> C2,
    {
        match self {
            CtrlFlow::Break(b) => CtrlFlow::Break(b),
            CtrlFlow::Continue(c) => CtrlFlow::Continue(f(c)),
        }
    }

    /// Transform whichever arm is inhabited.
    pub fn map<B2, C2, F, G>(self, f: F, g: G) -> CtrlFlow<B2, C2>
    where
        F: FnOnce(B) -> B2,
        G: FnOnce(C) -> C2,
    {
        match self {
            CtrlFlow::Break(b) => CtrlFlow::Break(f(b)),
            CtrlFlow::Continue(c) => CtrlFlow::Continue(g(c)),
        }
    }

    /// # Panics
    /// If this is `Continue`.
    #[track_caller]
    pub fn unwrap_break(self) -> B {
        match self {
            CtrlFlow::Break(b) => b,
            CtrlFlow::Continue(_) => panic!(
                "called `CtrlFlow<{}, {}>::unwrap_break()` on a `Continue` value",
                type_name::<B>(),
                type_name::<C>()
            ),
        }
    }

    /// # Panics
    /// If this is `Break`.
    #[track_caller]
    pub fn unwrap_continue(self) -> C {
        match self {
            CtrlFlow::Continue(c) => c,
            CtrlFlow::Break(_) => panic!(
                "called `CtrlFlow<{}, {}>::unwrap_continue()` on a `Break` value",
                type_name::<B>(),
                type_name::<C>()
            ),
        }
    }

    /// The continue value; a break becomes `None`.
    pub fn into_option(self) -> Option<C> {
        self.continue_value()
    }

    /// `Break` becomes `Err` and `Continue` becomes `Ok`.
    pub fn into_result(self) -> Result<C, B> {
        match self {
            CtrlFlow::Continue(c) => Ok(c),
            CtrlFlow::Break(b) => Err(b),
        }
    }

    pub fn into_box_result(self) -> Result<C>
    where
        B: Payload,
    {
        self.into_result().map_err(ErrBox::new)
    }

    /// A break is treated as an error.
    pub fn into_errable(self) -> Errable<B> {
        match self {
            CtrlFlow::Continue(_) => Errable::Ok,
            CtrlFlow::Break(b) => Errable::Err(b),
        }
    }
}

impl<B, C> From<Result<C, B>> for CtrlFlow<B, C> {
    fn from(result: Result<C, B>) -> Self {
        match result {
            Ok(c) => CtrlFlow::Continue(c),
            Err(b) => CtrlFlow::Break(b),
        }
    }
}

impl<B, C> From<ControlFlow<B, C>> for CtrlFlow<B, C> {
    fn from(flow: ControlFlow<B, C>) -> Self {
        match flow {
            ControlFlow::Continue(c) => CtrlFlow::Continue(c),
            ControlFlow::Break(b) => CtrlFlow::Break(b),
        }
    }
}

impl<B, C> From<CtrlFlow<B, C>> for ControlFlow<B, C> {
    fn from(flow: CtrlFlow<B, C>) -> Self {
        match flow {
            CtrlFlow::Continue(c) => ControlFlow::Continue(c),
            CtrlFlow::Break(b) => ControlFlow::Break(b),
        }
    }
}

impl<B: Display, C: Display> Display for CtrlFlow<B, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CtrlFlow::Continue(c) => write!(f, "Continue({})", c),
            CtrlFlow::Break(b) => write!(f, "Break({})", b),
        }
    }
}
