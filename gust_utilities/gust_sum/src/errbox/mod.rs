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

use std::any::{type_name, Any};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// Bound satisfied by every value that can be carried as the payload of an [`ErrBox`].
pub trait Payload: Debug + Display + Send + Sync + 'static {}

impl<P> Payload for P where P: Debug + Display + Send + Sync + 'static {}

trait Boxed: Send + Sync {
    fn as_any(&self) -> &(dyn Any + Send + Sync);

    fn as_error(&self) -> Option<&(dyn Error + 'static)>;

    fn type_name(&self) -> &'static str;

    fn fmt_display(&self, f: &mut Formatter<'_>) -> std::fmt::Result;

    fn fmt_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result;
}

struct Value<P>(P);

impl<P: Payload> Boxed for Value<P> {
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &self.0
    }

    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        None
    }

    fn type_name(&self) -> &'static str {
        type_name::<P>()
    }

    fn fmt_display(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

struct Failure<E>(E);

impl<E> Boxed for Failure<E>
where
    E: Error + Send + Sync + 'static,
{
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &self.0
    }

    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }

    fn type_name(&self) -> &'static str {
        type_name::<E>()
    }

    fn fmt_display(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

struct DynFailure(Box<dyn Error + Send + Sync>);

impl Boxed for DynFailure {
    fn as_any(&self) -> &(dyn Any + Send + Sync) {
        &self.0
    }

    fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.0.as_ref())
    }

    fn type_name(&self) -> &'static str {
        type_name::<Box<dyn Error + Send + Sync>>()
    }

    fn fmt_display(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }

    fn fmt_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

/// A universal error that can carry a payload of any type.
///
/// An [`ErrBox`] is either built from an arbitrary displayable value with [`ErrBox::new`] or from
/// an [`Error`] with [`ErrBox::from_error`]. In the second case the error chain of the payload is
/// preserved and can be searched with [`ErrBox::is`] and [`ErrBox::find`]. Cloning an [`ErrBox`]
/// shares the payload.
#[derive(Clone)]
pub struct ErrBox {
    inner: Arc<dyn Boxed>,
}

impl ErrBox {
    /// Box an arbitrary payload. If the payload is already an [`ErrBox`] it is returned unchanged
    /// rather than being wrapped a second time.
    pub fn new<P: Payload>(payload: P) -> Self {
        if let Some(err_box) = (&payload as &dyn Any).downcast_ref::<ErrBox>() {
            return err_box.clone();
        }
        ErrBox {
            inner: Arc::new(Value(payload)),
        }
    }

    /// Box an error, keeping its chain of sources searchable.
    pub fn from_error<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        if let Some(err_box) = (&err as &dyn Any).downcast_ref::<ErrBox>() {
            return err_box.clone();
        }
        ErrBox {
            inner: Arc::new(Failure(err)),
        }
    }

    /// The name of the type of the payload.
    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    /// Attempt to view the payload as a value of type `V`.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.inner.as_any().downcast_ref::<V>()
    }

    /// The payload as an error, if it was boxed as one.
    pub fn as_error(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.as_error()
    }

    /// Iterate over the payload error (if there is one) followed by its chain of sources.
    pub fn chain(&self) -> impl Iterator<Item = &(dyn Error + 'static)> {
        std::iter::successors(self.as_error(), |err| (*err).source())
    }

    /// Determine whether the payload, or any error in its chain, is equal to the target.
    pub fn is<E>(&self, target: &E) -> bool
    where
        E: Error + PartialEq + 'static,
    {
        self.downcast_ref::<E>() == Some(target)
            || self
                .chain()
                .any(|err| err.downcast_ref::<E>() == Some(target))
    }

    /// Find the first error of type `E`, looking at the payload and then along its chain.
    pub fn find<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        self.downcast_ref::<E>()
            .or_else(|| self.chain().find_map(|err| err.downcast_ref::<E>()))
    }

    /// Whether two boxes share the same payload.
    pub fn ptr_eq(this: &ErrBox, other: &ErrBox) -> bool {
        Arc::ptr_eq(&this.inner, &other.inner)
    }
}

impl Display for ErrBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.inner.fmt_display(f)
    }
}

impl Debug for ErrBox {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ErrBox<{}>(", self.type_name())?;
        self.inner.fmt_debug(f)?;
        f.write_str(")")
    }
}

impl Error for ErrBox {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.as_error().and_then(|err| err.source())
    }
}

impl From<&'static str> for ErrBox {
    fn from(msg: &'static str) -> Self {
        ErrBox::new(msg)
    }
}

impl From<String> for ErrBox {
    fn from(msg: String) -> Self {
        ErrBox::new(msg)
    }
}

impl From<Box<dyn Error + Send + Sync>> for ErrBox {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        ErrBox {
            inner: Arc::new(DynFailure(err)),
        }
    }
}
