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

use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};
use std::sync::OnceLock;

use gust_sum::{ErrBox, Payload, Result};
use parking_lot::Mutex;
use tracing::{error, trace};

use crate::LazyError;

type Initializer<T> = Box<dyn FnOnce() -> Result<T> + Send>;

/// A value that is computed on first use.
///
/// An initializer is configured with one of the `set_init_*` methods; once one has been set the
/// others have no effect. The first call to [`LazyValue::try_get_value`] runs the initializer and
/// stores its result, which every later call returns. Concurrent first calls block until the
/// single run of the initializer completes.
///
/// If the initializer panics, the panic is propagated to the caller that ran it and the value is
/// left holding [`LazyError::Panicked`]. The initializer is never run again.
pub struct LazyValue<T> {
    init: Mutex<Option<Initializer<T>>>,
    value: OnceLock<Result<T>>,
}

impl<T> Default for LazyValue<T> {
    fn default() -> Self {
        LazyValue {
            init: Mutex::new(None),
            value: OnceLock::new(),
        }
    }
}

impl<T: Debug> Debug for LazyValue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyValue")
            .field("value", &self.value.get())
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "<unknown>".to_string()
    }
}

impl<T> LazyValue<T> {
    /// A lazy value with no initializer.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_func<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let lazy = LazyValue::new();
        lazy.set_init_func(init);
        lazy
    }

    pub fn with_value(value: T) -> Self
    where
        T: Send + 'static,
    {
        let lazy = LazyValue::new();
        lazy.set_init_value(value);
        lazy
    }

    pub fn with_zero() -> Self
    where
        T: Default + Send + 'static,
    {
        let lazy = LazyValue::new();
        lazy.set_init_zero();
        lazy
    }

    /// Whether the initializer has run (or initialization has failed for want of one).
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Use a function to compute the value.
    pub fn set_init_func<F>(&self, init: F) -> &Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        if !self.is_initialized() {
            let mut guard = self.init.lock();
            if guard.is_none() {
                *guard = Some(Box::new(init));
            }
        }
        self
    }

    pub fn set_init_value(&self, value: T) -> &Self
    where
        T: Send + 'static,
    {
        self.set_init_func(move || Ok(value))
    }

    /// Initialize with the default value of `T`.
    pub fn set_init_zero(&self) -> &Self
    where
        T: Default + Send + 'static,
    {
        self.set_init_func(|| Ok(T::default()))
    }

    /// Start from the default value of `T` and let `setter` fill it in. An error from the setter
    /// becomes the stored error.
    pub fn set_init_setter<F, E>(&self, setter: F) -> &Self
    where
        T: Default + Send + 'static,
        F: FnOnce(&mut T) -> Result<(), E> + Send + 'static,
        E: Payload,
    {
        self.set_init_func(move || {
            let mut value = T::default();
            setter(&mut value).map_err(ErrBox::new)?;
            Ok(value)
        })
    }

    /// Run `closure` for its side effects, storing the default value of `T` if it succeeds.
    pub fn set_init_closure<F, E>(&self, closure: F) -> &Self
    where
        T: Default + Send + 'static,
        F: FnOnce() -> Result<(), E> + Send + 'static,
        E: Payload,
    {
        self.set_init_func(move || {
            closure().map_err(ErrBox::new)?;
            Ok(T::default())
        })
    }

    /// The stored result, running the initializer if this is the first call.
    ///
    /// # Panics
    /// If this call runs the initializer and the initializer panics.
    pub fn try_get_value(&self) -> Result<&T> {
        self.initialize().as_ref().map_err(Clone::clone)
    }

    /// The value, if initialization succeeded.
    pub fn get(&self) -> Option<&T> {
        self.initialize().as_ref().ok()
    }

    fn initialize(&self) -> &Result<T> {
        let mut panic_payload = None;
        let result = self.value.get_or_init(|| {
            let init = self.init.lock().take();
            match init {
                Some(init) => match catch_unwind(AssertUnwindSafe(init)) {
                    Ok(result) => {
                        trace!(ok = result.is_ok(), "LazyValue initialized.");
                        result
                    }
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        error!(cause = %message, "LazyValue initializer panicked.");
                        panic_payload = Some(payload);
                        Err(ErrBox::from_error(LazyError::Panicked(message)))
                    }
                },
                None => {
                    error!("LazyValue read before an initializer was set.");
                    Err(ErrBox::from_error(LazyError::WithoutInit))
                }
            }
        });
        if let Some(payload) = panic_payload {
            resume_unwind(payload);
        }
        result
    }
}
