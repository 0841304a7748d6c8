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

use std::fmt::{Debug, Formatter};
use std::ops::{Deref, DerefMut};

/// A mutual exclusion lock that owns the value it protects.
///
/// The lock does not become poisoned if a holder panics; the guard is released while unwinding
/// and the value is left as it was.
#[derive(Default)]
pub struct Mutex<T> {
    inner: parking_lot::Mutex<T>,
}

/// Exclusive access to the value of a [`Mutex`]. The lock is released when the guard is dropped.
pub struct MutexGuard<'a, T> {
    inner: parking_lot::MutexGuard<'a, T>,
}

impl<T> Mutex<T> {
    pub fn new(value: T) -> Self {
        Mutex {
            inner: parking_lot::Mutex::new(value),
        }
    }

    /// Block until the lock is acquired.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        MutexGuard {
            inner: self.inner.lock(),
        }
    }

    /// Acquire the lock if it is not currently held.
    pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
        self.inner.try_lock().map(|inner| MutexGuard { inner })
    }

    /// Replace the value with the result of applying `f` to it, holding the lock throughout. If
    /// `f` panics the lock is released and the value is unchanged.
    pub fn lock_scope<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.inner.lock();
        let value = f(&guard);
        *guard = value;
    }

    /// As [`Mutex::lock_scope`] but `f` is only called if the lock can be acquired without
    /// blocking. Returns whether `f` was called.
    pub fn try_lock_scope<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        match self.inner.try_lock() {
            Some(mut guard) => {
                let value = f(&guard);
                *guard = value;
                true
            }
            None => false,
        }
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: Debug> Debug for Mutex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_lock() {
            Some(guard) => f.debug_struct("Mutex").field("data", &*guard).finish(),
            None => f.debug_struct("Mutex").field("data", &"<locked>").finish(),
        }
    }
}

impl<'a, T> MutexGuard<'a, T> {
    /// Release the lock, leaving the value unchanged.
    pub fn unlock(self) {}

    /// Release the lock after replacing the value.
    pub fn unlock_with(mut self, value: T) {
        *self.inner = value;
    }
}

impl<'a, T> Deref for MutexGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<'a, T> DerefMut for MutexGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}

impl<'a, T: Debug> Debug for MutexGuard<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&**self, f)
    }
}
