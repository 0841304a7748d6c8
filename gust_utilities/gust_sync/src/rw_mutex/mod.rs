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

use tracing::trace;

/// A reader-writer lock that owns the value it protects. Any number of readers may hold the lock
/// at once, or a single writer.
#[derive(Default)]
pub struct RwMutex<T> {
    inner: parking_lot::RwLock<T>,
}

/// Shared read access to the value of a [`RwMutex`].
pub struct RwMutexReadGuard<'a, T> {
    inner: parking_lot::RwLockReadGuard<'a, T>,
}

/// Exclusive write access to the value of a [`RwMutex`].
pub struct RwMutexWriteGuard<'a, T> {
    inner: parking_lot::RwLockWriteGuard<'a, T>,
}

impl<T> RwMutex<T> {
    pub fn new(value: T) -> Self {
        RwMutex {
            inner: parking_lot::RwLock::new(value),
        }
    }

    /// Block until exclusive access is acquired.
    pub fn lock(&self) -> RwMutexWriteGuard<'_, T> {
        RwMutexWriteGuard {
            inner: self.inner.write(),
        }
    }

    pub fn try_lock(&self) -> Option<RwMutexWriteGuard<'_, T>> {
        self.inner
            .try_write()
            .map(|inner| RwMutexWriteGuard { inner })
    }

    /// Block until shared access is acquired.
    pub fn read(&self) -> RwMutexReadGuard<'_, T> {
        RwMutexReadGuard {
            inner: self.inner.read(),
        }
    }

    pub fn try_read(&self) -> Option<RwMutexReadGuard<'_, T>> {
        self.inner
            .try_read()
            .map(|inner| RwMutexReadGuard { inner })
    }

    /// Replace the value with the result of applying `f` to it, holding the write lock
    /// throughout.
    pub fn lock_scope<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.inner.write();
        let value = f(&guard);
        *guard = value;
    }

    /// As [`RwMutex::lock_scope`], skipping `f` if the write lock is not immediately available.
    /// Returns whether `f` was called.
    pub fn try_lock_scope<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        match self.inner.try_write() {
            Some(mut guard) => {
                let value = f(&guard);
                *guard = value;
                true
            }
            None => false,
        }
    }

    /// Call `f` with the value while holding the read lock.
    pub fn rlock_scope<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        f(&self.inner.read());
    }

    /// As [`RwMutex::rlock_scope`], skipping `f` if the read lock is not immediately available.
    /// Returns whether `f` was called.
    pub fn try_rlock_scope<F>(&self, f: F) -> bool
    where
        F: FnOnce(&T),
    {
        match self.inner.try_read() {
            Some(guard) => {
                f(&guard);
                true
            }
            None => false,
        }
    }

    /// Optimistically act on the value under the read lock.
    ///
    /// `read_and_do` is first called with the read lock held. If it returns `false`, the write
    /// lock is taken and `read_and_do` is tried again, in case another writer has already fixed
    /// the value. If it still fails, `swap_when_false` may supply a replacement value which is
    /// installed before `read_and_do` is called one last time.
    pub fn try_best<R, S>(&self, mut read_and_do: R, swap_when_false: S)
    where
        R: FnMut(&T) -> bool,
        S: FnOnce(&T) -> Option<T>,
    {
        if read_and_do(&self.inner.read()) {
            return;
        }
        let mut guard = self.inner.write();
        if read_and_do(&guard) {
            return;
        }
        if let Some(value) = swap_when_false(&guard) {
            trace!("Replacing the value of a RwMutex after a failed read.");
            *guard = value;
            read_and_do(&guard);
        }
    }

    pub fn get_mut(&mut self) -> &mut T {
        self.inner.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

impl<T: Debug> Debug for RwMutex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.inner.try_read() {
            Some(guard) => f.debug_struct("RwMutex").field("data", &*guard).finish(),
            None => f.debug_struct("RwMutex").field("data", &"<locked>").finish(),
        }
    }
}

impl<'a, T> RwMutexWriteGuard<'a, T> {
    /// Release the lock, leaving the value unchanged.
    pub fn unlock(self) {}

    /// Release the lock after replacing the value.
    pub fn unlock_with(mut self, value: T) {
        *self.inner = value;
    }
}

impl<'a, T> Deref for RwMutexReadGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<'a, T> Deref for RwMutexWriteGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<'a, T> DerefMut for RwMutexWriteGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.inner
    }
}
