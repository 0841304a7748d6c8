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


use parking_lot::Mutex;

/// A value that is read and replaced atomically. All operations are totally ordered.
#[derive(Debug, Default)]
pub struct AtomicValue<T> {
    inner: Mutex<Option<T>>,
}

impl<T> AtomicValue<T> {
    /// A cell that has not yet been stored to.
    pub fn new() -> Self {
        AtomicValue {
            inner: Mutex::new(None),
        }
    }

    pub fn with_value(value: T) -> Self {
        AtomicValue {
            inner: Mutex::new(Some(value)),
        }
    }

    /// The most recently stored value or `None` if nothing has been stored.
    pub fn load(&self) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().clone()
    }

    pub fn store(&self, value: T) {
        *self.inner.lock() = Some(value);
    }

    /// Store a new value, returning the previous one.
    pub fn swap(&self, value: T) -> Option<T> {
        self.inner.lock().replace(value)
    }

    /// Store `new` only if the current value is equal to `old`. A cell that has never been stored
    /// to holds no value, so the exchange fails. Returns whether the value was stored.
    pub fn compare_and_swap(&self, old: &T, new: T) -> bool
    where
        T: PartialEq,
    {
        let mut guard = self.inner.lock();
        match guard.as_mut() {
            Some(current) if current == old => {
                *current = new;
                true
            }
            _ => false,
        }
    }
}
