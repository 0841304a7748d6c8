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


use std::any::{type_name, Any};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

type Erased = Arc<dyn Any + Send + Sync>;

/// A concurrent map from keys of type `K` to values of type `V`.
///
/// Entries are stored type-erased, so a value of a different type may be placed in the map with
/// [`SyncMap::store_any`]. Reading such an entry as a `V` behaves as if it were absent and
/// [`SyncMap::range`] stops when it reaches one.
pub struct SyncMap<K, V> {
    entries: RwLock<HashMap<K, Erased>>,
    _values: PhantomData<fn() -> V>,
}

impl<K, V> Default for SyncMap<K, V> {
    fn default() -> Self {
        SyncMap {
            entries: RwLock::new(HashMap::new()),
            _values: PhantomData,
        }
    }
}

impl<K, V> Debug for SyncMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncMap")
            .field("len", &self.entries.read().len())
            .finish()
    }
}

fn downcast<V>(value: &Erased) -> Option<V>
where
    V: Any + Clone,
{
    value.downcast_ref::<V>().cloned()
}

impl<K, V> SyncMap<K, V>
where
    K: Eq + Hash,
    V: Any + Clone + Send + Sync,
{
    pub fn new() -> Self {
        Default::default()
    }

    /// The value stored for a key, if there is one and it is a `V`.
    pub fn load<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.read().get(key).and_then(downcast)
    }

    pub fn store(&self, key: K, value: V) {
        self.store_any(key, value);
    }

    /// Store a value of any type for a key.
    pub fn store_any<A>(&self, key: K, value: A)
    where
        A: Any + Send + Sync,
    {
        self.entries.write().insert(key, Arc::new(value));
    }

    /// Return the existing value for the key if there is one. Otherwise store `value` and return
    /// `None`. If the existing entry is not a `V` it is left in place and `None` is returned.
    pub fn load_or_store(&self, key: K, value: V) -> Option<V> {
        self.load_or_store_any(key, value)
    }

    /// As [`SyncMap::load_or_store`], storing a value of any type.
    pub fn load_or_store_any<A>(&self, key: K, value: A) -> Option<V>
    where
        A: Any + Send + Sync,
    {
        let mut entries = self.entries.write();
        match entries.get(&key) {
            Some(existing) => downcast(existing),
            None => {
                entries.insert(key, Arc::new(value));
                None
            }
        }
    }

    /// Remove the entry for a key, returning its value if it was a `V`.
    pub fn load_and_delete<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries
            .write()
            .remove(key)
            .and_then(|value| downcast(&value))
    }

    pub fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.write().remove(key);
    }

    /// The number of entries, of any type.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Call `f` with each entry until it returns `false`.
    ///
    /// The entries are copied out of the map before `f` is first called, so `f` may itself use
    /// the map. Iteration also stops at the first entry that is not a `V`.
    pub fn range<F>(&self, mut f: F)
    where
        K: Clone,
        F: FnMut(&K, V) -> bool,
    {
        let snapshot = self
            .entries
            .read()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect::<Vec<_>>();
        for (position, (key, value)) in snapshot.into_iter().enumerate() {
            match downcast::<V>(&value) {
                Some(value) => {
                    if !f(&key, value) {
                        break;
                    }
                }
                None => {
                    warn!(
                        position,
                        expected = type_name::<V>(),
                        "SyncMap entry has an unexpected type; stopping iteration."
                    );
                    break;
                }
            }
        }
    }
}
