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

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Barrier;

use static_assertions::assert_impl_all;

use super::Mutex;

assert_impl_all!(Mutex<Vec<u8>>: Send, Sync, Default);

#[test]
fn lock_and_unlock_with() {
    let mutex = Mutex::new(1);
    let guard = mutex.lock();
    assert_eq!(*guard, 1);
    guard.unlock_with(2);
    assert_eq!(*mutex.lock(), 2);

    let guard = mutex.lock();
    guard.unlock();
    assert_eq!(mutex.into_inner(), 2);
}

#[test]
fn try_lock_when_contended() {
    let mutex = Mutex::new(String::from("a"));
    let guard = mutex.lock();
    assert!(mutex.try_lock().is_none());
    assert!(!mutex.try_lock_scope(|s| format!("{s}b")));
    drop(guard);

    assert!(mutex.try_lock_scope(|s| format!("{s}b")));
    assert_eq!(mutex.try_lock().as_deref().map(String::as_str), Some("ab"));
}

#[test]
fn lock_scope_replaces_value() {
    let mutex = Mutex::new(vec![1]);
    mutex.lock_scope(|v| {
        let mut v = v.clone();
        v.push(2);
        v
    });
    assert_eq!(*mutex.lock(), vec![1, 2]);
}

#[test]
fn lock_scope_releases_on_panic() {
    let mutex = Mutex::new(5);
    let result = catch_unwind(AssertUnwindSafe(|| {
        mutex.lock_scope(|_| panic!("failed in scope"));
    }));
    assert!(result.is_err());
    assert!(mutex.try_lock().is_some());
    assert_eq!(*mutex.lock(), 5);
}

#[test]
fn concurrent_increments() {
    const THREADS: usize = 8;
    const ROUNDS: usize = 1000;

    let mutex = Mutex::new(0usize);
    let barrier = Barrier::new(THREADS);
    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                barrier.wait();
                for _ in 0..ROUNDS {
                    mutex.lock_scope(|n| n + 1);
                }
            });
        }
    });
    assert_eq!(*mutex.lock(), THREADS * ROUNDS);
}

#[test]
fn guard_deref_mut() {
    let mut mutex = Mutex::new(vec![0]);
    mutex.lock().push(1);
    mutex.get_mut().push(2);
    assert_eq!(format!("{:?}", mutex), "Mutex { data: [0, 1, 2] }");
}
