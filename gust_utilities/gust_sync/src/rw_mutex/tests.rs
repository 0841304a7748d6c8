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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;

use super::RwMutex;

#[test]
fn readers_share_the_lock() {
    let mutex = RwMutex::new(3);
    let first = mutex.read();
    let second = mutex.try_read();
    assert_eq!(second.as_deref(), Some(&3));
    assert!(mutex.try_lock().is_none());
    assert!(!mutex.try_lock_scope(|n| n + 1));
    drop(second);
    drop(first);
    assert!(mutex.try_lock_scope(|n| n + 1));
    assert_eq!(*mutex.read(), 4);
}

#[test]
fn writer_excludes_readers() {
    let mutex = RwMutex::new(String::new());
    let mut guard = mutex.lock();
    guard.push('x');
    assert!(mutex.try_read().is_none());
    assert!(!mutex.try_rlock_scope(|_| {}));
    guard.unlock_with(String::from("y"));

    let mut seen = String::new();
    assert!(mutex.try_rlock_scope(|s| seen.push_str(s)));
    mutex.rlock_scope(|s| seen.push_str(s));
    assert_eq!(seen, "yy");
}

#[test]
fn lock_scope_and_unlock() {
    let mutex = RwMutex::new(1);
    mutex.lock_scope(|n| n * 10);
    mutex.lock().unlock();
    assert_eq!(mutex.into_inner(), 10);
}

#[test]
fn try_best_read_succeeds() {
    let mutex = RwMutex::new(2);
    let reads = AtomicUsize::new(0);
    mutex.try_best(
        |n| {
            reads.fetch_add(1, Ordering::SeqCst);
            *n == 2
        },
        |_| panic!("no swap expected"),
    );
    assert_eq!(reads.load(Ordering::SeqCst), 1);
}

#[test]
fn try_best_swaps_and_retries() {
    gust_test_util::init_trace(["gust_sync=trace"]);
    let mutex = RwMutex::new(0);
    let mut observed = vec![];
    mutex.try_best(
        |n| {
            observed.push(*n);
            *n > 0
        },
        |n| Some(n + 7),
    );
    assert_eq!(observed, vec![0, 0, 7]);
    assert_eq!(*mutex.read(), 7);
}

#[test]
fn try_best_declined_swap() {
    let mutex = RwMutex::new(0);
    let mut attempts = 0;
    mutex.try_best(
        |_| {
            attempts += 1;
            false
        },
        |_| None,
    );
    assert_eq!(attempts, 2);
    assert_eq!(*mutex.read(), 0);
}

#[test]
fn concurrent_try_best_swaps_once() {
    const THREADS: usize = 6;

    let mutex = RwMutex::new(None::<usize>);
    let swaps = AtomicUsize::new(0);
    let barrier = Barrier::new(THREADS);
    std::thread::scope(|scope| {
        for i in 0..THREADS {
            let (mutex, swaps, barrier) = (&mutex, &swaps, &barrier);
            scope.spawn(move || {
                barrier.wait();
                mutex.try_best(
                    |value| value.is_some(),
                    |_| {
                        swaps.fetch_add(1, Ordering::SeqCst);
                        Some(Some(i))
                    },
                );
            });
        }
    });
    assert_eq!(swaps.load(Ordering::SeqCst), 1);
    assert!(mutex.read().is_some());
}
