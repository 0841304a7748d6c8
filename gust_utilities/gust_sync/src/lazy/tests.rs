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
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};

use gust_sum::BoxResultExt;
use static_assertions::assert_impl_all;

use super::LazyValue;
use crate::LazyError;

assert_impl_all!(LazyValue<String>: Send, Sync);

#[test]
fn concurrent_first_use_initializes_once() {
    const THREADS: usize = 10;

    let counter = Arc::new(AtomicUsize::new(0));
    let lazy = {
        let counter = counter.clone();
        LazyValue::with_func(move || Ok(counter.fetch_add(1, Ordering::SeqCst) + 1))
    };
    let barrier = Barrier::new(THREADS);
    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                barrier.wait();
                assert_eq!(lazy.try_get_value().ok(), Some(&1));
            });
        }
    });
    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn missing_initializer() {
    let lazy = LazyValue::<i32>::new();
    let result = lazy.try_get_value();
    assert_eq!(result.as_ref().unwrap_err().to_string(), "LazyValue without init");
    assert!(result.contains_err(&LazyError::WithoutInit));
    assert!(lazy.is_initialized());

    lazy.set_init_value(3);
    assert!(lazy.get().is_none());
}

#[test]
fn first_initializer_wins() {
    let lazy = LazyValue::new();
    lazy.set_init_value(1).set_init_value(2).set_init_zero();
    assert!(!lazy.is_initialized());
    assert_eq!(lazy.get(), Some(&1));
    assert!(lazy.is_initialized());
}

#[test]
fn value_and_zero_constructors() {
    assert_eq!(LazyValue::with_value("v").try_get_value().ok(), Some(&"v"));
    assert_eq!(LazyValue::<u64>::with_zero().get(), Some(&0));
}

#[test]
fn failed_initializer_is_stored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let lazy = {
        let calls = calls.clone();
        LazyValue::<u8>::with_func(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("unavailable".into())
        })
    };
    assert_eq!(lazy.try_get_value().err_val::<&str>(), Some(&"unavailable"));
    assert_eq!(lazy.try_get_value().err_val::<&str>(), Some(&"unavailable"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn setter_fills_default() {
    let lazy = LazyValue::<Vec<i32>>::new();
    lazy.set_init_setter(|v: &mut Vec<i32>| {
        v.extend([1, 2, 3]);
        Ok::<_, String>(())
    });
    assert_eq!(lazy.get(), Some(&vec![1, 2, 3]));

    let failing = LazyValue::<Vec<i32>>::new();
    failing.set_init_setter(|_: &mut Vec<i32>| Err("bad setter"));
    assert_eq!(failing.try_get_value().unwrap_err().to_string(), "bad setter");
}

#[test]
fn closure_runs_for_side_effects() {
    let ran = Arc::new(AtomicUsize::new(0));
    let lazy = LazyValue::<String>::new();
    {
        let ran = ran.clone();
        lazy.set_init_closure(move || {
            ran.fetch_add(1, Ordering::SeqCst);
            Ok::<_, &str>(())
        });
    }
    assert_eq!(lazy.get().map(String::as_str), Some(""));
    assert_eq!(ran.load(Ordering::SeqCst), 1);

    let failing = LazyValue::<String>::new();
    failing.set_init_closure(|| Err(42));
    assert_eq!(failing.try_get_value().err_val::<i32>(), Some(&42));
}

#[test]
fn panicking_initializer_is_not_rerun() {
    gust_test_util::init_trace(["gust_sync=trace"]);
    let calls = Arc::new(AtomicUsize::new(0));
    let lazy = {
        let calls = calls.clone();
        LazyValue::<i32>::with_func(move || {
            calls.fetch_add(1, Ordering::SeqCst);
            panic!("boom")
        })
    };
    let first = catch_unwind(AssertUnwindSafe(|| {
        let _ = lazy.try_get_value();
    }));
    assert!(first.is_err());
    assert!(lazy.is_initialized());

    let err = lazy.try_get_value().unwrap_err();
    assert_eq!(
        err.find::<LazyError>(),
        Some(&LazyError::Panicked("boom".to_string()))
    );
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
