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

use super::ErrBox;
use static_assertions::assert_impl_all;
use std::error::Error;
use std::fmt::{Display, Formatter};

assert_impl_all!(ErrBox: Send, Sync, Clone, Error);

#[derive(Debug, PartialEq, Eq)]
struct Inner(u32);

impl Display for Inner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "inner {}", self.0)
    }
}

impl Error for Inner {}

#[derive(Debug)]
struct Outer(Inner);

impl Display for Outer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("outer")
    }
}

impl Error for Outer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

#[test]
fn display_is_payload_string_form() {
    assert_eq!(ErrBox::new("boom").to_string(), "boom");
    assert_eq!(ErrBox::new(42).to_string(), "42");
    assert_eq!(ErrBox::from_error(Inner(3)).to_string(), "inner 3");
}

#[test]
fn debug_reveals_payload_type() {
    let err = ErrBox::new(7i64);
    let debug = format!("{:?}", err);
    assert!(debug.contains("i64"));
    assert!(debug.contains('7'));
}

#[test]
fn payload_downcast() {
    let err = ErrBox::new(12u8);
    assert_eq!(err.downcast_ref::<u8>(), Some(&12));
    assert!(err.downcast_ref::<i32>().is_none());
    assert_eq!(err.type_name(), "u8");
}

#[test]
fn no_double_boxing() {
    let first = ErrBox::new("once");
    let second = ErrBox::new(first.clone());
    assert!(ErrBox::ptr_eq(&first, &second));
    assert_eq!(second.downcast_ref::<&str>(), Some(&"once"));

    let third = ErrBox::from_error(second);
    assert!(ErrBox::ptr_eq(&first, &third));
}

#[test]
fn plain_value_has_no_error() {
    let err = ErrBox::new("plain");
    assert!(err.as_error().is_none());
    assert!(err.source().is_none());
    assert_eq!(err.chain().count(), 0);
}

#[test]
fn chain_walk() {
    let err = ErrBox::from_error(Outer(Inner(9)));
    assert_eq!(err.chain().count(), 2);
    assert!(err.is(&Inner(9)));
    assert!(!err.is(&Inner(10)));
    assert_eq!(err.find::<Inner>(), Some(&Inner(9)));
    assert!(err.find::<Outer>().is_some());
    assert_eq!(err.source().map(ToString::to_string), Some("inner 9".to_string()));
}

#[test]
fn from_dyn_error() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(Inner(1));
    let err = ErrBox::from(boxed);
    assert!(err.is(&Inner(1)));
    assert_eq!(err.to_string(), "inner 1");
}

#[test]
fn from_strings() {
    let err: ErrBox = "static".into();
    assert_eq!(err.to_string(), "static");
    let err: ErrBox = format!("owned {}", 1).into();
    assert_eq!(err.downcast_ref::<String>().map(String::as_str), Some("owned 1"));
}
