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

use std::cell::RefCell;

use super::{non_errable, to_errable, Errable};
use crate::{BoxResultExt, CtrlFlow};

#[test]
fn default_is_ok() {
    assert_eq!(Errable::<String>::default(), Errable::Ok);
    assert!(non_errable::<i32>().is_ok());
    assert!(!non_errable::<i32>().is_err());
}

#[test]
fn optional_error_conversion() {
    assert_eq!(to_errable(Some(3)), Errable::Err(3));
    assert_eq!(to_errable::<i32>(None), Errable::Ok);
    assert_eq!(Errable::Err(3).into_option(), Some(3));
    assert_eq!(Errable::<i32>::Ok.into_option(), None);
}

#[test]
fn unwrap_err_or_default() {
    assert_eq!(Errable::Err("e").unwrap_err(), "e");
    assert_eq!(Errable::Ok.unwrap_err_or("fallback"), "fallback");
    assert_eq!(Errable::Err("e").unwrap_err_or("fallback"), "e");
}

#[test]
#[should_panic(expected = "unwrap_err()` on an `Ok` value")]
fn unwrap_err_on_ok_panics() {
    Errable::<u8>::Ok.unwrap_err();
}

#[test]
fn inspection_hooks() {
    let seen = RefCell::new(vec![]);
    let _ = Errable::Err(1).inspect_err(|e| seen.borrow_mut().push(*e));
    let _ = Errable::<i32>::Ok.inspect_err(|e| seen.borrow_mut().push(*e));
    let _ = Errable::<i32>::Ok.inspect(|| seen.borrow_mut().push(0));
    let _ = Errable::Err(2).inspect(|| seen.borrow_mut().push(0));
    assert_eq!(seen.into_inner(), vec![1, 0]);
}

#[test]
fn map_err_keeps_ok() {
    assert_eq!(Errable::Err(2).map_err(|e| e * 10), Errable::Err(20));
    assert_eq!(Errable::<i32>::Ok.map_err(|e| e * 10), Errable::Ok);
    assert_eq!(Errable::Err(String::from("x")).as_ref(), Errable::Err(&"x".to_string()));
}

#[test]
fn lattice_conversions() {
    assert_eq!(Errable::Err("e").into_result(), Err("e"));
    assert_eq!(Errable::<&str>::Ok.into_result(), Ok(()));
    assert_eq!(Errable::Err("e").into_enum_result(), Err("e"));

    assert_eq!(Errable::Err("e").into_ctrl_flow(), CtrlFlow::Break("e"));
    assert_eq!(Errable::<&str>::Ok.into_ctrl_flow(), CtrlFlow::Continue(()));

    assert_eq!(Errable::from(Err::<(), _>(5)), Errable::Err(5));
    assert_eq!(Errable::from(Ok::<(), i32>(())), Errable::Ok);
}

#[test]
fn boxed_error() {
    let result = Errable::Err(42u8).into_box_result();
    assert_eq!(result.err_val::<u8>(), Some(&42));
    assert!(Errable::<u8>::Ok.into_box_result().is_ok());

    assert!(Errable::<u8>::Ok.to_error().is_none());
    let err = Errable::Err("broken").to_error().unwrap();
    assert_eq!(err.to_string(), "broken");
}

#[test]
fn display() {
    assert_eq!(Errable::<i32>::Ok.to_string(), "Ok");
    assert_eq!(Errable::Err(7).to_string(), "Err(7)");
}
