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

use std::ops::ControlFlow;

use super::CtrlFlow;
use crate::{BoxResultExt, Errable};

fn first_over(limit: i32, values: &[i32]) -> CtrlFlow<i32> {
    for value in values {
        if *value > limit {
            return CtrlFlow::Break(*value);
        }
    }
    CtrlFlow::Continue(())
}

#[test]
fn traversal_breaks_early() {
    assert_eq!(first_over(3, &[1, 2, 5, 9]), CtrlFlow::Break(5));
    assert_eq!(first_over(10, &[1, 2, 5, 9]), CtrlFlow::Continue(()));
}

#[test]
fn arm_queries() {
    let brk: CtrlFlow<&str, i32> = CtrlFlow::Break("stop");
    let cont: CtrlFlow<&str, i32> = CtrlFlow::Continue(1);

    assert!(brk.is_break() && !brk.is_continue());
    assert!(cont.is_continue() && !cont.is_break());
    assert_eq!(brk.break_value(), Some("stop"));
    assert_eq!(brk.continue_value(), None);
    assert_eq!(cont.continue_value(), Some(1));
    assert_eq!(cont.break_value(), None);
}

#[test]
fn mapping() {
    let brk: CtrlFlow<i32, i32> = CtrlFlow::Break(2);
    let cont: CtrlFlow<i32, i32> = CtrlFlow::Continue(3);

    assert_eq!(brk.map_break(|b| b + 1), CtrlFlow::Break(3));
    assert_eq!(brk.map_continue(|c| c + 1), CtrlFlow::Break(2));
    assert_eq!(cont.map_continue(|c| c * 2), CtrlFlow::Continue(6));
    assert_eq!(
        cont.map(|b| b.to_string(), |c| c * 3),
        CtrlFlow::<String, i32>::Continue(9)
    );
}

#[test]
fn unwrapping() {
    assert_eq!(CtrlFlow::<_, ()>::Break(4).unwrap_break(), 4);
    assert_eq!(CtrlFlow::<(), _>::Continue("go").unwrap_continue(), "go");
}

#[test]
#[should_panic(expected = "unwrap_break()` on a `Continue` value")]
fn unwrap_break_on_continue_panics() {
    CtrlFlow::<u8, u8>::Continue(1).unwrap_break();
}

#[test]
fn lattice_conversions() {
    let brk: CtrlFlow<&str, i32> = CtrlFlow::Break("stop");
    let cont: CtrlFlow<&str, i32> = CtrlFlow::Continue(1);

    assert_eq!(brk.into_result(), Err("stop"));
    assert_eq!(cont.into_result(), Ok(1));
    assert_eq!(brk.into_option(), None);
    assert_eq!(cont.into_option(), Some(1));
    assert_eq!(brk.into_errable(), Errable::Err("stop"));
    assert_eq!(cont.into_errable(), Errable::Ok);
    assert_eq!(CtrlFlow::from(Err::<i32, _>("stop")), brk);

    let boxed = brk.into_box_result();
    assert_eq!(boxed.err_val::<&str>(), Some(&"stop"));
}

#[test]
fn std_control_flow_round_trip() {
    let flow: ControlFlow<u8, u16> = CtrlFlow::<u8, u16>::Break(1).into();
    assert_eq!(flow, ControlFlow::Break(1));
    assert_eq!(
        CtrlFlow::from(ControlFlow::<u8, u16>::Continue(2)),
        CtrlFlow::Continue(2)
    );
}

#[test]
fn display() {
    assert_eq!(CtrlFlow::<i32, i32>::Break(1).to_string(), "Break(1)");
    assert_eq!(CtrlFlow::<i32, &str>::Continue("x").to_string(), "Continue(x)");
}
