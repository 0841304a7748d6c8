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

use std::any::Any;
use std::iter::FusedIterator;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use tracing::{error, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demand {
    Next,
    Stop,
}

/// Iterator over the values of a push-style sequence. See [`from_seq`].
///
/// Dropping the iterator asks the producer to stop at its next yield.
#[derive(Debug)]
pub struct SeqIter<T> {
    demand: Sender<Demand>,
    data: Receiver<T>,
    done: bool,
}

/// Handle that releases the producer of a [`SeqIter`]. Dropping it stops the producer, so it must
/// be kept alive for as long as the iterator is in use.
#[derive(Debug)]
#[must_use = "dropping the handle stops the sequence"]
pub struct SeqStop {
    demand: Sender<Demand>,
    handle: Option<JoinHandle<()>>,
}

/// Bridge a push-style sequence into an iterator.
///
/// The sequence is a function that passes each of its values to the callback it is given,
/// stopping early if the callback returns `false`. It is run on a dedicated thread that only
/// produces a value when the iterator asks for one.
///
/// The returned [`SeqStop`] must be held until the iterator is no longer needed: dropping it
/// stops the producer, and an iterator whose handle was discarded straight away (as in
/// `let (iter, _) = from_seq(seq)`) yields nothing. [`SeqStop::stop`] also waits for the
/// producer thread to finish.
pub fn from_seq<T, S>(seq: S) -> (SeqIter<T>, SeqStop)
where
    T: Send + 'static,
    S: FnOnce(&mut dyn FnMut(T) -> bool) + Send + 'static,
{
    let (demand_tx, demand_rx) = unbounded();
    let (data_tx, data_rx) = bounded(1);
    let handle = std::thread::spawn(move || produce(seq, demand_rx, data_tx));
    let iter = SeqIter {
        demand: demand_tx.clone(),
        data: data_rx,
        done: false,
    };
    let stop = SeqStop {
        demand: demand_tx,
        handle: Some(handle),
    };
    (iter, stop)
}

fn produce<T, S>(seq: S, demand: Receiver<Demand>, data: Sender<T>)
where
    S: FnOnce(&mut dyn FnMut(T) -> bool),
{
    if !matches!(demand.recv(), Ok(Demand::Next)) {
        trace!("Sequence stopped before the first value was requested.");
        return;
    }
    let mut stopped = false;
    let mut yield_value = |value: T| {
        if stopped {
            return false;
        }
        if data.send(value).is_err() || !matches!(demand.recv(), Ok(Demand::Next)) {
            stopped = true;
            trace!("Sequence stopped by the consumer.");
        }
        !stopped
    };
    if let Err(payload) = catch_unwind(AssertUnwindSafe(|| seq(&mut yield_value))) {
        error!(
            cause = panic_message(payload.as_ref()),
            "Sequence producer panicked."
        );
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "<unknown>"
    }
}

impl<T> Iterator for SeqIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let SeqIter { demand, data, done } = self;
        if *done {
            return None;
        }
        let item = match demand.send(Demand::Next) {
            Ok(()) => data.recv().ok(),
            Err(_) => data.try_recv().ok(),
        };
        if item.is_none() {
            *done = true;
        }
        item
    }
}

impl<T> FusedIterator for SeqIter<T> {}

impl<T> Drop for SeqIter<T> {
    fn drop(&mut self) {
        if !self.done {
            let _ = self.demand.send(Demand::Stop);
        }
    }
}

impl SeqStop {
    /// Stop the producer and wait for its thread to finish.
    pub fn stop(mut self) {
        let _ = self.demand.send(Demand::Stop);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Sequence producer thread could not be joined.");
            }
        }
    }
}

impl Drop for SeqStop {
    fn drop(&mut self) {
        if self.handle.is_some() {
            let _ = self.demand.send(Demand::Stop);
        }
    }
}

/// Export an iterator as a push-style sequence: a function that passes each value to a callback
/// until the values run out or the callback returns `false`.
pub fn into_seq<I>(iter: I) -> impl FnOnce(&mut dyn FnMut(I::Item) -> bool)
where
    I: IntoIterator,
{
    move |yield_value: &mut dyn FnMut(I::Item) -> bool| {
        for item in iter {
            if !yield_value(item) {
                break;
            }
        }
    }
}
