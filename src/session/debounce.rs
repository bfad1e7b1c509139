// Copyright 2025 dentsusoken
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

use log::trace;
use std::sync::mpsc::{RecvTimeoutError, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Collapses bursts of calls into one callback with the latest value.
///
/// The callback runs on a worker thread once `wait` has passed without a
/// new call. A value still pending when the debouncer is dropped is
/// discarded.
pub struct Debouncer<T: Send + 'static> {
    sender: Option<Sender<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(T) + Send + 'static,
    {
        let (sender, receiver) = channel::<T>();

        let worker = thread::spawn(move || {
            while let Ok(mut latest) = receiver.recv() {
                loop {
                    match receiver.recv_timeout(wait) {
                        Ok(newer) => latest = newer,
                        Err(RecvTimeoutError::Timeout) => {
                            trace!("Debounce window of {wait:?} elapsed");
                            callback(latest);
                            break;
                        }
                        Err(RecvTimeoutError::Disconnected) => return,
                    }
                }
            }
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
        }
    }

    /// Record a new value and restart the quiet window.
    pub fn call(&self, value: T) {
        if let Some(ref sender) = self.sender {
            // The worker only exits once the sender is gone
            let _ = sender.send(value);
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_burst_fires_once_with_last_value() {
        let (tx, rx) = mpsc::channel();
        let debouncer = Debouncer::new(Duration::from_millis(50), move |v: String| {
            tx.send(v).unwrap();
        });

        debouncer.call("c".to_string());
        debouncer.call("co".to_string());
        debouncer.call("con".to_string());

        let fired = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(fired, "con");
        assert!(rx.recv_timeout(Duration::from_millis(150)).is_err());
    }

    #[test]
    fn test_separate_bursts_fire_separately() {
        let (tx, rx) = mpsc::channel();
        let debouncer = Debouncer::new(Duration::from_millis(20), move |v: u32| {
            tx.send(v).unwrap();
        });

        debouncer.call(1);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 1);

        debouncer.call(2);
        assert_eq!(rx.recv_timeout(Duration::from_secs(2)).unwrap(), 2);
    }

    #[test]
    fn test_drop_discards_pending_value() {
        let (tx, rx) = mpsc::channel();
        let debouncer = Debouncer::new(Duration::from_secs(5), move |v: u32| {
            let _ = tx.send(v);
        });

        debouncer.call(1);
        drop(debouncer);

        assert!(rx.try_recv().is_err());
    }
}
