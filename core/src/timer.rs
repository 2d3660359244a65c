use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};

/// Engine-facing surface of the timer collaborator. The engine only ever
/// starts and stops it; tick delivery back into the engine is wiring owned
/// by the embedder.
pub trait TickTimer {
    fn start(&mut self);
    fn stop(&mut self);
}

/// Timer that never ticks, for headless use and tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullTimer;

impl TickTimer for NullTimer {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}

/// Emits `0, 1, 2, ...` once per second on a channel from a background
/// thread, starting immediately with 0. `start` while already running
/// abandons the previous run; the raised stop flag suppresses its remaining
/// ticks before they are sent.
pub struct ThreadTimer {
    ticks: Sender<u32>,
    stop_flag: Option<Arc<AtomicBool>>,
}

impl ThreadTimer {
    pub fn new(ticks: Sender<u32>) -> Self {
        Self {
            ticks,
            stop_flag: None,
        }
    }
}

impl TickTimer for ThreadTimer {
    fn start(&mut self) {
        self.stop();

        let stop_flag = Arc::new(AtomicBool::new(false));
        self.stop_flag = Some(Arc::clone(&stop_flag));

        let ticks = self.ticks.clone();
        thread::spawn(move || {
            let started = Instant::now();
            for second in 0u32.. {
                if stop_flag.load(Ordering::Acquire) {
                    break;
                }
                if ticks.send(second).is_err() {
                    break;
                }
                // sleep until the next whole second since start, so drift
                // does not accumulate across ticks
                let next = Duration::from_secs(u64::from(second) + 1);
                if let Some(remaining) = next.checked_sub(started.elapsed()) {
                    thread::sleep(remaining);
                }
            }
            log::trace!("timer thread exiting");
        });
    }

    fn stop(&mut self) {
        if let Some(stop_flag) = self.stop_flag.take() {
            stop_flag.store(true, Ordering::Release);
        }
    }
}

impl Drop for ThreadTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
