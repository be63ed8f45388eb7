//! Ticker - once-per-period "time advanced" notifications
//!
//! A background thread pushes ticks into a single-slot channel and wakes the
//! event loop. The thread never touches face state; the event loop drains the
//! channel and repaints. Full slots coalesce, since every repaint samples the
//! clock afresh.

use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError, TrySendError};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Period between ticks
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);

/// Marker sent for each period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick;

/// Something that gets the rendering thread to look at its queue
pub trait Waker: Send + 'static {
    /// Returns false once the target is gone, which ends the ticker
    fn wake(&self) -> bool;
}

impl Waker for nannou::app::Proxy {
    fn wake(&self) -> bool {
        self.wakeup().is_ok()
    }
}

impl<F> Waker for F
where
    F: Fn() -> bool + Send + 'static,
{
    fn wake(&self) -> bool {
        self()
    }
}

/// Receiving end, owned by the rendering thread
#[derive(Debug)]
pub struct TickReceiver {
    rx: Receiver<Tick>,
}

impl TickReceiver {
    /// Consume every pending tick without blocking
    pub fn drain(&self) -> usize {
        let mut count = 0;
        loop {
            match self.rx.try_recv() {
                Ok(Tick) => count += 1,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return count,
            }
        }
    }
}

type StopSignal = Arc<(Mutex<bool>, Condvar)>;

/// Handle to the ticker thread; dropping it stops and joins the thread
#[derive(Debug)]
pub struct Ticker {
    stop: StopSignal,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<W: Waker>(period: Duration, waker: W) -> io::Result<(Ticker, TickReceiver)> {
        let (tx, rx) = mpsc::sync_channel(1);
        let stop: StopSignal = Arc::new((Mutex::new(false), Condvar::new()));

        let thread_stop = Arc::clone(&stop);
        let handle = thread::Builder::new()
            .name("clock-ticker".into())
            .spawn(move || run(period, tx, waker, thread_stop))?;

        log::debug!("ticker started, period {:?}", period);
        Ok((
            Ticker {
                stop,
                handle: Some(handle),
            },
            TickReceiver { rx },
        ))
    }

    /// Stop the thread and wait for it. No tick is sent once this returns.
    pub fn shutdown(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        let (lock, cvar) = &*self.stop;
        *lock.lock().unwrap_or_else(PoisonError::into_inner) = true;
        cvar.notify_all();

        if handle.join().is_err() {
            log::error!("ticker thread panicked");
        }
        log::debug!("ticker stopped");
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run<W: Waker>(period: Duration, tx: SyncSender<Tick>, waker: W, stop: StopSignal) {
    let (lock, cvar) = &*stop;

    loop {
        match tx.try_send(Tick) {
            Ok(()) => {
                log::trace!("tick");
                if !waker.wake() {
                    log::debug!("event loop gone, ticker exiting");
                    return;
                }
            }
            // Previous tick not consumed yet
            Err(TrySendError::Full(_)) => {}
            Err(TrySendError::Disconnected(_)) => {
                log::debug!("tick receiver dropped, ticker exiting");
                return;
            }
        }

        // Measured from after the send so a slow wake can't shorten the gap
        let next = Instant::now() + period;

        let mut stopped = lock.lock().unwrap_or_else(PoisonError::into_inner);
        loop {
            if *stopped {
                return;
            }
            let now = Instant::now();
            if now >= next {
                break;
            }
            // Early and spurious wakeups just go around again
            stopped = match cvar.wait_timeout(stopped, next - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
    }
}
