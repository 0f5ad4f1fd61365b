//! Work partitioning across worker threads
//!
//! A pass over `N` independent rows is spread over a fixed number of scoped
//! OS threads. Workers share one [`WorkCursor`] and repeatedly claim the next
//! unprocessed index until the range is exhausted, so faster workers simply
//! take more rows.
//!
//! # Guarantees
//!
//! - `threads == 1` runs on the calling thread without spawning.
//! - Otherwise exactly `threads` workers are spawned and all of them are
//!   joined before the call returns.
//! - A panic in any worker (including the single-threaded path) is reported
//!   as [`ResampleError::WorkerPanicked`]. Remaining workers are not
//!   cancelled; the pass result is simply discarded by the caller.

use crate::{ResampleError, ResampleResult};
use log::{trace, warn};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use std::thread;

/// Shared claim counter for one pass.
///
/// Lives exactly as long as the pass that created it.
#[derive(Debug)]
pub struct WorkCursor {
    next: AtomicUsize,
    total: usize,
}

impl WorkCursor {
    /// Create a cursor over `0..total`.
    pub fn new(total: u32) -> Self {
        Self {
            next: AtomicUsize::new(0),
            total: total as usize,
        }
    }

    /// Claim the next unprocessed index, or `None` once the range is exhausted.
    ///
    /// Every index in `0..total` is returned exactly once across all callers.
    #[inline]
    pub fn claim(&self) -> Option<u32> {
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        (index < self.total).then_some(index as u32)
    }
}

fn drain<F>(cursor: &WorkCursor, work: &F)
where
    F: Fn(u32) + Sync,
{
    while let Some(index) = cursor.claim() {
        work(index);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn worker_panicked(payload: Box<dyn Any + Send>) -> ResampleError {
    let message = panic_message(payload.as_ref());
    warn!("resampling pass failed: worker panicked: {message}");
    ResampleError::WorkerPanicked { message }
}

/// Run `work` once for every index in `0..total`, spread over `threads` workers.
///
/// # Arguments
///
/// * `total` - Number of independent work items
/// * `threads` - Number of workers (1 = run on the calling thread)
/// * `work` - Per-index operation; must touch only state owned by that index
///
/// # Errors
///
/// - [`ResampleError::InvalidThreadCount`] if `threads == 0`
/// - [`ResampleError::WorkerPanicked`] if any invocation of `work` panicked
/// - [`ResampleError::Spawn`] if a worker thread could not be started
pub fn for_each_index<F>(total: u32, threads: u32, work: F) -> ResampleResult<()>
where
    F: Fn(u32) + Sync,
{
    if threads == 0 {
        return Err(ResampleError::InvalidThreadCount(threads));
    }

    let cursor = WorkCursor::new(total);

    if threads == 1 {
        return panic::catch_unwind(AssertUnwindSafe(|| drain(&cursor, &work)))
            .map_err(worker_panicked);
    }

    trace!("spawning {threads} workers over {total} indices");
    thread::scope(|s| {
        let mut handles = Vec::with_capacity(threads as usize);
        let mut spawn_error = None;
        for i in 0..threads {
            let spawned = thread::Builder::new()
                .name(format!("texscale-worker-{i}"))
                .spawn_scoped(s, || drain(&cursor, &work));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        // Join barrier: every worker finishes before anything is reported
        let mut first_panic = None;
        for handle in handles {
            if let Err(payload) = handle.join() {
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            return Err(worker_panicked(payload));
        }
        if let Some(e) = spawn_error {
            return Err(ResampleError::Spawn(e));
        }
        Ok(())
    })
}

/// Run `work` for every row of a row-major buffer, spread over `threads` workers.
///
/// Each row is handed out as an exclusive `&mut [u32]`, so no output pixel is
/// ever written by two workers. The per-row `Mutex` only moves that `&mut`
/// borrow safely into whichever worker claims the row; the cursor hands out
/// each row once, so no lock is ever waited on.
///
/// # Panics
///
/// Panics if `width == 0`.
pub fn for_each_row<F>(out: &mut [u32], width: u32, threads: u32, work: F) -> ResampleResult<()>
where
    F: Fn(u32, &mut [u32]) + Sync,
{
    debug_assert_eq!(out.len() % width as usize, 0);
    let rows: Vec<Mutex<&mut [u32]>> = out.chunks_mut(width as usize).map(Mutex::new).collect();
    for_each_index(rows.len() as u32, threads, |y| {
        let mut row = rows[y as usize]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        work(y, &mut row[..]);
    })
}
