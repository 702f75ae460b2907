//! Order-preserving parallel map
//!
//! Fans independent units of work out over a bounded `rayon` pool and collects
//! results in input order. A unit that panics fails the whole call.

use rayon::prelude::*;
use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// Error from a distributed map
#[derive(Debug)]
pub enum DistributeError {
    /// The worker pool could not be started
    Pool(rayon::ThreadPoolBuildError),
    /// The unit of work at `index` panicked
    WorkerPanicked { index: usize, message: String },
}

impl fmt::Display for DistributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool(e) => write!(f, "Failed to start worker pool: {e}"),
            Self::WorkerPanicked { index, message } => {
                write!(f, "Work item {index} panicked: {message}")
            }
        }
    }
}

impl std::error::Error for DistributeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Pool(e) => Some(e),
            Self::WorkerPanicked { .. } => None,
        }
    }
}

/// Number of hardware threads, at least 1
#[must_use]
pub fn available_workers() -> usize {
    thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

/// Resolve a requested worker count against the machine
///
/// Positive values are taken as-is; zero or negative values mean "all
/// available minus that many". The result is clamped to `[1, available]`.
///
/// # Examples
/// ```
/// use wordle_advisor::solver::parallel::{available_workers, resolve_workers};
///
/// let all = available_workers();
/// assert_eq!(resolve_workers(0), all);
/// assert_eq!(resolve_workers(1), 1);
/// assert_eq!(resolve_workers(isize::MAX), all);
/// assert_eq!(resolve_workers(-(all as isize) - 5), 1);
/// ```
#[must_use]
pub fn resolve_workers(requested: isize) -> usize {
    let available = available_workers();
    let wanted = if requested <= 0 {
        (available as isize).saturating_add(requested)
    } else {
        requested
    };
    wanted.clamp(1, available as isize) as usize
}

/// Apply `f` to every item on up to `workers` threads
///
/// `results[i] == f(&items[i])` regardless of completion order. Units must be
/// independent; they only see shared data through `&`.
///
/// # Errors
/// Returns `DistributeError::WorkerPanicked` naming a failing index if
/// any unit panics, or `DistributeError::Pool` if the pool cannot be built.
pub fn map_parallel<T, R, F>(f: F, items: &[T], workers: isize) -> Result<Vec<R>, DistributeError>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let threads = resolve_workers(workers);

    if threads == 1 || items.len() <= 1 {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| run_unit(&f, index, item))
            .collect();
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("scorer-{i}"))
        .build()
        .map_err(DistributeError::Pool)?;

    pool.install(|| {
        items
            .par_iter()
            .enumerate()
            .map(|(index, item)| run_unit(&f, index, item))
            .collect()
    })
}

fn run_unit<T, R, F>(f: &F, index: usize, item: &T) -> Result<R, DistributeError>
where
    F: Fn(&T) -> R,
{
    panic::catch_unwind(AssertUnwindSafe(|| f(item))).map_err(|payload| {
        DistributeError::WorkerPanicked {
            index,
            message: panic_message(payload.as_ref()),
        }
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
