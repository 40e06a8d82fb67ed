//! Parallel evaluation over a [`Sequence`].
//!
//! Two primitives, both blocking until all work is done:
//!
//! - **Unbounded map** ([`Sequence::select_par`]): one rayon task per element. Each result
//!   is written into a shared slot vector under a single mutex at its input index, so the
//!   output order always matches the input order.
//! - **Bounded execution** ([`Sequence::for_each_bounded`]): a single producer thread
//!   streams elements into a small bounded buffer and `limit` worker threads drain it,
//!   running a side-effecting action. No ordering guarantee between elements.
//!
//! # Failure policy
//!
//! Panics propagate. A panicking unit does not cancel its siblings: every unit already
//! scheduled runs to completion, then the panic is resumed on the caller and no partial
//! result is returned. In bounded execution a panicking worker stops pulling, the
//! remaining workers keep draining, and if every worker is gone the producer notices the
//! disconnect and stops. Use [`Sequence::try_select_par`] to get failures back as values.
//!
//! There is no cancellation or timeout.

use crate::error::Result;
use crate::Sequence;
use crossbeam_channel::bounded;
use std::sync::{Mutex, PoisonError};

/// Default capacity of the buffer between producer and workers in bounded execution.
pub const DEFAULT_BUFFER: usize = 5;

/// Knobs for the parallel primitives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parallelism {
    /// Dedicated pool size for [`Sequence::select_par_with`]. `None` uses rayon's global pool.
    pub threads: Option<usize>,
    /// Buffer capacity between producer and workers in bounded execution.
    pub buffer: usize,
}

impl Default for Parallelism {
    fn default() -> Self {
        Self {
            threads: None,
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl Parallelism {
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    #[must_use]
    pub const fn with_buffer(mut self, buffer: usize) -> Self {
        self.buffer = buffer;
        self
    }
}

/// Worker count used by [`Sequence::for_each_par`]: the number of logical CPUs.
#[must_use]
pub fn default_limit() -> usize {
    num_cpus::get().max(1)
}

impl<T: Sync> Sequence<T> {
    /// Map every element through `f` in parallel, keeping input order in the output.
    ///
    /// One task is spawned per element on rayon's global pool. Returns once every task
    /// has finished.
    ///
    /// # Panics
    /// If `f` panics for any element, after all other tasks have finished.
    ///
    /// ```
    /// use ironlinq::Sequence;
    ///
    /// let doubled = Sequence::from([1, 2, 3, 4, 5]).select_par(|&x| 2 * x);
    /// assert_eq!(doubled.as_slice(), &[2, 4, 6, 8, 10]);
    /// ```
    pub fn select_par<O, F>(&self, f: F) -> Sequence<O>
    where
        O: Send,
        F: Fn(&T) -> O + Sync,
    {
        run_unbounded(&self.items, &f)
    }

    /// [`select_par`](Self::select_par) on a dedicated pool when `opts.threads` is set.
    ///
    /// # Errors
    /// [`SeqError::ThreadPool`](crate::SeqError::ThreadPool) if the pool cannot be built.
    pub fn select_par_with<O, F>(&self, opts: Parallelism, f: F) -> Result<Sequence<O>>
    where
        O: Send,
        F: Fn(&T) -> O + Sync + Send,
    {
        let Some(threads) = opts.threads else {
            return Ok(self.select_par(f));
        };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("ironlinq-par-{i}"))
            .build()?;
        tracing::debug!(threads, "built dedicated pool for parallel select");
        Ok(pool.install(|| run_unbounded(&self.items, &f)))
    }

    /// Fallible parallel map. Returns the first error observed instead of a sequence.
    ///
    /// Remaining elements may be skipped once an error is seen. Output order matches
    /// input order on success.
    ///
    /// # Errors
    /// Whatever `f` returned for the failing element.
    pub fn try_select_par<O, F>(&self, f: F) -> anyhow::Result<Sequence<O>>
    where
        O: Send,
        F: Fn(&T) -> anyhow::Result<O> + Sync + Send,
    {
        use rayon::prelude::*;
        let out = self
            .items
            .par_iter()
            .map(&f)
            .collect::<anyhow::Result<Vec<O>>>()?;
        Ok(Sequence::new(out))
    }

    /// Run `action` on every element with at most `limit` workers active at once.
    ///
    /// A producer thread enumerates the sequence once into a buffer of
    /// [`DEFAULT_BUFFER`] slots; `limit` workers drain it until it is closed and empty.
    /// Blocks until the producer is done and every worker has exited. A `limit` of zero
    /// is treated as one.
    ///
    /// # Panics
    /// If `action` panics, once all threads have been joined.
    ///
    /// ```
    /// use ironlinq::Sequence;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    ///
    /// let total = AtomicI32::new(0);
    /// Sequence::from([1, 2, 3, 4, 5]).for_each_bounded(3, |&x| {
    ///     total.fetch_add(2 * x, Ordering::Relaxed);
    /// });
    /// assert_eq!(total.into_inner(), 30);
    /// ```
    pub fn for_each_bounded<F>(&self, limit: usize, action: F)
    where
        F: Fn(&T) + Sync,
    {
        run_bounded(&self.items, limit, DEFAULT_BUFFER, &action);
    }

    /// [`for_each_bounded`](Self::for_each_bounded) with the buffer size taken from `opts`.
    pub fn for_each_bounded_with<F>(&self, limit: usize, opts: Parallelism, action: F)
    where
        F: Fn(&T) + Sync,
    {
        run_bounded(&self.items, limit, opts.buffer, &action);
    }

    /// [`for_each_bounded`](Self::for_each_bounded) with one worker per logical CPU.
    pub fn for_each_par<F>(&self, action: F)
    where
        F: Fn(&T) + Sync,
    {
        run_bounded(&self.items, default_limit(), DEFAULT_BUFFER, &action);
    }
}

/// One task per element; results land in index-addressed slots behind one lock.
fn run_unbounded<T, O, F>(items: &[T], f: &F) -> Sequence<O>
where
    T: Sync,
    O: Send,
    F: Fn(&T) -> O + Sync,
{
    let n = items.len();
    let slots: Mutex<Vec<Option<O>>> = Mutex::new((0..n).map(|_| None).collect());
    tracing::trace!(units = n, "spawning parallel select");

    rayon::scope(|s| {
        for (i, t) in items.iter().enumerate() {
            let slots = &slots;
            s.spawn(move |_| {
                let out = f(t);
                slots.lock().unwrap_or_else(PoisonError::into_inner)[i] = Some(out);
            });
        }
    });

    let filled: Vec<O> = slots
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner)
        .into_iter()
        .flatten()
        .collect();
    debug_assert_eq!(filled.len(), n, "every unit writes its slot before the scope ends");
    tracing::trace!(units = n, "parallel select complete");
    Sequence::new(filled)
}

/// Single producer, `limit` consumers, `buffer`-slot channel in between.
fn run_bounded<T, F>(items: &[T], limit: usize, buffer: usize, action: &F)
where
    T: Sync,
    F: Fn(&T) + Sync,
{
    let workers = if limit == 0 {
        tracing::warn!("bounded execution requested with limit 0; using a single worker");
        1
    } else {
        limit
    };
    let (tx, rx) = bounded::<&T>(buffer);
    tracing::trace!(workers, buffer, len = items.len(), "starting bounded execution");

    let panicked = std::thread::scope(|s| {
        let mut handles = Vec::with_capacity(workers + 1);
        handles.push(s.spawn(move || {
            for (sent, t) in items.iter().enumerate() {
                if tx.send(t).is_err() {
                    tracing::debug!(sent, "all workers gone; producer stopping");
                    return;
                }
            }
            tracing::trace!("producer done; closing buffer");
        }));

        for worker in 0..workers {
            let rx = rx.clone();
            handles.push(s.spawn(move || {
                let mut processed = 0usize;
                for t in rx.iter() {
                    action(t);
                    processed += 1;
                }
                tracing::trace!(worker, processed, "worker drained");
            }));
        }
        drop(rx);

        // explicit joins keep the first panic payload intact
        handles
            .into_iter()
            .fold(None, |first, h| first.or(h.join().err()))
    });

    if let Some(payload) = panicked {
        tracing::error!("bounded execution: action panicked; resuming on caller");
        std::panic::resume_unwind(payload);
    }
}
