//! Order-preserving concurrent evaluation.
//!
//! [`fan_out`] runs one blocking task per index and gathers the results through a
//! [`Slots`] buffer, so the output is always in index order no matter which task
//! finishes first. Rendering and concurrent tabulation are both built on it.
//! [`Renderer`] is the blocking front-end: it owns a runtime and blocks the calling
//! thread until every conversion has completed.

use std::sync::Arc;
use anyhow::Context;

use crate::config::RenderConfiguration;
use crate::mpmc::slots::Slots;
use crate::sequence::{traits::Render, Sequence};

/// Evaluates `job(0)`, `job(1)`, ..., `job(count - 1)` concurrently and returns the
/// results in index order.
///
/// - `count == 0` returns immediately without spawning anything.
/// - Every job runs on the runtime's blocking pool, since jobs are synchronous and may
///   block.
/// - The function waits for all jobs (full barrier) before reading any result.
/// - A panic inside `job` is re-raised here once all jobs have finished.
///
/// Must be polled inside a tokio runtime.
pub(crate) async fn fan_out<R, F>(count: usize, job: F) -> Vec<R>
where
    R: Send + 'static,
    F: Fn(usize) -> R + Send + Sync + 'static,
{
    if count == 0 {
        return Vec::new();
    }

    tracing::debug!(count, "fan-out started");
    let slots = Slots::<R>::allocate(count);
    let job = Arc::new(job);

    let handles: Vec<_> = (0..count).map(|index| {
        let slots = Arc::clone(&slots);
        let job = Arc::clone(&job);
        tokio::task::spawn_blocking(move || {
            slots.write(index, (*job)(index));
            tracing::trace!(index, "slot written");
        })
    }).collect();

    let results = futures::future::join_all(handles).await;
    for result in results {
        if let Err(error) = result {
            if error.is_panic() {
                std::panic::resume_unwind(error.into_panic());
            }
            panic!("Invariant violation: fan-out task cancelled before completion: {}", error);
        }
    }

    tracing::debug!(count, filled = slots.filled(), "fan-in complete");
    slots.collect()
}

/// ### -> `Renderer` - blocking, order-preserving string rendering.
///
/// A `Renderer` owns a multi-thread tokio runtime configured from a
/// [`RenderConfiguration`] and exposes rendering as a plain blocking call. The calling
/// thread is suspended until all element conversions have completed; no partial result
/// is ever observable.
///
/// There is no cancellation or timeout: a converter that never returns makes the call
/// hang.
///
/// `Renderer::render` must not be called from inside an async context (tokio refuses
/// to block a runtime thread on another runtime). Use
/// [`Render::render`](crate::sequence::traits::Render::render) there instead.
///
/// Dropping a `Renderer` never blocks: its runtime is shut down in the background, so
/// it may be dropped anywhere, including inside another runtime's tasks.
///
/// ### -> `Usage`
///
/// ```
/// use sequin::prelude::*;
///
/// fn example() -> anyhow::Result<()> {
///     let renderer = Renderer::new(RenderConfiguration::default().with_worker_threads(2))?;
///     let sequence = Sequence::from_slice(&[1, 2, 3]);
///
///     assert_eq!(renderer.render(&sequence, |element: &i32| element.to_string()), "1, 2, 3");
///     assert_eq!(renderer.render(&Sequence::<i32>::empty(), |element: &i32| element.to_string()), "");
///
///     Ok(())
/// }
///
/// example().unwrap();
/// ```
pub struct Renderer {
    // `None` only once dropped.
    runtime: Option<tokio::runtime::Runtime>,
    configuration: RenderConfiguration,
}

impl Renderer {
    pub fn new(configuration: RenderConfiguration) -> anyhow::Result<Self> {
        anyhow::ensure!(configuration.worker_threads != Some(0), "worker_threads must be greater than zero");
        anyhow::ensure!(configuration.max_blocking_threads != Some(0), "max_blocking_threads must be greater than zero");

        let mut builder = tokio::runtime::Builder::new_multi_thread();
        builder.thread_name("sequin-render");
        if let Some(worker_threads) = configuration.worker_threads {
            builder.worker_threads(worker_threads);
        }
        if let Some(max_blocking_threads) = configuration.max_blocking_threads {
            builder.max_blocking_threads(max_blocking_threads);
        }

        let runtime = builder.build().context("failed to build the rendering runtime")?;
        tracing::info!(
            worker_threads = ?configuration.worker_threads,
            max_blocking_threads = ?configuration.max_blocking_threads,
            "renderer ready"
        );

        Ok(Self { runtime: Some(runtime), configuration })
    }

    pub fn configuration(&self) -> &RenderConfiguration {
        &self.configuration
    }

    /// Converts every element with `f` concurrently and joins the results in index
    /// order with the configured separator. Blocks until all conversions finish.
    pub fn render<T, F>(&self, sequence: &Sequence<T>, f: F) -> String
    where
        T: Send + Sync + 'static,
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        match &self.runtime {
            Some(runtime) => runtime.block_on(sequence.render_with(f, &self.configuration)),
            None => unreachable!("Invariant violation: renderer used after drop."),
        }
    }
}

impl Drop for Renderer {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
            tracing::debug!("renderer shut down");
        }
    }
}

impl std::fmt::Debug for Renderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer").field("configuration", &self.configuration).finish_non_exhaustive()
    }
}
