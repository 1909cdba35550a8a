//! Progress reports of a running search and isolation of caller-supplied callbacks.

use std::any::Any;
use std::error::Error;
use std::panic::{self, AssertUnwindSafe};

use model::base_types::Score;
use serde::Serialize;
use thiserror::Error;

pub type CallbackError = Box<dyn Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub iteration: usize,
    pub score: Score,
    pub best_score: Score,
    pub temperature: Option<f64>, // annealing only
}

pub trait ProgressObserver {
    fn observe(&mut self, progress: &Progress) -> Result<(), CallbackError>;
}

impl<F> ProgressObserver for F
where
    F: FnMut(&Progress) -> Result<(), CallbackError>,
{
    fn observe(&mut self, progress: &Progress) -> Result<(), CallbackError> {
        self(progress)
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn observe(&mut self, _progress: &Progress) -> Result<(), CallbackError> {
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CallbackFailure {
    #[error("progress callback returned an error at iteration {iteration}: {message}")]
    Returned { iteration: usize, message: String },

    #[error("progress callback panicked at iteration {iteration}: {message}")]
    Panicked { iteration: usize, message: String },
}

/// Invokes the observer, converting an error or a panic into a CallbackFailure.
pub(crate) fn notify<O: ProgressObserver>(
    observer: &mut O,
    progress: &Progress,
) -> Result<(), CallbackFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| observer.observe(progress))) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(error)) => Err(CallbackFailure::Returned {
            iteration: progress.iteration,
            message: error.to_string(),
        }),
        Err(payload) => Err(CallbackFailure::Panicked {
            iteration: progress.iteration,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic payload")
    }
}
