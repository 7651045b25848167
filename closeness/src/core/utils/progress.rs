//! Progress notifications for long running computations.
//!
//! Progress is purely observational, a sink can never change what is computed.

use tracing::debug;

pub trait Progress {
    /// Called with the completed percentage in `[0, 100]`.
    fn update(&mut self, percent: f64);
}

/// Discards all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn update(&mut self, _percent: f64) {}
}

/// Logs every whole percent step at debug level.
#[derive(Debug, Clone)]
pub struct TracingProgress {
    label: &'static str,
    last: Option<u32>,
}

impl TracingProgress {
    pub fn new(label: &'static str) -> Self {
        Self { label, last: None }
    }
}

impl Progress for TracingProgress {
    fn update(&mut self, percent: f64) {
        let step = percent.clamp(0.0, 100.0).floor() as u32;
        if self.last != Some(step) {
            self.last = Some(step);
            debug!("{}{}%", self.label, step);
        }
    }
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn update(&mut self, percent: f64) {
        (**self).update(percent)
    }
}

#[cfg(feature = "progress")]
pub use bar::BarProgress;

#[cfg(feature = "progress")]
mod bar {
    use super::Progress;
    use crate::errors::CentralityError;
    use kdam::{Bar, BarBuilder, BarExt};

    /// Renders a terminal progress bar.
    pub struct BarProgress {
        bar: Bar,
        done: usize,
    }

    impl BarProgress {
        pub fn new(desc: String) -> Result<Self, CentralityError> {
            let bar = BarBuilder::default()
                .desc(desc)
                .animation(kdam::Animation::FillUp)
                .total(100)
                .build()
                .map_err(|err| CentralityError::ProgressBar(err.to_string()))?;
            Ok(Self { bar, done: 0 })
        }
    }

    impl Progress for BarProgress {
        fn update(&mut self, percent: f64) {
            let step = percent.clamp(0.0, 100.0).floor() as usize;
            if step > self.done {
                let _ = self.bar.update(step - self.done);
                self.done = step;
            }
        }
    }
}
