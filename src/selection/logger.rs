//! Verbosity-gated console logging for selection progress.
//!
//! Log lines (counts selected, partition count, sample sizes) are an
//! observability hook, not part of the functional contract; the default is
//! silent so library users see nothing unless they opt in.

/// How much selection progress to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output (default).
    #[default]
    Silent,
    /// One summary line per selection call.
    Info,
    /// Per-call details: partition counts, sample budgets, chosen ids.
    Debug,
}

/// Console logger gated by a [`Verbosity`] level.
#[derive(Debug, Clone, Copy)]
pub struct SelectionLogger {
    verbosity: Verbosity,
}

impl SelectionLogger {
    /// Create a logger printing at the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Current verbosity level.
    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Print a summary line at `Info` or above.
    pub fn info(&self, msg: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Info {
            println!("{}", msg.as_ref());
        }
    }

    /// Print a detail line at `Debug` only.
    pub fn debug(&self, msg: impl AsRef<str>) {
        if self.verbosity >= Verbosity::Debug {
            println!("{}", msg.as_ref());
        }
    }
}
