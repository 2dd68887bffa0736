//! Status trace observer
//!
//! The shell shows a one-line, advisory status trace as a submission
//! moves through its phases. The trace is injected as an observer so
//! the core stays decoupled from any concrete rendering, and it must
//! never block or alter a navigation outcome.

/// Phases a status line can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPhase {
    /// A query was handed to the remote resolver.
    Submitting,
    /// The remote resolver answered with a URL.
    Resolved,
    /// The remote path failed; the local heuristic took over.
    FallingBack,
    /// The browsing surface started loading.
    Loading,
    /// The browsing surface finished loading.
    Ready,
}

impl StatusPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusPhase::Submitting => "submitting",
            StatusPhase::Resolved => "resolved",
            StatusPhase::FallingBack => "falling-back",
            StatusPhase::Loading => "loading",
            StatusPhase::Ready => "ready",
        }
    }
}

impl std::fmt::Display for StatusPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Receiver for status trace lines.
pub trait StatusSink: Send + Sync {
    fn trace(&self, phase: StatusPhase, detail: &str);
}

/// Routes status lines into the tracing subscriber.
#[derive(Debug, Default)]
pub struct TracingStatusSink;

impl StatusSink for TracingStatusSink {
    fn trace(&self, phase: StatusPhase, detail: &str) {
        tracing::info!(phase = %phase, "{}", detail);
    }
}

/// Discards every status line.
#[derive(Debug, Default)]
pub struct NullStatusSink;

impl StatusSink for NullStatusSink {
    fn trace(&self, _phase: StatusPhase, _detail: &str) {}
}
