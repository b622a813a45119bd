use uuid::Uuid;

/// Which fallback chain an attempt belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataKind {
    Quote,
    Chart,
    Analysis,
}

impl DataKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataKind::Quote => "quote",
            DataKind::Chart => "chart",
            DataKind::Analysis => "analysis",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Provider returned a result satisfying the kind's validity predicate.
    Success,
    /// Provider failed; detail is the truncated error text.
    Failure(String),
    /// Provider constructed without its credential; never called.
    Skipped,
}

/// One provider attempt inside an orchestrator invocation. Emitted on every
/// attempt so any logging or metrics sink can observe chain behavior without
/// the orchestrator knowing about the sink.
#[derive(Clone, Debug)]
pub struct AttemptEvent {
    /// Correlates all attempts of one orchestrator invocation.
    pub request_id: Uuid,
    pub kind: DataKind,
    pub provider: &'static str,
    pub outcome: AttemptOutcome,
    pub latency_ms: u64,
}

// Global Event Enum
#[derive(Clone, Debug)]
pub enum Event {
    Attempt(AttemptEvent),
}
