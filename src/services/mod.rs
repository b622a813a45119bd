pub mod analysis;
pub mod charts;
pub mod quotes;


use std::time::Instant;
use uuid::Uuid;

use crate::bus::EventBus;
use crate::events::{AttemptEvent, AttemptOutcome, DataKind, Event};

/// Publish one attempt observation. Best-effort: no subscriber means the
/// event is dropped, never an error on the request path.
pub(crate) fn record_attempt(
    bus: &EventBus,
    request_id: Uuid,
    kind: DataKind,
    provider: &'static str,
    outcome: AttemptOutcome,
    started: Instant,
) {
    let latency_ms = started.elapsed().as_millis() as u64;
    bus.publish(Event::Attempt(AttemptEvent {
        request_id,
        kind,
        provider,
        outcome,
        latency_ms,
    }))
    .ok();
}
