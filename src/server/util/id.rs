//! Process-local unique identifier generator.
//!
//! Identifiers combine the current Unix time in milliseconds with a sequence number
//! so they keep increasing across restarts. Within one process, the mutex-guarded
//! state guarantees no two callers receive the same value.

use chrono::Utc;
use std::sync::Mutex;

/// Bits reserved for the per-millisecond sequence.
const SEQUENCE_BITS: u32 = 12;
const SEQUENCE_MASK: u64 = (1 << SEQUENCE_BITS) - 1;

struct IdState {
    last_millis: u64,
    sequence: u64,
}

static STATE: Mutex<IdState> = Mutex::new(IdState {
    last_millis: 0,
    sequence: 0,
});

/// Returns the next unique identifier for this process.
///
/// When more than 4096 identifiers are requested in one millisecond, or the clock
/// goes backwards, the timestamp component is advanced past the last value issued.
pub fn next_unique_id() -> u64 {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    let mut state = STATE.lock().unwrap_or_else(|e| e.into_inner());

    if now > state.last_millis {
        state.last_millis = now;
        state.sequence = 0;
    } else {
        state.sequence += 1;
        if state.sequence > SEQUENCE_MASK {
            state.last_millis += 1;
            state.sequence = 0;
        }
    }

    (state.last_millis << SEQUENCE_BITS) | state.sequence
}

/// Formats a certificate number such as `CH-018F2A3B4C5D6`.
pub fn certificate_number() -> String {
    format!("CH-{:013X}", next_unique_id())
}
