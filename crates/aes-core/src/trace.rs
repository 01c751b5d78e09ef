//! Optional per-step snapshots of the cipher state.

use crate::block::{state_index, Block};

/// Receives a labelled copy of the state after each primitive transform.
pub trait StateTrace {
    /// Called once per transform with the resulting state.
    fn record(&mut self, label: &'static str, state: &Block);
}

/// Discards every snapshot.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl StateTrace for NoTrace {
    #[inline(always)]
    fn record(&mut self, _label: &'static str, _state: &Block) {}
}

/// Prints each snapshot to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutTrace;

impl StateTrace for StdoutTrace {
    fn record(&mut self, label: &'static str, state: &Block) {
        print!("{}", render_snapshot(label, state));
    }
}

/// Collects snapshots in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraceLog {
    /// Recorded `(label, state)` pairs in pipeline order.
    pub entries: Vec<(&'static str, Block)>,
}

impl TraceLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels in recording order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }
}

impl StateTrace for TraceLog {
    fn record(&mut self, label: &'static str, state: &Block) {
        self.entries.push((label, *state));
    }
}

/// Renders the state as four lines of row-major lowercase hex.
pub fn format_state(state: &Block) -> String {
    let mut out = String::with_capacity(4 * 9);
    for row in 0..4 {
        for col in 0..4 {
            out.push_str(&format!("{:02x}", state[state_index(row, col)]));
        }
        out.push('\n');
    }
    out
}

/// One printed snapshot: the label, the four state rows, then a blank line.
pub fn render_snapshot(label: &str, state: &Block) -> String {
    format!("{label}\n{}\n", format_state(state))
}
