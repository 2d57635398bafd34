//! Shared test infrastructure for press-debouncer integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use heapless::{String, Vec};
use press_debouncer::{ButtonPin, Debouncer, PressEvent};

/// Longest script any test feeds through a pin
pub const MAX_SAMPLES: usize = 256;

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock pin that replays a script of `H`/`L` samples, one per read.
///
/// Once the script runs out the line reads high (released).
pub struct ScriptedPin {
    samples: Vec<bool, MAX_SAMPLES>,
    cursor: usize,
    pull_up_configured: bool,
}

impl ScriptedPin {
    pub fn new(script: &str) -> Self {
        let mut samples = Vec::new();
        for c in script.chars() {
            match c {
                'H' => samples.push(true).unwrap(),
                'L' => samples.push(false).unwrap(),
                ' ' | '_' => {}
                other => panic!("unexpected script character {other:?}"),
            }
        }

        Self {
            samples,
            cursor: 0,
            pull_up_configured: false,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn reads(&self) -> usize {
        self.cursor
    }

    pub fn pull_up_configured(&self) -> bool {
        self.pull_up_configured
    }
}

impl ButtonPin for ScriptedPin {
    fn configure_pull_up(&mut self) {
        self.pull_up_configured = true;
    }

    fn is_high(&mut self) -> bool {
        let level = self.samples.get(self.cursor).copied().unwrap_or(true);
        self.cursor += 1;
        level
    }
}

// ============================================================================
// Script Helpers
// ============================================================================

/// Builds a script from run lengths, e.g. `runs(&[('H', 3), ('L', 60)])`
pub fn runs(parts: &[(char, usize)]) -> String<MAX_SAMPLES> {
    let mut script = String::new();
    for &(c, count) in parts {
        for _ in 0..count {
            script.push(c).unwrap();
        }
    }
    script
}

/// Builds a script from the bits of `pattern`, oldest sample first
pub fn bits_script(pattern: u32, len: usize) -> String<MAX_SAMPLES> {
    let mut script = String::new();
    for i in (0..len).rev() {
        let c = if pattern & (1 << i) != 0 { 'H' } else { 'L' };
        script.push(c).unwrap();
    }
    script
}

/// Length of every maximal low run in `script`, paired with its end index
pub fn low_runs(script: &str) -> Vec<(usize, usize), MAX_SAMPLES> {
    let mut runs = Vec::new();
    let mut length = 0;
    for (i, c) in script.chars().enumerate() {
        if c == 'L' {
            length += 1;
        } else if length > 0 {
            runs.push((i - 1, length)).unwrap();
            length = 0;
        }
    }
    if length > 0 {
        runs.push((script.len() - 1, length)).unwrap();
    }
    runs
}

// ============================================================================
// Drivers
// ============================================================================

fn render(fired: impl Iterator<Item = bool>) -> String<MAX_SAMPLES> {
    let mut out = String::new();
    for f in fired {
        out.push(if f { '!' } else { '.' }).unwrap();
    }
    out
}

/// Polls `poll_short` once per scripted sample, rendering `.`/`!`
pub fn run_short(script: &str) -> String<MAX_SAMPLES> {
    let mut debouncer: Debouncer<ScriptedPin> = Debouncer::bound(ScriptedPin::new(script));
    let samples = debouncer.pin().map_or(0, ScriptedPin::len);
    render((0..samples).map(|_| debouncer.poll_short()))
}

/// Polls `poll_long` once per scripted sample, rendering `.`/`!`
pub fn run_long(script: &str) -> String<MAX_SAMPLES> {
    let mut debouncer: Debouncer<ScriptedPin> = Debouncer::bound(ScriptedPin::new(script));
    let samples = debouncer.pin().map_or(0, ScriptedPin::len);
    render((0..samples).map(|_| debouncer.poll_long()))
}

/// Polls the combined `poll` once per scripted sample
pub fn run_events(script: &str) -> Vec<Option<PressEvent>, MAX_SAMPLES> {
    let mut debouncer: Debouncer<ScriptedPin> = Debouncer::bound(ScriptedPin::new(script));
    let samples = debouncer.pin().map_or(0, ScriptedPin::len);
    let mut events = Vec::new();
    for _ in 0..samples {
        events.push(debouncer.poll()).unwrap();
    }
    events
}

/// Indices at which `output` shows a `!`
pub fn fired_at(output: &str) -> Vec<usize, MAX_SAMPLES> {
    output
        .chars()
        .enumerate()
        .filter(|&(_, c)| c == '!')
        .map(|(i, _)| i)
        .collect()
}
