//! Progress reporting for conversation runs

use crate::output::console::ConsoleFormatter;
use colloquy_application::ports::progress::ConversationProgress;
use colloquy_domain::{Participant, Transcript, TurnReport, UsageSummary};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Mutex;

/// Turn counter with a spinner while a participant is "thinking".
///
/// Finished turns are written to stdout with the bar suspended, so the
/// transcript scrolls normally and still shows up when the bar is hidden
/// (stderr is not a terminal).
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self::with_output(Box::new(std::io::stdout()))
    }

    fn with_output(out: Box<dyn Write + Send>) -> Self {
        Self {
            bar: Mutex::new(None),
            out: Mutex::new(out),
        }
    }

    fn print_block(&self, block: &str) {
        let Ok(mut out) = self.out.lock() else {
            return;
        };
        let _ = writeln!(out, "{}", block);
        let _ = out.flush();
    }

    fn turn_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(bar) = guard.as_ref()
        {
            f(bar);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationProgress for ProgressReporter {
    fn on_run_start(&self, _participants: &[Participant], max_turns: usize) {
        let bar = ProgressBar::new(max_turns as u64);
        bar.set_style(Self::turn_style());
        bar.set_prefix("Turns");
        bar.enable_steady_tick(std::time::Duration::from_millis(120));

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(bar);
        }
    }

    fn on_turn_start(&self, _turn: usize, speaker: &Participant) {
        self.with_bar(|bar| bar.set_message(format!("{} is speaking...", speaker.name())));
    }

    fn on_turn_complete(&self, report: &TurnReport) {
        let block = ConsoleFormatter::turn(report);
        let mut printed = false;
        self.with_bar(|bar| {
            bar.suspend(|| self.print_block(&block));
            bar.inc(1);
            printed = true;
        });
        if !printed {
            self.print_block(&block);
        }
    }

    fn on_run_complete(&self, _transcript: &Transcript, _usage: Option<&UsageSummary>) {
        if let Ok(mut guard) = self.bar.lock()
            && let Some(bar) = guard.take()
        {
            bar.finish_and_clear();
        }
    }
}

/// Plain line-by-line output (no progress bar)
pub struct SimpleProgress {
    show_speaking: bool,
}

impl SimpleProgress {
    /// Turns plus an "is speaking" line before each one
    pub fn new() -> Self {
        Self {
            show_speaking: true,
        }
    }

    /// Only the turns themselves, no "is speaking" lines
    pub fn quiet() -> Self {
        Self {
            show_speaking: false,
        }
    }
}

impl ConversationProgress for SimpleProgress {
    fn on_turn_start(&self, _turn: usize, speaker: &Participant) {
        if self.show_speaking {
            println!("\n{}", ConsoleFormatter::speaking(speaker));
        }
    }

    fn on_turn_complete(&self, report: &TurnReport) {
        println!("{}", ConsoleFormatter::turn(report));
    }
}
