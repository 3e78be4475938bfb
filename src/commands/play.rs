//! `algotrace play` - replay a trace in the terminal
//!
//! Steps are printed as the playback controller applies them. Ctrl-C
//! pauses playback and exits cleanly at the current step.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use algotrace_core::error::{Result, TraceError};
use algotrace_core::playback::{Clock, Frame, PlaybackController, Renderer, SystemClock};

use crate::cli::{Cli, OutputFormat, PlayArgs};
use crate::commands::dispatch::CommandContext;
use crate::commands::trace::human::print_step;
use crate::commands::trace::records::step_lines;
use crate::commands::trace::run_trace;

/// Prints each applied frame in the selected output format
struct TerminalRenderer<'a> {
    cli: &'a Cli,
    total: usize,
}

impl Renderer for TerminalRenderer<'_> {
    fn render(&mut self, frame: &Frame<'_>) {
        match self.cli.format {
            OutputFormat::Human => {
                println!("[{}/{}]", frame.index + 1, self.total);
                print_step(self.cli, frame.step);
            }
            OutputFormat::Json => {
                let line = serde_json::json!({ "index": frame.index, "step": frame.step });
                println!("{}", line);
            }
            OutputFormat::Records => {
                for line in step_lines(frame.step) {
                    println!("{}", line);
                }
            }
        }
    }

    fn reset(&mut self) {
        if self.cli.format == OutputFormat::Human && !self.cli.quiet {
            println!("-- restarting from the first step --");
        }
    }
}

pub fn execute(ctx: &CommandContext, args: &PlayArgs) -> Result<()> {
    let cli = ctx.cli;
    let run = run_trace(ctx, &args.run)?;
    let delay = Duration::from_millis(args.delay_ms.unwrap_or(ctx.config.playback_delay_ms));
    let total = run.trace.len();

    if cli.format == OutputFormat::Records {
        println!(
            "H algotrace=1 records=1 graph={} mode=play algo={} start={} steps={}",
            run.graph,
            run.algorithm,
            run.start.as_deref().unwrap_or("-"),
            total
        );
    }
    if total == 0 {
        if cli.format == OutputFormat::Human && !cli.quiet {
            println!("Graph has no vertices; nothing to play");
        }
        return Ok(());
    }

    let stop = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&stop);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .map_err(|e| TraceError::Other(format!("failed to install Ctrl-C handler: {}", e)))?;

    let renderer = TerminalRenderer { cli, total };
    let mut controller = PlaybackController::new(run.trace, renderer, delay);
    if let Some(index) = args.seek {
        controller.seek(index);
    }

    let clock = SystemClock;
    controller.play(clock.now());
    controller.drive(&clock, &stop);

    let position = controller.current().map_or(0, |i| i + 1);
    tracing::debug!(position, total, interrupted = stop.load(Ordering::SeqCst), "play_done");
    if cli.format == OutputFormat::Human && !cli.quiet {
        if stop.load(Ordering::SeqCst) {
            println!("paused at step {} of {}", position, total);
        } else {
            println!("finished: {} of {} steps", position, total);
        }
    }
    Ok(())
}
