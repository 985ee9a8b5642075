//! Play command handler.
//!
//! Wires a console speech engine, the console highlight/control adapters
//! and a routine session together, then plays one routine. Ctrl-C is the
//! global stop: it cancels the run, the queued speech and every highlight.

use std::sync::Arc;

use anyhow::Result;
use chrono::{Datelike, Local, Weekday};
use hercycle_core::{Routine, TODAY_CONTEXT, find_routine, todays_routine};
use hercycle_voice::{
    ConsoleSpeech, PlaybackConfig, RoutineEvent, RoutineSession, RunOutcome, SpeechDriver,
    SpeechEngine,
};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::adapters::{ConsoleControl, ConsoleHighlighter};
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the play command.
#[derive(Debug, Clone)]
pub struct PlayArgs {
    pub day: Option<String>,
    pub period_day: Option<u8>,
    pub pace: Option<f32>,
    pub rate: f32,
}

/// Execute the play command.
pub async fn execute(ctx: &CliContext, args: PlayArgs) -> Result<()> {
    let (routine, context) = select_routine(
        args.day.as_deref(),
        args.period_day,
        Local::now().date_naive().weekday(),
    )?;
    let pace = args.pace.unwrap_or_else(|| ctx.settings().effective_pace());

    let engine: Arc<dyn SpeechEngine> = Arc::new(ConsoleSpeech::new(pace));
    let speech = SpeechDriver::new(engine, ctx.settings().preferred_voice.clone());
    let config = PlaybackConfig::default()
        .with_pace(pace)
        .with_rate_factor(args.rate);
    let (session, events) = RoutineSession::new(
        speech,
        Arc::new(ConsoleHighlighter::new(routine.exercises.len())),
        Arc::new(ConsoleControl::default()),
        config,
    );

    println!("{} · {}  (Ctrl-C to stop)", routine.day, routine.title);
    info!(day = %routine.day, %context, pace, rate = args.rate, "Starting routine");

    let reporter = tokio::spawn(report_events(events));
    let stopper = {
        let session = session.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("Stop requested");
                session.stop();
            }
        })
    };

    let result = session.run(&routine.exercises, &context).await;

    stopper.abort();
    let _ = stopper.await;
    // Dropping the last session handle closes the event channel.
    drop(session);
    let _ = reporter.await;

    match result.map_err(CliError::from)? {
        RunOutcome::Completed => {
            println!("\n✅ Routine complete. Record it with 'hercycle log complete'.");
        }
        RunOutcome::Stopped => println!("\n⏹ Routine stopped."),
    }
    Ok(())
}

/// Resolve the routine to play and the highlight context it is shown in.
///
/// An explicit day is looked up in the catalog and shown in its listing
/// context; otherwise today's routine plays in the today context.
fn select_routine(
    day: Option<&str>,
    period_day: Option<u8>,
    weekday: Weekday,
) -> Result<(&'static Routine, String), CliError> {
    match day {
        Some(day) => {
            let routine = find_routine(day)?;
            Ok((routine, routine.context()))
        }
        None => Ok((todays_routine(weekday, period_day), TODAY_CONTEXT.to_string())),
    }
}

async fn report_events(mut events: mpsc::UnboundedReceiver<RoutineEvent>) {
    while let Some(event) = events.recv().await {
        match event {
            RoutineEvent::ExerciseStarted { index, name, mode } => {
                info!(index, %name, %mode, "Exercise started");
            }
            RoutineEvent::Finished { outcome } => info!(?outcome, "Routine finished"),
            other => debug!(?other, "Routine event"),
        }
    }
}
