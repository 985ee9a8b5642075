//! Integration tests for `RoutinePlayer` narration.
//!
//! The player is driven against a recording engine on a paused clock, so
//! every pause and tick completes instantly while keeping its virtual
//! duration measurable.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{RecordingEngine, RecordingHighlighter, counts, exercise};
use hercycle_core::{ExecutionMode, Exercise, TODAY_CONTEXT};
use hercycle_voice::routine::script;
use hercycle_voice::{
    Cadence, PlaybackConfig, RoutineEvent, RoutinePlayer, RunOutcome, SpeechDriver,
    interval_count,
};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

// ── Helpers ────────────────────────────────────────────────────────

fn player(engine: &Arc<RecordingEngine>, highlighter: &Arc<RecordingHighlighter>) -> RoutinePlayer {
    RoutinePlayer::new(
        SpeechDriver::new(engine.clone(), None),
        highlighter.clone(),
        PlaybackConfig::default(),
    )
}

async fn play(exercises: &[Exercise]) -> (Vec<String>, RunOutcome) {
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();
    let outcome = player(&engine, &highlighter)
        .play(exercises, TODAY_CONTEXT, &CancellationToken::new())
        .await;
    (engine.texts(), outcome)
}

/// Texts spoken after `from` and before `to` (both exclusive).
fn between(texts: &[String], from: &str, to: &str) -> Vec<String> {
    let start = texts.iter().position(|t| t == from).unwrap() + 1;
    let end = start + texts[start..].iter().position(|t| t == to).unwrap();
    texts[start..end].to_vec()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

// ── Interval counter ───────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn interval_count_announces_multiples_of_five() {
    let engine = RecordingEngine::new();
    let driver = SpeechDriver::new(engine.clone(), None);

    let start = Instant::now();
    interval_count(&driver, 23, 1.2, Cadence::default(), &CancellationToken::new()).await;
    let elapsed = start.elapsed();

    assert_eq!(engine.texts(), strings(&["5", "10", "15", "20"]));
    assert!(engine.spoken().iter().all(|s| (s.rate - 1.2).abs() < 1e-6));
    let last = engine.spoken()[3].at;
    assert!(last >= Duration::from_secs(20) && last < Duration::from_millis(20_100));
    // 23 ticks plus the one-second grace.
    assert!(elapsed >= Duration::from_secs(24) && elapsed < Duration::from_millis(24_100));
    // Each announcement cuts off the previous utterance.
    assert_eq!(engine.cancels(), 4);
}

#[tokio::test(start_paused = true)]
async fn interval_count_stops_at_next_tick() {
    let engine = RecordingEngine::new();
    let driver = SpeechDriver::new(engine.clone(), None);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(7500)).await;
        trigger.cancel();
    });

    let start = Instant::now();
    interval_count(&driver, 30, 1.2, Cadence::default(), &cancel).await;

    assert_eq!(engine.texts(), strings(&["5"]));
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_secs(8) && elapsed < Duration::from_millis(8100));
}

// ── Filtering and highlighting ─────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn walks_are_skipped_without_renumbering() {
    let exercises = vec![
        exercise("Warm-up Walk", "-", "-", "5 min", "-"),
        exercise("Bodyweight Squats", "1", "1", "-", "-"),
        exercise("Brisk WALK", "-", "-", "-", "-"),
        exercise("Plank", "1", "1", "5 sec", "-"),
    ];
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();

    player(&engine, &highlighter)
        .play(&exercises, "routine-tuesday", &CancellationToken::new())
        .await;

    let ctx = "routine-tuesday".to_string();
    assert_eq!(
        highlighter.calls(),
        vec![
            (1, true, ctx.clone()),
            (1, false, ctx.clone()),
            (3, true, ctx.clone()),
            (3, false, ctx),
        ]
    );
    assert!(!engine.texts().iter().any(|t| t.to_lowercase().contains("walk")));
}

#[tokio::test(start_paused = true)]
async fn missing_highlight_target_is_ignored() {
    let exercises = vec![exercise("Plank", "1", "1", "5 sec", "-")];
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::missing(&[0]);

    let outcome = player(&engine, &highlighter)
        .play(&exercises, TODAY_CONTEXT, &CancellationToken::new())
        .await;

    assert_eq!(outcome, RunOutcome::Completed);
    assert!(highlighter.calls().is_empty());
    assert_eq!(engine.texts().last().unwrap(), script::CLOSING);
}

// ── Modes ──────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn standard_rep_narration_and_timing() {
    let exercises = vec![exercise("Bodyweight Squats", "1", "2", "-", "-")];
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();

    let outcome = player(&engine, &highlighter)
        .play(&exercises, TODAY_CONTEXT, &CancellationToken::new())
        .await;

    assert_eq!(outcome, RunOutcome::Completed);
    assert_eq!(
        engine.texts(),
        strings(&[
            script::INTRO,
            "Next movement... Bodyweight Squats",
            script::STANDARD_REP_READY,
            "Lower down slowly...",
            "And... Up. 1",
            "Lower down slowly...",
            "And... Up. 2",
            script::CLOSING,
        ])
    );

    // intro 1 s + announce 2 s + ready 1 s + two reps of 2 × 1.5 s.
    let closing = engine.spoken().last().unwrap().at;
    assert!(closing >= Duration::from_secs(10) && closing < Duration::from_millis(10_100));
}

#[tokio::test(start_paused = true)]
async fn rep_and_hold_counts_each_hold() {
    let (texts, _) = play(&[exercise("Pelvic Tilts", "1", "2", "5 sec", "-")]).await;

    assert_eq!(
        between(&texts, "Next movement... Pelvic Tilts", script::CLOSING),
        strings(&[
            script::REP_HOLD_READY,
            "Tilt pelvis up...... and Hold.",
            "5",
            "Release.",
            "Tilt pelvis up...... and Hold.",
            "5",
            "Release.",
        ])
    );
}

#[tokio::test(start_paused = true)]
async fn static_hold_repeats_per_set() {
    let (texts, _) = play(&[exercise("Plank", "2", "1", "20 sec", "-")]).await;

    let hold = [script::STATIC_HOLD_READY, "5", "10", "15", "20", script::STATIC_HOLD_RELEASE];
    let mut expected = vec!["Set 1"];
    expected.extend(hold);
    expected.push("Set 2");
    expected.extend(hold);

    assert_eq!(
        between(&texts, "Next movement... Plank", script::CLOSING),
        strings(&expected)
    );
}

#[tokio::test(start_paused = true)]
async fn cat_cow_defaults_to_ten_rounds() {
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();
    player(&engine, &highlighter)
        .play(
            &[exercise("Cat–Cow Pose", "1", "-", "-", "-")],
            TODAY_CONTEXT,
            &CancellationToken::new(),
        )
        .await;

    let spoken = engine.spoken();
    let inhales: Vec<_> = spoken.iter().filter(|s| s.text == script::INHALE).collect();
    assert_eq!(inhales.len(), 10);
    assert!(inhales.iter().all(|s| (s.rate - 0.85).abs() < 1e-6));
    assert_eq!(
        spoken.iter().filter(|s| s.text == script::EXHALE).count(),
        10
    );
    assert_eq!(
        spoken.iter().filter(|s| s.text == script::CAT_COW_SETUP).count(),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn noop_exercise_only_announces_sets() {
    let (texts, _) = play(&[exercise("Light Massage", "2", "-", "-", "-")]).await;

    assert_eq!(
        between(&texts, "Next movement... Light Massage", script::CLOSING),
        strings(&["Set 1", "Set 2"])
    );
}

// ── Rest ───────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn short_rest_counts_every_second() {
    let (texts, _) = play(&[
        exercise("Light Massage", "1", "-", "-", "8 sec"),
        exercise("Plank", "1", "1", "5 sec", "-"),
    ])
    .await;

    assert_eq!(
        between(&texts, script::REST, "Next movement... Plank"),
        strings(&["1", "2", "3", "4", "5", "6", "7", "8"])
    );
}

#[tokio::test(start_paused = true)]
async fn long_rest_counts_in_fives() {
    let (texts, _) = play(&[
        exercise("Light Massage", "1", "-", "-", "30 sec"),
        exercise("Bodyweight Squats", "1", "1", "-", "-"),
    ])
    .await;

    assert_eq!(
        between(&texts, script::REST, "Next movement... Bodyweight Squats"),
        strings(&["5", "10", "15", "20", "25", "30"])
    );
}

#[tokio::test(start_paused = true)]
async fn ten_second_rest_still_counts_every_second() {
    let (texts, _) = play(&[
        exercise("Light Massage", "1", "-", "-", "10 sec"),
        exercise("Plank", "1", "1", "5 sec", "-"),
    ])
    .await;

    assert_eq!(
        between(&texts, script::REST, "Next movement... Plank"),
        strings(&["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"])
    );
}

#[tokio::test(start_paused = true)]
async fn eleven_second_rest_switches_to_interval_count() {
    let (texts, _) = play(&[
        exercise("Light Massage", "1", "-", "-", "11 sec"),
        exercise("Bodyweight Squats", "1", "1", "-", "-"),
    ])
    .await;

    assert_eq!(
        between(&texts, script::REST, "Next movement... Bodyweight Squats"),
        strings(&["5", "10"])
    );
}

#[tokio::test(start_paused = true)]
async fn no_rest_after_final_set_of_final_exercise() {
    let (texts, _) = play(&[exercise("Light Massage", "2", "-", "-", "8 sec")]).await;

    assert_eq!(texts.iter().filter(|t| *t == script::REST).count(), 1);
    assert_eq!(counts(&texts).len(), 8);
    assert_eq!(texts.last().unwrap(), script::CLOSING);
}

// ── Failures and events ────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn speech_failure_does_not_abort_run() {
    let engine = RecordingEngine::failing_on("Next movement... Plank");
    let highlighter = RecordingHighlighter::new();

    let outcome = player(&engine, &highlighter)
        .play(
            &[exercise("Plank", "1", "1", "5 sec", "-")],
            TODAY_CONTEXT,
            &CancellationToken::new(),
        )
        .await;

    assert_eq!(outcome, RunOutcome::Completed);
    assert!(engine.texts().contains(&script::STATIC_HOLD_RELEASE.to_string()));
}

#[tokio::test(start_paused = true)]
async fn cancelled_before_start_speaks_nothing() {
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = player(&engine, &highlighter)
        .play(&[exercise("Plank", "1", "1", "5 sec", "-")], TODAY_CONTEXT, &cancel)
        .await;

    assert_eq!(outcome, RunOutcome::Stopped);
    assert!(engine.texts().is_empty());
    assert!(highlighter.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn events_report_modes_in_order() {
    let engine = RecordingEngine::new();
    let highlighter = RecordingHighlighter::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    player(&engine, &highlighter)
        .with_events(tx)
        .play(
            &[
                exercise("Warm-up Walk", "-", "-", "5 min", "-"),
                exercise("Glute Bridge", "2", "15", "2 sec", "30 sec"),
                exercise("Deep Breathing", "1", "-", "2 min", "-"),
            ],
            TODAY_CONTEXT,
            &CancellationToken::new(),
        )
        .await;

    let mut started = Vec::new();
    let mut sets = 0;
    while let Ok(event) = rx.try_recv() {
        match event {
            RoutineEvent::ExerciseStarted { index, mode, .. } => started.push((index, mode)),
            RoutineEvent::SetStarted { .. } => sets += 1,
            _ => {}
        }
    }

    assert_eq!(
        started,
        vec![
            (
                1,
                ExecutionMode::RepAndHold {
                    reps: 15,
                    hold_secs: 2
                }
            ),
            (2, ExecutionMode::StaticHold { hold_secs: 120 }),
        ]
    );
    assert_eq!(sets, 2);
}
