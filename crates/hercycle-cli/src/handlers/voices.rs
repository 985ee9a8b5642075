//! Voices command handler.

use anyhow::Result;
use hercycle_voice::{ConsoleSpeech, SpeechEngine, select_voice};

use crate::bootstrap::CliContext;
use crate::presentation::print_separator;

/// List the voices of the console speech engine, marking the one a
/// routine would be narrated with.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let engine = ConsoleSpeech::default();
    let voices = engine.voices();
    let chosen = select_voice(&voices, ctx.settings().preferred_voice.as_deref());

    println!("{:<2} {:<28} {:<8} Id", "", "Name", "Lang");
    print_separator(60);
    for voice in &voices {
        let marker = if chosen.as_ref() == Some(voice) { "*" } else { "" };
        println!("{:<2} {:<28} {:<8} {}", marker, voice.name, voice.lang, voice.id);
    }

    if chosen.is_none() {
        println!("\nNo voice available; utterances use the engine default.");
    }
    Ok(())
}
