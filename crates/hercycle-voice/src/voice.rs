//! Voice preference order.

use crate::backend::VoiceInfo;

/// Voice names tried in order (substring match) after the user's own
/// preference.
const PREFERRED_NAMES: &[&str] = &["Google US English", "Zira", "Samantha"];

/// Marker accepted when no named voice is present.
const FEMALE_MARKER: &str = "Female";

/// Pick a voice from `voices`.
///
/// Order: `preferred` (if given), then the names in [`PREFERRED_NAMES`],
/// then any voice whose name mentions "Female", then the first voice.
/// Returns `None` only for an empty catalog, in which case the engine
/// default is used.
#[must_use]
pub fn select_voice(voices: &[VoiceInfo], preferred: Option<&str>) -> Option<VoiceInfo> {
    let by_name = |needle: &str| voices.iter().find(|v| v.name.contains(needle));

    preferred
        .into_iter()
        .chain(PREFERRED_NAMES.iter().copied())
        .find_map(by_name)
        .or_else(|| by_name(FEMALE_MARKER))
        .or_else(|| voices.first())
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voice(name: &str) -> VoiceInfo {
        VoiceInfo::new(&name.to_lowercase().replace(' ', "-"), name, "en-US")
    }

    #[test]
    fn google_voice_wins() {
        let voices = [voice("Alex"), voice("Samantha"), voice("Google US English")];
        assert_eq!(
            select_voice(&voices, None).unwrap().name,
            "Google US English"
        );
    }

    #[test]
    fn windows_female_before_samantha() {
        let voices = [voice("Samantha"), voice("Microsoft Zira - English (United States)")];
        assert!(select_voice(&voices, None).unwrap().name.contains("Zira"));
    }

    #[test]
    fn female_descriptor_fallback() {
        let voices = [voice("Daniel"), voice("UK English Female")];
        assert_eq!(select_voice(&voices, None).unwrap().name, "UK English Female");
    }

    #[test]
    fn first_voice_fallback() {
        let voices = [voice("Daniel"), voice("Fred")];
        assert_eq!(select_voice(&voices, None).unwrap().name, "Daniel");
    }

    #[test]
    fn empty_catalog_uses_engine_default() {
        assert!(select_voice(&[], Some("Samantha")).is_none());
    }

    #[test]
    fn user_preference_first() {
        let voices = [voice("Google US English"), voice("Fred")];
        assert_eq!(select_voice(&voices, Some("Fred")).unwrap().name, "Fred");
    }

    #[test]
    fn missing_user_preference_falls_through() {
        let voices = [voice("Samantha")];
        assert_eq!(select_voice(&voices, Some("Fred")).unwrap().name, "Samantha");
    }
}
