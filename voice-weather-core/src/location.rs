//! Location phrases in speech and query normalization.

const LOCATION_DELIMITER: &str = " in ";

/// Fragments after the first delimiter that make it into the location.
///
/// Longer phrases lose everything past the third fragment. Known limitation,
/// kept so existing bots resolve the same places.
const MAX_LOCATION_FRAGMENTS: usize = 3;

/// Pull the location phrase following `" in "` out of an utterance.
///
/// Returns `fallback` when the utterance names no location. Later `" in "`
/// occurrences stay inside the phrase, so "weather in Springfield in Illinois"
/// yields "Springfield in Illinois".
pub fn extract_location(speech_text: &str, fallback: &str) -> String {
    let Some((_, rest)) = speech_text.split_once(LOCATION_DELIMITER) else {
        tracing::debug!("No location parsed from speech");
        return fallback.to_string();
    };

    let fragments: Vec<&str> = rest.split_inclusive(LOCATION_DELIMITER).collect();
    if fragments.len() > MAX_LOCATION_FRAGMENTS {
        tracing::debug!(
            dropped = fragments.len() - MAX_LOCATION_FRAGMENTS,
            "Dropping trailing location fragments"
        );
    }

    let location = fragments
        .iter()
        .take(MAX_LOCATION_FRAGMENTS)
        .map(|fragment| fragment.trim())
        .collect::<Vec<_>>()
        .join(" ");

    tracing::debug!(%location, "Location parsed from speech");
    location
}

/// Append the default country unless the location already carries
/// city, state and country parts.
pub fn normalize_location(location: &str, default_country: &str) -> String {
    if location.matches(',').count() >= 2 || default_country.is_empty() {
        return location.to_string();
    }

    format!("{location},{default_country}")
}
