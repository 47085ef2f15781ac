use parlance_core::transcript::{Transcript, TranscriptEntry};

/// Render one transcript entry the way the session history is displayed.
pub fn render_entry(entry: &TranscriptEntry) -> String {
    format!("{}: {}", entry.speaker.label(), entry.text)
}

/// Render the whole transcript, one line per entry.
pub fn render_transcript(transcript: &Transcript) -> String {
    transcript
        .entries()
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}
