use chrono::SecondsFormat;

use super::NarrationRecord;

/// Render records as the metrics export CSV.
///
/// Header and field order are a stable contract with downstream consumers:
/// `Timestamp,VoiceId,Emotion,Text`. Only the text field is quoted;
/// embedded quotes are escaped by doubling.
pub fn render(records: &[NarrationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push("Timestamp,VoiceId,Emotion,Text".to_string());

    for record in records {
        lines.push(format!(
            "{},{},{},\"{}\"",
            record.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            record.voice_id,
            record.emotion,
            record.text.replace('"', "\"\""),
        ));
    }

    lines.join("\n")
}
