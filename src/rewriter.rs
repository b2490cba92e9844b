// Redact Engine - Masking Rewriter
// Splices approved detections out of the original text and replaces them
// with their placeholders, and builds the placeholder -> original mapping
// callers need to reverse the substitution later.
//
// Placeholders are rarely the same length as the text they replace, so the
// splice has to run back-to-front (descending by `start`) to keep earlier
// byte offsets valid while later ones are rewritten.

use crate::model::Detection;

/// The result of applying a masking pass: the redacted text, and an
/// insertion-ordered map from each placeholder back to the original text it
/// replaced (deduplicated - a name mentioned five times yields one entry).
#[derive(Debug, Clone, Default)]
pub struct MaskingResult {
    pub redacted_text: String,
    pub mapping: Vec<(String, String)>,
}

/// Replace every approved, non-empty detection's span with its placeholder.
/// Detections with `approved == false` are left untouched in the output -
/// masking is opt-out per detection, not all-or-nothing.
pub fn apply_masking(text: &str, detections: &[Detection]) -> MaskingResult {
    let mut approved: Vec<&Detection> = detections
        .iter()
        .filter(|d| d.approved && d.start < d.end && d.end <= text.len())
        .collect();

    approved.sort_by(|a, b| b.start.cmp(&a.start));

    let mut redacted = text.to_string();
    for detection in &approved {
        redacted.replace_range(detection.start..detection.end, &detection.placeholder);
    }

    let mut mapping = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for detection in detections.iter().filter(|d| d.approved) {
        if seen.insert(detection.placeholder.clone()) {
            mapping.push((detection.placeholder.clone(), detection.text.clone()));
        }
    }

    MaskingResult {
        redacted_text: redacted,
        mapping,
    }
}
