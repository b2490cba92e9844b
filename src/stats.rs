// Redact Engine - Detection Statistics
// Aggregate counts by category and confidence band, for callers that want a
// summary without walking the full detection list themselves. A single
// fold over the detection list into two parallel count maps.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Category, ConfidenceBand, Detection};

#[derive(Debug, Clone, Default, Serialize)]
pub struct DetectionStats {
    pub total_detections: usize,
    pub by_category: HashMap<Category, usize>,
    pub by_confidence: HashMap<ConfidenceBand, usize>,
}

pub fn compute_stats(detections: &[Detection]) -> DetectionStats {
    let mut stats = DetectionStats {
        total_detections: detections.len(),
        ..Default::default()
    };

    for detection in detections {
        *stats.by_category.entry(detection.category()).or_insert(0) += 1;
        *stats
            .by_confidence
            .entry(detection.confidence_band())
            .or_insert(0) += 1;
    }

    stats
}
