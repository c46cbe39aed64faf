//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::carousel::CarouselSummary;
use crate::detector::CycleDetector;
use crate::error::TurtleError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detector: &CycleDetector) -> Result<String, TurtleError> {
        let cycle = detector.cycle().map(|cycle| {
            json!({
                "entry": cycle.entry,
                "tail_len": cycle.tail_len,
                "period": cycle.period,
            })
        });

        let report = json!({
            "has_cycle": detector.has_cycle(),
            "node_count": detector.node_count(),
            "cycle": cycle,
            "detections": detector.detections(),
        });

        serde_json::to_string_pretty(&report).map_err(TurtleError::Json)
    }

    fn generate_carousel_report(&self, summary: &CarouselSummary) -> Result<String, TurtleError> {
        let report = json!({
            "all_agree": summary.all_agree(),
            "summary": summary,
        });

        serde_json::to_string_pretty(&report).map_err(TurtleError::Json)
    }
}
