use crate::aggregate::SatelliteGroup;
use crate::errors::AppError;
use crate::model::{Stat, Transmitter};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Success percentage of a transmitter's observations, in [0, 100].
/// A transmitter with no observations rates 0 regardless of `good_count`.
pub fn success_rate(stat: &Stat) -> f64 {
    if stat.total_count == 0 {
        return 0.0;
    }
    stat.good_count as f64 / stat.total_count as f64 * 100.0
}

/// Transmitter with the highest success rate. Ties keep the first one.
pub fn best_transmitter(records: &[Transmitter]) -> Result<&Transmitter, AppError> {
    let mut best: Option<(&Transmitter, f64)> = None;
    for record in records {
        let rate = success_rate(&record.stat);
        match best {
            Some((_, best_rate)) if rate <= best_rate => {}
            _ => best = Some((record, rate)),
        }
    }
    best.map(|(record, _)| record)
        .ok_or_else(|| AppError::Empty("no transmitters to compare".into()))
}

// Field order here is the key order of the rendered JSON.

#[derive(Debug, Serialize)]
pub struct Report {
    pub satellite: SatelliteSummary,
}

#[derive(Debug, Serialize)]
pub struct SatelliteSummary {
    pub name: String,
    pub transmitter_count: usize,
    pub transmitter: TransmitterSummary,
}

#[derive(Debug, Serialize)]
pub struct TransmitterSummary {
    pub uuid: String,
    pub description: String,
    pub success_rate: f64,
    pub stat: Stat,
}

pub fn build_report(group: &SatelliteGroup, best: &Transmitter) -> Report {
    Report {
        satellite: SatelliteSummary {
            name: group.name.clone(),
            transmitter_count: group.transmitters.len(),
            transmitter: TransmitterSummary {
                uuid: best.uuid.clone(),
                description: best.description.clone(),
                success_rate: success_rate(&best.stat),
                stat: best.stat.clone(),
            },
        },
    }
}

/// Pretty-printed JSON with 4-space indentation.
pub fn render(report: &Report) -> Result<String, AppError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    report.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| AppError::Decode(format!("report utf8: {}", e)))
}
