use std::collections::HashMap;

use glam::DVec3;
use thiserror::Error;

use super::PositionProvider;

/// Errors raised while parsing position table files.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("row {row}: expected {expected} columns, found {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}: bad number {value:?}")]
    BadNumber { row: usize, value: String },
    #[error("body {body:?} has {positions} samples but the time axis has {times}")]
    SampleCountMismatch {
        body: String,
        positions: usize,
        times: usize,
    },
}

/// Split comma-separated rows into float columns, skipping the header row.
fn parse_rows(text: &str, columns: usize) -> Result<Vec<Vec<f64>>, TableError> {
    let mut rows = Vec::new();
    for (row, line) in text.lines().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != columns {
            return Err(TableError::RowWidth {
                row,
                expected: columns,
                found: fields.len(),
            });
        }
        let mut values = Vec::with_capacity(columns);
        for field in fields {
            let value = field.parse::<f64>().map_err(|_| TableError::BadNumber {
                row,
                value: field.to_string(),
            })?;
            values.push(value);
        }
        rows.push(values);
    }
    Ok(rows)
}

/// Parse a time-axis file: header row, then one float per row.
pub fn parse_times(text: &str) -> Result<Vec<f64>, TableError> {
    Ok(parse_rows(text, 1)?.into_iter().map(|r| r[0]).collect())
}

/// Parse a position file: header row, then x,y,z per row.
pub fn parse_positions(text: &str) -> Result<Vec<DVec3>, TableError> {
    Ok(parse_rows(text, 3)?
        .into_iter()
        .map(|r| DVec3::new(r[0], r[1], r[2]))
        .collect())
}

/// Map a slider position onto a sample cursor.
///
/// The naive `floor((value - min) * count / max)` lands one past the end when
/// the slider sits at its maximum, so the result is clamped to the last valid
/// sample. Empty tables and degenerate ranges yield 0.
pub fn sample_index(value: f64, min: f64, max: f64, count: usize) -> usize {
    if count == 0 || max <= 0.0 {
        return 0;
    }
    let raw = ((value - min) * count as f64 / max).floor();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(count - 1)
    }
}

/// One body's precomputed position series, immutable after load.
#[derive(Debug, Clone)]
pub struct BodySeries {
    pub positions: Vec<DVec3>,
    /// Name of the body this series is measured from, when the raw data is
    /// not already in scene-centric coordinates.
    pub relative_to: Option<String>,
    /// Scalar compressing real distances (km) into scene units.
    pub display_factor: f64,
}

/// Tabulated position provider backed by flat files loaded at runtime.
///
/// Until both the time axis and at least one body series have arrived the
/// provider reports not-ready and every lookup returns `None`; callers fall
/// back to an analytic model in the meantime.
#[derive(Debug, Default)]
pub struct TabulatedEphemeris {
    times: Vec<f64>,
    series: HashMap<String, BodySeries>,
    /// Translation applied once to every resolved position, moving the scene
    /// in front of the camera.
    offset: DVec3,
}

impl TabulatedEphemeris {
    pub fn new(offset: DVec3) -> Self {
        Self {
            times: Vec::new(),
            series: HashMap::new(),
            offset,
        }
    }

    pub fn set_times(&mut self, times: Vec<f64>) {
        log::debug!("time axis loaded: {} samples", times.len());
        self.times = times;
    }

    /// Install a body's series, checking its length against the time axis.
    pub fn insert_series(
        &mut self,
        name: impl Into<String>,
        series: BodySeries,
    ) -> Result<(), TableError> {
        let name = name.into();
        if !self.times.is_empty() && series.positions.len() != self.times.len() {
            return Err(TableError::SampleCountMismatch {
                body: name,
                positions: series.positions.len(),
                times: self.times.len(),
            });
        }
        log::debug!("{name}: {} samples loaded", series.positions.len());
        self.series.insert(name, series);
        Ok(())
    }

    pub fn sample_count(&self) -> usize {
        self.times.len()
    }

    pub fn time_at(&self, index: usize) -> Option<f64> {
        self.times.get(index).copied()
    }

    /// True once the time axis and all of `bodies` have loaded.
    pub fn is_ready(&self, bodies: &[&str]) -> bool {
        !self.times.is_empty() && bodies.iter().all(|b| self.series.contains_key(*b))
    }

    /// Resolve a body's raw sample, composing parent-relative series and
    /// applying the display factor. Returns `None` for unknown bodies or
    /// out-of-range cursors.
    fn resolve(&self, name: &str, index: usize, depth: u32) -> Option<DVec3> {
        if depth > 4 {
            return None;
        }
        let series = self.series.get(name)?;
        let raw = *series.positions.get(index)?;
        let own = raw * series.display_factor;
        match &series.relative_to {
            Some(parent) if self.series.contains_key(parent) => {
                Some(self.resolve(parent, index, depth + 1)? + own)
            }
            _ => Some(own),
        }
    }

    /// Scene-space position for `name` at sample `index`, camera offset applied.
    pub fn displayed_position(&self, name: &str, index: usize) -> Option<DVec3> {
        Some(self.resolve(name, index, 0)? + self.offset)
    }
}

impl PositionProvider for TabulatedEphemeris {
    /// `time` is a sample cursor; fractional values truncate toward zero.
    fn position_at(&self, body: &str, time: f64) -> Option<DVec3> {
        if time < 0.0 {
            return None;
        }
        self.displayed_position(body, time as usize)
    }
}
