pub mod analytic;
pub mod table;

use glam::DVec3;

/// A source of body positions over time.
///
/// `time` is interpreted by each provider: analytic models treat it as a
/// continuous parameter in seconds, tabulated ones as a sample cursor.
/// Returns `None` when the provider has no data for `body`.
pub trait PositionProvider {
    fn position_at(&self, body: &str, time: f64) -> Option<DVec3>;
}
