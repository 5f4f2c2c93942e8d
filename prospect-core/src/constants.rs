/// Prospect system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decision value at or above which a patch is labeled relevant.
pub const DECISION_THRESHOLD: f64 = 1.0;

/// Half-width of the decision margin used by the early uncertainty scan.
/// Candidates with |decision| below this sit inside the SVM margin.
pub const MARGIN_RADIUS: f64 = 1.0;
