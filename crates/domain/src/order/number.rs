//! Human-facing order number generation.

use chrono::Utc;
use uuid::Uuid;

/// Generates a unique, human-readable order number.
///
/// Format: `ORD-<UTC timestamp>-<6 random hex chars>`, e.g.
/// `ORD-20260823153042-9F3A1C`. The timestamp prefix keeps numbers roughly
/// sortable; the random suffix makes collisions within the same second
/// vanishingly unlikely.
pub fn generate_order_number() -> String {
    let timestamp = Utc::now().format("%Y%m%d%H%M%S");
    let suffix = Uuid::new_v4().simple().to_string()[..6].to_uppercase();
    format!("ORD-{timestamp}-{suffix}")
}
