//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `weekgoals_core` linkage.
//! - Keep output deterministic enough for quick local sanity checks.

use chrono::Local;
use weekgoals_core::PeriodKey;

fn main() {
    println!("weekgoals_core ping={}", weekgoals_core::ping());
    println!("weekgoals_core version={}", weekgoals_core::core_version());
    println!(
        "current period={}",
        PeriodKey::for_date(Local::now().date_naive())
    );
}
