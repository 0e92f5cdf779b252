//! Mock user generation.
//!
//! Records are produced from a caller-supplied RNG so a fixed seed always
//! yields the same table.

use chrono::{TimeZone, Utc};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::model::{About, Details, Record, Status};

/// Default number of generated records.
pub const DEFAULT_RECORD_COUNT: u32 = 100;

const YEAR_RANGE: std::ops::RangeInclusive<i32> = 2001..=2025;
const USER_NUMBER_RANGE: std::ops::RangeInclusive<u32> = 1..=1000;

/// Generates `count` records with ids `1..=count`.
pub fn generate_records<R: Rng>(count: u32, rng: &mut R) -> Vec<Record> {
    let statuses = Status::all();
    let records: Vec<Record> = (1..=count)
        .map(|id| {
            let n = rng.gen_range(USER_NUMBER_RANGE);
            let status = statuses[rng.gen_range(0..statuses.len())];
            let year = rng.gen_range(YEAR_RANGE);
            let month = rng.gen_range(1..=12);
            // Day capped at 28 so every month is valid.
            let day = rng.gen_range(1..=28);
            let date = Utc
                .with_ymd_and_hms(year, month, day, 0, 0, 0)
                .single()
                .unwrap_or_default();

            Record {
                id,
                about: About {
                    name: format!("User {}", n),
                    status,
                    email: format!("user{}@example.com", n),
                },
                details: Details {
                    date,
                    invited_by: format!("Admin {}", n),
                },
            }
        })
        .collect();

    debug!(count = records.len(), "generated mock records");
    records
}

/// Generates records from a fixed seed, or from entropy when `seed` is `None`.
pub fn generate_seeded(count: u32, seed: Option<u64>) -> Vec<Record> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    generate_records(count, &mut rng)
}
