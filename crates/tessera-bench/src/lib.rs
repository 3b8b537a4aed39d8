//! Benchmark profiles for the Tessera engine.
//!
//! Provides pre-built [`BoardConfig`] profiles for benchmarking and examples:
//!
//! - [`reference_profile`]: 128x128 Life soup on a torus (16K cells)
//! - [`stress_profile`]: 512x512 Life soup (~262K cells)
//! - [`multi_state_profile`]: 128x128 Brian's Brain soup
//! - [`wide_bucket_profile`]: 128x128 soup with a radius-2 Moore bucket

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_engine::BoardConfig;
use tessera_rule::{presets, RuleTable};
use tessera_space::{Bucket, EdgeMode};
use tessera_test_utils::random_grid;

fn soup(size: usize, rule_table: RuleTable, seed: u64) -> BoardConfig {
    let num_states = rule_table.num_states();
    BoardConfig {
        grid_size: size,
        initial_grid: random_grid(size, num_states, seed),
        rule_table,
        bucket: Bucket::moore(),
        edge_mode: EdgeMode::Wrap,
        num_states,
    }
}

/// Build the reference profile: a 128x128 Conway soup with wrapping edges.
pub fn reference_profile(seed: u64) -> BoardConfig {
    soup(128, presets::conway(), seed)
}

/// Build the stress profile: same rules as [`reference_profile`] at 16x
/// the cell count.
pub fn stress_profile(seed: u64) -> BoardConfig {
    soup(512, presets::conway(), seed)
}

/// Build a three-state profile running Brian's Brain.
pub fn multi_state_profile(seed: u64) -> BoardConfig {
    soup(128, presets::brians_brain(), seed)
}

/// Build a Life-like profile whose bucket reaches 24 cells, with
/// `NoCheck` edges so boundary skips are exercised.
pub fn wide_bucket_profile(seed: u64) -> BoardConfig {
    let mut config = soup(128, presets::life_like(&[7, 8, 9], &[6, 7, 8, 9, 10]), seed);
    config.bucket = Bucket::moore_radius(2);
    config.edge_mode = EdgeMode::NoCheck;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for config in [
            reference_profile(1),
            stress_profile(1),
            multi_state_profile(1),
            wide_bucket_profile(1),
        ] {
            config.validate().unwrap();
        }
    }
}
