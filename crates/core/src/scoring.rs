//! Scoring module - link score and garbage generation
//!
//! One link scores `10 x cleared x bonus`, where the bonus is the sum of
//! the group, color and chain-power table entries clamped to `[1, 999]`.
//! Table lookups past the end use the last entry. Garbage is the link
//! score divided by the target point, with the fractional remainder
//! carried into the next link.

use crate::settings::Settings;
use crate::types::{BONUS_MAX, BONUS_MIN, POINTS_PER_CELL};

/// Score breakdown for one link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkScore {
    /// Sum of the group bonus of every popping group
    pub group_bonus: u32,
    pub color_bonus: u32,
    pub chain_power: u32,
    /// Sum of the three bonuses after clamping
    pub bonus_multiplier: u32,
    /// Cells cleared across all groups
    pub cleared: u32,
    /// `10 x cleared`
    pub puyo_multiplier: u32,
    pub score: u32,
}

/// Garbage produced by one link
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GarbageResult {
    pub garbage: u32,
    /// Fractional nuisance carried into the next link
    pub leftover: f64,
}

/// Look up `table[index]`, using the last entry when `index` runs past it
pub fn table_value(table: &[u32], index: usize) -> u32 {
    match table.get(index) {
        Some(&v) => v,
        None => table.last().copied().unwrap_or(0),
    }
}

/// Bonus for a single popping group of `size` cells
pub fn group_bonus(size: usize, settings: &Settings) -> u32 {
    table_value(
        &settings.group_bonus,
        size.saturating_sub(settings.group_minimum),
    )
}

/// Bonus for `colors` distinct colors popping in one link
pub fn color_bonus(colors: usize, settings: &Settings) -> u32 {
    table_value(&settings.color_bonus, colors.saturating_sub(1))
}

/// Chain power for the `chain_length`-th link
pub fn chain_power(chain_length: u32, settings: &Settings) -> u32 {
    table_value(&settings.chain_power, chain_length.saturating_sub(1) as usize)
}

/// Clamp a summed bonus into the legal multiplier range
pub fn clamp_bonus(bonus: u32) -> u32 {
    bonus.clamp(BONUS_MIN, BONUS_MAX)
}

/// Calculate the score of one link
///
/// `group_sizes` holds the size of each popping group, `colors` the number
/// of distinct colors among them, `chain_length` the 1-based link index.
pub fn calculate_link_score(
    group_sizes: &[usize],
    colors: usize,
    chain_length: u32,
    settings: &Settings,
) -> LinkScore {
    let group = group_sizes
        .iter()
        .map(|&size| group_bonus(size, settings))
        .fold(0u32, u32::saturating_add);
    let color = color_bonus(colors, settings);
    let power = chain_power(chain_length, settings);

    let bonus_multiplier = clamp_bonus(group.saturating_add(color).saturating_add(power));
    let cleared = group_sizes.iter().sum::<usize>() as u32;
    let puyo_multiplier = POINTS_PER_CELL.saturating_mul(cleared);

    LinkScore {
        group_bonus: group,
        color_bonus: color,
        chain_power: power,
        bonus_multiplier,
        cleared,
        puyo_multiplier,
        score: puyo_multiplier.saturating_mul(bonus_multiplier),
    }
}

/// Convert a link score into garbage, carrying the fractional remainder
pub fn calculate_garbage(link_score: u32, target_point: u32, leftover: f64) -> GarbageResult {
    let nuisance = link_score as f64 / target_point.max(1) as f64 + leftover;
    let garbage = nuisance.floor();
    GarbageResult {
        garbage: garbage as u32,
        leftover: nuisance - garbage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lookup_clamps_to_last_entry() {
        assert_eq!(table_value(&[0, 2, 3], 1), 2);
        assert_eq!(table_value(&[0, 2, 3], 10), 3);
        assert_eq!(table_value(&[], 0), 0);
    }

    #[test]
    fn group_bonus_is_offset_by_group_minimum() {
        let s = Settings::default();
        assert_eq!(group_bonus(4, &s), 0);
        assert_eq!(group_bonus(5, &s), 2);
        assert_eq!(group_bonus(10, &s), 7);
        assert_eq!(group_bonus(11, &s), 10);
        assert_eq!(group_bonus(30, &s), 10);

        let s = Settings {
            group_minimum: 2,
            ..Settings::default()
        };
        assert_eq!(group_bonus(2, &s), 0);
        assert_eq!(group_bonus(3, &s), 2);
        assert_eq!(group_bonus(9, &s), 10);
    }

    #[test]
    fn single_group_first_link() {
        let s = Settings::default();
        let r = calculate_link_score(&[4], 1, 1, &s);
        // Bonus sums to 0 and is clamped up to 1.
        assert_eq!(r.bonus_multiplier, 1);
        assert_eq!(r.cleared, 4);
        assert_eq!(r.puyo_multiplier, 40);
        assert_eq!(r.score, 40);
    }

    #[test]
    fn bonuses_add_before_multiplying() {
        let s = Settings::default();
        // Second link, a 5-group and a 4-group of different colors.
        let r = calculate_link_score(&[5, 4], 2, 2, &s);
        assert_eq!(r.group_bonus, 2);
        assert_eq!(r.color_bonus, 3);
        assert_eq!(r.chain_power, 8);
        assert_eq!(r.bonus_multiplier, 13);
        assert_eq!(r.score, 10 * 9 * 13);
    }

    #[test]
    fn bonus_is_clamped_to_999() {
        let s = Settings {
            chain_power: vec![0, 990],
            ..Settings::default()
        };
        let r = calculate_link_score(&[30, 30, 30, 30, 30], 5, 2, &s);
        assert_eq!(r.group_bonus + r.color_bonus + r.chain_power, 50 + 24 + 990);
        assert_eq!(r.bonus_multiplier, 999);
        assert_eq!(r.score, 10 * 150 * 999);
    }

    #[test]
    fn garbage_carries_fractional_remainder() {
        let first = calculate_garbage(105, 70, 0.0);
        assert_eq!(first.garbage, 1);
        assert!((first.leftover - 0.5).abs() < 1e-9);

        let second = calculate_garbage(105, 70, first.leftover);
        assert_eq!(second.garbage, 2);
        assert!(second.leftover.abs() < 1e-9);

        let small = calculate_garbage(40, 70, 0.0);
        assert_eq!(small.garbage, 0);
        assert!((small.leftover - 40.0 / 70.0).abs() < 1e-9);
    }
}
