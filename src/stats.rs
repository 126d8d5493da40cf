//! Mean, median and mode over a borrowed slice of integers.
//!
//! None of the functions here mutate their input. Empty input is not an
//! error: [mean] and [median] return `0.0` and [mode] returns [Modes::none].

use std::fmt;

use log::error;

use crate::error::{Result, StatsError};
use crate::sample::write_list;

pub const NO_MODE: &str = "No mode (all values occur equally)";

pub fn mean(numbers: &[i32]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    numbers.iter().map(|&value| f64::from(value)).sum::<f64>() / numbers.len() as f64
}

fn sorted_copy(numbers: &[i32]) -> Result<Vec<i32>> {
    let mut sorted = Vec::new();
    sorted
        .try_reserve_exact(numbers.len())
        .map_err(|err| StatsError::allocation("sorted copy", numbers.len(), err))?;
    sorted.extend_from_slice(numbers);
    sorted.sort_unstable();
    Ok(sorted)
}

/// Median of `numbers`, or the allocation error hit while sorting a copy.
pub fn try_median(numbers: &[i32]) -> Result<f64> {
    if numbers.is_empty() {
        return Ok(0.0);
    }

    let sorted = sorted_copy(numbers)?;
    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    };
    Ok(median)
}

/// Same as [try_median], but logs a failure and returns `0.0`.
pub fn median(numbers: &[i32]) -> f64 {
    try_median(numbers).unwrap_or_else(|err| {
        error!("Unable to compute median. {}", err);
        0.0
    })
}

/// Occurrence count of each distinct value, ascending by value.
///
/// Values between the minimum and maximum that never occur are not stored,
/// their count is 0.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(i32, usize)>,
}

impl FrequencyTable {
    pub fn build(numbers: &[i32]) -> Result<Self> {
        let sorted = sorted_copy(numbers)?;

        let mut entries: Vec<(i32, usize)> = Vec::new();
        entries
            .try_reserve_exact(sorted.len())
            .map_err(|err| StatsError::allocation("frequency table", sorted.len(), err))?;
        for value in sorted {
            match entries.last_mut() {
                Some((last, count)) if *last == value => *count += 1,
                _ => entries.push((value, 1)),
            }
        }

        Ok(FrequencyTable { entries })
    }

    #[cfg(test)]
    fn count(&self, value: i32) -> usize {
        self.entries
            .binary_search_by_key(&value, |&(entry, _)| entry)
            .map(|index| self.entries[index].1)
            .unwrap_or(0)
    }

    fn min(&self) -> Option<i32> {
        self.entries.first().map(|&(value, _)| value)
    }

    fn max(&self) -> Option<i32> {
        self.entries.last().map(|&(value, _)| value)
    }

    /// Number of integers in `[min, max]`, present or not.
    pub fn range_len(&self) -> u64 {
        match (self.min(), self.max()) {
            (Some(min), Some(max)) => (i64::from(max) - i64::from(min) + 1) as u64,
            _ => 0,
        }
    }

    pub fn max_frequency(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).max().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.entries.iter().copied()
    }
}

/// Most frequent values in ascending order. Empty means "no mode", which is
/// not the same as a mode of `0`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Modes(Vec<i32>);

impl Modes {
    pub fn none() -> Self {
        Modes(Vec::new())
    }

    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }
}

impl fmt::Display for Modes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "{}", NO_MODE)
        } else {
            write_list(f, &self.0)
        }
    }
}

/// Modes of `numbers`, or the allocation error hit while counting.
///
/// When every integer in `[min, max]` ties for the top frequency the
/// distribution counts as flat and there is no mode. This covers a single
/// value, a gapless run of distinct values, and inputs like `[1, 1, 2, 2]`.
pub fn try_mode(numbers: &[i32]) -> Result<Modes> {
    if numbers.is_empty() {
        return Ok(Modes::none());
    }

    let table = FrequencyTable::build(numbers)?;
    let max_frequency = table.max_frequency();
    let candidates = table
        .iter()
        .filter(|&(_, count)| count == max_frequency)
        .map(|(value, _)| value)
        .collect::<Vec<_>>();

    if candidates.len() as u64 == table.range_len() {
        return Ok(Modes::none());
    }
    Ok(Modes(candidates))
}

/// Same as [try_mode], but logs a failure and returns [Modes::none].
pub fn mode(numbers: &[i32]) -> Modes {
    try_mode(numbers).unwrap_or_else(|err| {
        error!("Unable to compute mode. {}", err);
        Modes::none()
    })
}

/// The three statistics for one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub modes: Modes,
}

impl Summary {
    pub fn compute(numbers: &[i32]) -> Self {
        Summary {
            mean: mean(numbers),
            median: median(numbers),
            modes: mode(numbers),
        }
    }
}
