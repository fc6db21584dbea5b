//! Group-by-mean aggregation.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::types::numeric_cell;
use crate::domain::{AggregatedSeries, BenchmarkTable, GroupKey};
use crate::error::AppError;

#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    fn mean(self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.sum / self.count as f64
        }
    }
}

/// Mean of `value_column` per distinct value of `group_column`, ascending by key.
///
/// Rows with a missing key are dropped and missing values are skipped; a group
/// whose values are all missing has a `NaN` mean.
pub fn aggregate(
    table: &BenchmarkTable,
    group_column: &str,
    value_column: &str,
) -> Result<AggregatedSeries, AppError> {
    let key_idx = table.require_column(group_column)?;
    let value_idx = table.require_column(value_column)?;

    let mut groups: BTreeMap<GroupKey, Accumulator> = BTreeMap::new();
    for (idx, row) in table.rows.iter().enumerate() {
        let line = idx + 2;
        let Some(key) = GroupKey::from_value(&row[key_idx]) else {
            continue;
        };
        let acc = groups.entry(key).or_default();
        if let Some(v) = numeric_cell(&row[value_idx], value_column, line)? {
            acc.sum += v;
            acc.count += 1;
        }
    }

    debug!(
        group_column,
        value_column,
        rows = table.len(),
        groups = groups.len(),
        "aggregated"
    );

    Ok(AggregatedSeries {
        key_column: group_column.to_string(),
        points: groups.into_iter().map(|(k, acc)| (k, acc.mean())).collect(),
    })
}
