//! Descriptive charts over the employees snapshot.
//!
//! Each builder returns `None` when the table has no rows or lacks the
//! column it keys on.

use crate::domain::table::{AGE, DEPARTMENT, STATUS, TITLE};
use crate::domain::{Bar, Bin, Chart, Series, Slice, Table};

/// Number of equal-width bins in the age histogram.
pub const HISTOGRAM_BINS: usize = 10;

const DONUT_HOLE: f64 = 0.3;
const COUNT_LABEL: &str = "count";

fn counts(table: &Table, column: &str) -> Option<Vec<(String, usize)>> {
    if table.is_empty() {
        return None;
    }
    table.value_counts(column)
}

/// Donut chart of profile update statuses with percent and label on each
/// slice.
#[must_use]
pub fn pie_of_status(table: &Table) -> Option<Chart> {
    let counts = counts(table, STATUS)?;
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    #[allow(clippy::cast_precision_loss)]
    let slices = counts
        .into_iter()
        .map(|(label, count)| Slice {
            label,
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 * 100.0 / total as f64
            },
        })
        .collect();

    Some(Chart {
        title: "Profile update status".to_string(),
        series: Series::Pie {
            label: STATUS.to_string(),
            slices,
            hole: DONUT_HOLE,
        },
    })
}

fn bar_of(table: &Table, column: &str, title: &str) -> Option<Chart> {
    let bars = counts(table, column)?
        .into_iter()
        .map(|(category, count)| Bar { category, count })
        .collect();

    Some(Chart {
        title: title.to_string(),
        series: Series::Bar {
            x_label: column.to_string(),
            y_label: COUNT_LABEL.to_string(),
            bars,
        },
    })
}

/// Head count per department.
#[must_use]
pub fn bar_of_department(table: &Table) -> Option<Chart> {
    bar_of(table, DEPARTMENT, "Employees by department")
}

/// Head count per job title.
#[must_use]
pub fn bar_of_title(table: &Table) -> Option<Chart> {
    bar_of(table, TITLE, "Employees by title")
}

/// Age distribution in [`HISTOGRAM_BINS`] equal-width bins.
///
/// Non-integer age cells are skipped; `None` if no integer ages remain.
#[must_use]
pub fn histogram_of_age(table: &Table) -> Option<Chart> {
    if table.is_empty() {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let ages: Vec<f64> = table
        .column_values(AGE)?
        .filter_map(|cell| cell.as_integer())
        .map(|age| age as f64)
        .collect();

    let bins = equal_width_bins(&ages, HISTOGRAM_BINS)?;
    Some(Chart {
        title: "Employee age distribution".to_string(),
        series: Series::Histogram {
            x_label: AGE.to_string(),
            bins,
        },
    })
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn equal_width_bins(values: &[f64], count: usize) -> Option<Vec<Bin>> {
    let min = values.iter().copied().reduce(f64::min)?;
    let max = values.iter().copied().reduce(f64::max)?;
    let (start, end) = if max > min {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    };
    let width = (end - start) / count as f64;

    let mut bins: Vec<Bin> = (0..count)
        .map(|index| Bin {
            start: start + width * index as f64,
            end: start + width * (index + 1) as f64,
            count: 0,
        })
        .collect();
    if let Some(last) = bins.last_mut() {
        last.end = end;
    }

    for value in values {
        let index = (((value - start) / width).floor() as usize).min(count - 1);
        bins[index].count += 1;
    }
    Some(bins)
}
