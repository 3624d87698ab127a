//! Staff analytics rollups and breakdown checks

use rustc_hash::FxHashMap;

use crate::models::{BreakdownEntry, BreakdownKind, StaffAggregate};

/// Allowed drift of a breakdown's percentage sum from 100
pub const PERCENTAGE_TOLERANCE: f64 = 1.0;

/// Staff id of the roster-wide rollup
pub const ALL_STAFF_ID: &str = "all";

/// Sum of percentages in one breakdown
#[must_use]
pub fn percentage_sum(entries: &[BreakdownEntry]) -> f64 {
    entries.iter().map(|e| e.percentage).sum()
}

/// A breakdown is balanced when its percentages sum to 100 within
/// [`PERCENTAGE_TOLERANCE`]. An empty breakdown is trivially balanced.
#[must_use]
pub fn is_balanced(entries: &[BreakdownEntry]) -> bool {
    entries.is_empty() || (percentage_sum(entries) - 100.0).abs() <= PERCENTAGE_TOLERANCE
}

/// A breakdown whose percentages do not add up
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownIssue {
    pub staff_id: String,
    pub kind: BreakdownKind,
    pub percentage_sum: f64,
}

/// Report every unbalanced breakdown in a roster
#[must_use]
pub fn validate_roster(roster: &[StaffAggregate]) -> Vec<BreakdownIssue> {
    let mut issues = Vec::new();
    for staff in roster {
        for kind in BreakdownKind::ALL {
            let entries = staff.breakdown(kind);
            if !is_balanced(entries) {
                let sum = percentage_sum(entries);
                log::warn!(
                    "Staff {} {kind} breakdown sums to {sum:.1}%, expected 100%",
                    staff.id
                );
                issues.push(BreakdownIssue {
                    staff_id: staff.id.clone(),
                    kind,
                    percentage_sum: sum,
                });
            }
        }
    }
    issues
}

/// Recompute whole-number percentages from values.
///
/// Uses largest-remainder rounding so the result sums to exactly 100 when
/// any value is positive. All-zero breakdowns get 0% everywhere.
pub fn recompute_percentages(entries: &mut [BreakdownEntry]) {
    let total: f64 = entries.iter().map(|e| e.value.max(0.0)).sum();
    if total <= 0.0 || !total.is_finite() {
        for entry in entries.iter_mut() {
            entry.percentage = 0.0;
        }
        return;
    }

    let raw: Vec<f64> = entries
        .iter()
        .map(|e| e.value.max(0.0) / total * 100.0)
        .collect();
    let mut floors: Vec<f64> = raw.iter().map(|p| p.floor()).collect();
    let remaining = (100.0 - floors.iter().sum::<f64>()).round() as usize;

    let mut order: Vec<usize> = (0..raw.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = raw[a] - floors[a];
        let rb = raw[b] - floors[b];
        rb.total_cmp(&ra).then(a.cmp(&b))
    });
    for &i in order.iter().take(remaining) {
        floors[i] += 1.0;
    }

    for (entry, pct) in entries.iter_mut().zip(floors) {
        entry.percentage = pct;
    }
}

/// Roster-wide rollup: values summed by entry name, percentages recomputed.
///
/// Entry order and color follow first appearance across the roster.
#[must_use]
pub fn combine_roster(roster: &[StaffAggregate]) -> StaffAggregate {
    let mut combined = StaffAggregate::new(ALL_STAFF_ID, "All Staff");

    for kind in BreakdownKind::ALL {
        let mut merged: Vec<BreakdownEntry> = Vec::new();
        let mut index: FxHashMap<&str, usize> = FxHashMap::default();

        for entry in roster.iter().flat_map(|s| s.breakdown(kind)) {
            match index.get(entry.name.as_str()) {
                Some(&slot) => merged[slot].value += entry.value,
                None => {
                    index.insert(entry.name.as_str(), merged.len());
                    merged.push(BreakdownEntry::new(
                        entry.name.clone(),
                        entry.value,
                        0.0,
                        entry.color.clone(),
                    ));
                }
            }
        }

        recompute_percentages(&mut merged);
        *combined.breakdown_mut(kind) = merged;
    }

    combined
}

/// Aggregate for one staff id, or the roster-wide rollup for
/// [`ALL_STAFF_ID`]
#[must_use]
pub fn staff_view(roster: &[StaffAggregate], staff_id: &str) -> Option<StaffAggregate> {
    if staff_id == ALL_STAFF_ID {
        return Some(combine_roster(roster));
    }
    roster.iter().find(|s| s.id == staff_id).cloned()
}
