//! Column partitioning and width redistribution.
//!
//! A wide table on a compact viewport is split into snap-scrollable "pages":
//! contiguous column groups that each fit the available width, with any
//! leftover width inside a page spread evenly across its columns. The
//! functions here are pure: the same widths and available width always
//! produce the same groups and hints.

/// A contiguous run of columns treated as one horizontally-scrollable unit.
///
/// Indices are inclusive. Groups are produced left to right, never overlap,
/// and together cover the full column sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnGroup {
    pub start: usize,
    pub end: usize,
}

impl ColumnGroup {
    pub fn column_count(&self) -> usize {
        self.end - self.start + 1
    }

    /// Whether a column index belongs to this group.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index <= self.end
    }
}

/// Sizing hints for one column.
///
/// The reset baseline carries only the declared minimum; after grouping,
/// `min_width` and `max_width` both hold the pinned width and the group's
/// first column carries the snap anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnHint {
    pub min_width: Option<u16>,
    pub max_width: Option<u16>,
    pub snap_anchor: bool,
}

impl ColumnHint {
    /// Baseline hint: the declared minimum as the only sizing input.
    pub fn reset(declared_min: Option<u16>) -> Self {
        Self {
            min_width: declared_min,
            max_width: None,
            snap_anchor: false,
        }
    }

    /// Width the column renders at. The pin wins over the measured width,
    /// but content wider than the pin cannot be compressed below its
    /// measured width.
    pub fn resolved(&self, measured: u16) -> u16 {
        let floored = match self.min_width {
            Some(min) => measured.max(min),
            None => measured,
        };
        match self.max_width {
            Some(max) => floored.min(max.max(measured)),
            None => floored,
        }
    }
}

/// Partition columns into groups that each fit `available`.
///
/// Scans left to right with a running width sum. A column exactly filling
/// the remainder (sum == available) stays in the current group. A column
/// that alone exceeds `available` is kept as its own singleton group and is
/// never combined with anything after it.
pub fn partition(widths: &[u16], available: u16) -> Vec<ColumnGroup> {
    let mut groups = Vec::new();
    let mut sum: u32 = 0;
    let mut start = 0usize;

    for (i, &width) in widths.iter().enumerate() {
        sum += u32::from(width);
        let is_last = i == widths.len() - 1;

        if sum <= u32::from(available) {
            if is_last {
                groups.push(ColumnGroup { start, end: i });
            }
            continue;
        }

        // Close the running group at the previous column; an empty group
        // means this column alone overflows and closes on itself.
        let is_just_one = i == start;
        let end = if is_just_one { i } else { i - 1 };
        groups.push(ColumnGroup { start, end });
        start = end + 1;
        sum = u32::from(width);

        // The column that forced the closure cannot be combined with
        // anything after it when it is last or itself wider than the
        // viewport: close it immediately as a singleton.
        if !is_just_one && (is_last || width > available) {
            groups.push(ColumnGroup { start: i, end: i });
            start += 1;
            sum = 0;
        }
    }

    groups
}

/// Spread each group's unused width evenly across its columns and pin the
/// results.
///
/// Per group: `remaining = available - sum(original)`; if positive, every
/// column gains `remaining / count`, clamped so no pin exceeds `available`.
/// The pinned width is written as both minimum and maximum, and the group's
/// first column becomes the scroll-snap anchor.
pub fn redistribute(widths: &[u16], groups: &[ColumnGroup], available: u16) -> Vec<ColumnHint> {
    let mut hints = vec![ColumnHint::default(); widths.len()];

    for group in groups {
        let members = &widths[group.start..=group.end];
        let total: u32 = members.iter().map(|&w| u32::from(w)).sum();
        let remaining = u32::from(available).saturating_sub(total);
        let space = if remaining > 0 {
            remaining / members.len() as u32
        } else {
            0
        };

        for (offset, &original) in members.iter().enumerate() {
            let pinned = (u32::from(original) + space).min(u32::from(available)) as u16;
            let hint = &mut hints[group.start + offset];
            hint.min_width = Some(pinned);
            hint.max_width = Some(pinned);
        }
        hints[group.start].snap_anchor = true;
    }

    hints
}

/// Full layout pass: partition then redistribute.
pub fn snap_layout(widths: &[u16], available: u16) -> (Vec<ColumnGroup>, Vec<ColumnHint>) {
    let groups = partition(widths, available);
    let hints = redistribute(widths, &groups, available);
    log::trace!(
        "[snap] {} columns -> {} groups at width {}",
        widths.len(),
        groups.len(),
        available
    );
    (groups, hints)
}
