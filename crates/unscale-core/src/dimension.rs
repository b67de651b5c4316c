use tracing::debug;

use crate::boundary::Boundaries;

/// Summary of the runs found in one boundary array.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    pub count: usize,
    pub thinnest: usize,
    pub thickest: usize,
}

impl RunStats {
    pub fn from_boundaries(boundaries: &Boundaries) -> Self {
        let mut stats = Self {
            count: 0,
            thinnest: usize::MAX,
            thickest: 0,
        };
        for length in boundaries.runs() {
            stats.count += 1;
            stats.thinnest = stats.thinnest.min(length);
            stats.thickest = stats.thickest.max(length);
        }
        if stats.count == 0 {
            return Self::default();
        }
        stats
    }

    /// Spread between the thickest and thinnest run.
    pub fn spread(&self) -> usize {
        self.thickest - self.thinnest
    }
}

/// Estimate how many source pixels an axis held before scaling.
///
/// When every run is within `max_variation` of the others, each run is one
/// source pixel and the run count is exact. Otherwise some runs are wide
/// enough to be either a stretched pixel or several identical ones; the
/// scale is then averaged over the runs that can only be a single pixel
/// and the axis length is divided by it.
///
/// The fallback cannot tell a widened pixel from adjacent identical pixels
/// and will overestimate in that case.
pub fn determine_dimension(boundaries: &Boundaries, max_variation: usize) -> usize {
    let stats = RunStats::from_boundaries(boundaries);
    if stats.count == 0 {
        return 0;
    }

    if stats.spread() <= max_variation {
        debug!(
            runs = stats.count,
            thinnest = stats.thinnest,
            thickest = stats.thickest,
            "All runs consistent, using run count"
        );
        return stats.count;
    }

    determine_dimension_by_certain_runs(boundaries, stats.thinnest, max_variation)
}

/// Average scale over the runs with length in
/// `[thinnest, thinnest + max_variation]`, applied to the whole axis.
pub fn determine_dimension_by_certain_runs(
    boundaries: &Boundaries,
    thinnest: usize,
    max_variation: usize,
) -> usize {
    let widest_certain = thinnest.saturating_add(max_variation);
    let (certain_size, certain_count) = boundaries
        .runs()
        .filter(|&length| (thinnest..=widest_certain).contains(&length))
        .fold((0usize, 0usize), |(size, count), length| {
            (size + length, count + 1)
        });
    if certain_count == 0 {
        return boundaries.runs().count();
    }

    let average_scale = certain_size as f64 / certain_count as f64;
    let estimate = (boundaries.len() as f64 / average_scale + 0.5).floor() as usize;
    debug!(
        certain_runs = certain_count,
        average_scale, estimate, "Runs inconsistent, estimating from certain runs"
    );
    estimate
}
