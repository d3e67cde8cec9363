//! Prevalence output.

/// Infection state after all contacts at one timestamp were applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrevalencePoint {
    /// Seconds since the configured start offset.
    pub time:     i64,
    pub infected: usize,
    /// `infected / total_nodes`.
    pub fraction: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrevalenceCurve {
    /// Distinct nodes seen in the contacts.  The source is only counted
    /// when it appears in at least one contact.
    pub total_nodes: usize,
    /// One point per distinct timestamp, in increasing time order.
    pub points:      Vec<PrevalencePoint>,
}

impl PrevalenceCurve {
    /// `(relative_time, fraction)` rows, the prevalence wire shape.
    pub fn fractions(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.points.iter().map(|p| (p.time, p.fraction))
    }

    /// Infected count at the last timestamp.
    pub fn final_infected(&self) -> usize {
        self.points.last().map_or(0, |p| p.infected)
    }
}
