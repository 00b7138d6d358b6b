//! Running aggregates used when grouping records.

/// Running arithmetic mean.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Mean {
    sum: f64,
    count: usize,
}

impl Mean {
    pub(crate) fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Mean of all pushed values, or `None` if nothing was pushed.
    #[allow(clippy::cast_precision_loss)] // Group sizes are far below 2^52
    pub(crate) fn value(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}
