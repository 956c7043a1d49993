/// Receives completion percentages from a buffer render.
///
/// Reports may arrive from several worker threads and out of order; sinks
/// that need a monotonic value should keep the maximum.
pub trait ProgressSink: Send + Sync {
    fn report(&self, percent: u8);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    #[inline]
    fn report(&self, _percent: u8) {}
}

impl<F> ProgressSink for F
where
    F: Fn(u8) + Send + Sync,
{
    #[inline]
    fn report(&self, percent: u8) {
        self(percent)
    }
}

/// `completed_rows / total_rows * 100`, truncated. An empty target is complete.
#[must_use]
pub fn progress_percent(completed_rows: u32, total_rows: u32) -> u8 {
    if total_rows == 0 {
        return 100;
    }

    let percent = u64::from(completed_rows.min(total_rows)) * 100 / u64::from(total_rows);

    percent as u8
}
