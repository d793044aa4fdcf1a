/// Receives progress notifications while a batch of hostnames is resolved.
pub trait Progress: Send + Sync {
    fn start(&self, _total: u64) {}
    /// Called once per hostname, whatever its outcome.
    fn advance(&self) {}
    fn finish(&self) {}
}

pub struct NoProgress;

impl Progress for NoProgress {}
