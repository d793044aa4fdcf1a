use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use querying::progress::Progress;

/// Progress bar on stderr, one tick per resolved hostname.
pub struct Bar {
    pb: ProgressBar,
}

impl Bar {
    pub fn new() -> anyhow::Result<Bar> {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} ({eta}, {per_sec})")?
            .progress_chars("#>-"));
        Ok(Bar { pb })
    }
}

impl Progress for Bar {
    fn start(&self, total: u64) {
        self.pb.set_length(total);
    }

    fn advance(&self) {
        self.pb.inc(1);
    }

    fn finish(&self) {
        self.pb.finish();
    }
}
