//! Progress reporting for catalog builds.

/// Receives updates while a catalog is built.
pub trait ImportProgress {
    /// A source file has been read (or skipped). `current` is 1-based.
    fn on_file(&self, current: usize, total: usize, path: &str);

    /// A build phase begins, e.g. "Normalizing 812 records".
    fn on_phase(&self, message: &str);

    /// The build finished; `message` summarizes it.
    fn on_complete(&self, message: &str);
}

/// Discards every update.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_file(&self, _current: usize, _total: usize, _path: &str) {}
    fn on_phase(&self, _message: &str) {}
    fn on_complete(&self, _message: &str) {}
}

/// Reports through the `log` crate: every file at debug level, plus an info
/// line at each tenth of the source list.
pub struct LogProgress;

/// Whether `current` of `total` crosses a tenth of the way through.
pub fn is_milestone(current: usize, total: usize) -> bool {
    if total == 0 || current == total {
        return true;
    }
    current * 10 / total != (current - 1) * 10 / total
}

impl ImportProgress for LogProgress {
    fn on_file(&self, current: usize, total: usize, path: &str) {
        log::debug!("[{}/{}] {}", current, total, path);
        if is_milestone(current, total) {
            log::info!("Read {}/{} source files", current, total);
        }
    }

    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_every_tenth() {
        let hits: Vec<usize> = (1..=100).filter(|&i| is_milestone(i, 100)).collect();
        assert_eq!(hits, vec![10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_small_lists_report_each_crossing() {
        let hits: Vec<usize> = (1..=3).filter(|&i| is_milestone(i, 3)).collect();
        assert_eq!(hits, vec![1, 2, 3]);
    }
}
