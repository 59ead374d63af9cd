// src/progress.rs
/// Progress reporting for the scrape job.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages that may be fetched.
    fn begin(&mut self, _pages: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page came back with results.
    fn page_done(&mut self, _start: usize, _results: usize) {}

    /// A page came back with an error payload; pagination stops here.
    fn page_failed(&mut self, _start: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Prints progress lines to stderr.
pub struct StderrProgress {
    total: usize,
    done: usize,
}

impl StderrProgress {
    pub fn new() -> Self { Self { total: 0, done: 0 } }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, pages: usize) {
        self.total = pages;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn page_done(&mut self, start: usize, results: usize) {
        self.done += 1;
        eprintln!("Page at {start}: {results} results ({}/{})", self.done, self.total);
    }
    fn page_failed(&mut self, start: usize, reason: &str) {
        eprintln!("Page at {start}: stopped ({reason})");
    }
    fn finish(&mut self) {
        eprintln!("Done ({} page(s))", self.done);
    }
}
