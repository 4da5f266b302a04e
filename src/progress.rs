// src/progress.rs
/// Lightweight progress reporting used by long-running operations (fetching pages).
/// The CLI implements this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a page was fetched).
    fn item_done(&mut self, _page: u32, _collected: usize) {}

    /// Called when one unit failed and was skipped.
    fn item_failed(&mut self, _page: u32, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Records every call; handy in tests.
#[derive(Debug, Default)]
pub struct RecordingProgress {
    pub total: Option<usize>,
    pub lines: Vec<String>,
    pub done: Vec<u32>,
    pub failed: Vec<u32>,
    pub finished: bool,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, total: usize) { self.total = Some(total); }
    fn log(&mut self, msg: &str) { self.lines.push(s!(msg)); }
    fn item_done(&mut self, page: u32, _collected: usize) { self.done.push(page); }
    fn item_failed(&mut self, page: u32, _err: &str) { self.failed.push(page); }
    fn finish(&mut self) { self.finished = true; }
}
