//! The prefix block resolver.
//!
//! A line containing only a bare key followed by a line containing only `{`
//! opens a prefix block; every property inside is qualified with the stack
//! of enclosing block names joined by `.`. The bare key is *pending* until
//! the `{` actually arrives, because the same syntax (a key without `=`)
//! is also a legal empty-valued property on its own.

/// Stack of active prefix segments, plus the pending segment that a
/// following `{` line would commit.
#[derive(Debug, Default)]
pub(crate) struct PrefixStack {
    segments: Vec<String>,
    pending: String,
}

impl PrefixStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a bare key as the candidate prefix for a following block.
    pub(crate) fn set_pending(&mut self, key: &str) {
        self.pending = key.to_string();
    }

    /// Clears the pending prefix; called when a `key = value` line shows the
    /// previous bare key was not a block header.
    pub(crate) fn clear_pending(&mut self) {
        self.pending.clear();
    }

    /// Commits the pending prefix on a `{` line. A block with no preceding
    /// bare key contributes no segment.
    pub(crate) fn open_block(&mut self) {
        if !self.pending.is_empty() {
            self.segments.push(std::mem::take(&mut self.pending));
        }
    }

    /// Pops the innermost segment on a `}` line. Popping an empty stack is a
    /// no-op: unbalanced closers are tolerated.
    pub(crate) fn close_block(&mut self) {
        self.segments.pop();
    }

    /// Qualifies a bare key with the active prefix.
    ///
    /// Segments are joined by `.` with a trailing `.` before the bare key;
    /// an empty stack returns the key unchanged.
    pub(crate) fn qualify(&self, bare_key: &str) -> String {
        if self.segments.is_empty() {
            return bare_key.to_string();
        }

        let mut key = String::with_capacity(
            self.segments.iter().map(|s| s.len() + 1).sum::<usize>() + bare_key.len(),
        );
        for segment in &self.segments {
            key.push_str(segment);
            key.push('.');
        }
        key.push_str(bare_key);
        key
    }
}
