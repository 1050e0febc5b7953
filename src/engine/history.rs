/// The single remembered command line.
///
/// Only the launcher writes to it, and only after a launch attempt has
/// resolved; builtins never do.
#[derive(Debug, Default, Clone)]
pub struct History {
    previous: Option<String>,
}

impl History {
    /// Remember `argv` (already stripped of redirections) joined by spaces.
    pub fn record_launch(&mut self, argv: &[String]) {
        self.previous = Some(argv.join(" "));
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }
}
