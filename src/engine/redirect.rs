use std::fs::{File, OpenOptions};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use crate::error::{Result, ShellError};

pub const STDIN_MARKER: &str = "<";
pub const STDOUT_MARKER: &str = ">";

/// An argument vector with its redirections pulled out.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Redirection {
    pub argv: Vec<String>,
    pub input: Option<String>,
    pub output: Option<String>,
}

/// Remove every `<` / `>` marker and the word after it from `argv`.
///
/// The command name is never treated as a marker. When a direction appears
/// more than once the last target wins. A marker at the very end is dropped
/// without recording a path. No file is touched here.
pub fn extract_redirection(mut argv: Vec<String>) -> Redirection {
    let mut input = None;
    let mut output = None;

    let mut i = 1;
    while i < argv.len() {
        let slot = match argv[i].as_str() {
            STDIN_MARKER => &mut input,
            STDOUT_MARKER => &mut output,
            _ => {
                i += 1;
                continue;
            }
        };
        argv.remove(i);
        if i < argv.len() {
            *slot = Some(argv.remove(i));
        }
    }

    Redirection { argv, input, output }
}

/// Open a file for an input redirect (stdin).
pub fn open_stdin_redirect(path: &str) -> Result<File> {
    File::open(path).map_err(|source| ShellError::OpenInput {
        path: path.to_string(),
        source,
    })
}

/// Open a file for an output redirect (stdout), truncating what was there.
pub fn open_stdout_redirect(path: &str) -> Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);
    options.open(path).map_err(|source| ShellError::OpenOutput {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_markers_is_untouched() {
        let r = extract_redirection(argv(&["ls", "-l"]));
        assert_eq!(r.argv, argv(&["ls", "-l"]));
        assert_eq!(r.input, None);
        assert_eq!(r.output, None);
    }

    #[test]
    fn both_directions() {
        let r = extract_redirection(argv(&["sort", "<", "in.txt", "-r", ">", "out.txt"]));
        assert_eq!(r.argv, argv(&["sort", "-r"]));
        assert_eq!(r.input.as_deref(), Some("in.txt"));
        assert_eq!(r.output.as_deref(), Some("out.txt"));
    }

    #[test]
    fn last_occurrence_wins() {
        let r = extract_redirection(argv(&["cat", ">", "a", ">", "b"]));
        assert_eq!(r.argv, argv(&["cat"]));
        assert_eq!(r.output.as_deref(), Some("b"));
    }

    #[test]
    fn adjacent_markers() {
        let r = extract_redirection(argv(&["cat", "<", "in", ">", "out"]));
        assert_eq!(r.argv, argv(&["cat"]));
        assert_eq!(r.input.as_deref(), Some("in"));
        assert_eq!(r.output.as_deref(), Some("out"));
    }

    #[test]
    fn trailing_marker_is_dropped() {
        let r = extract_redirection(argv(&["ls", "-a", ">"]));
        assert_eq!(r.argv, argv(&["ls", "-a"]));
        assert_eq!(r.output, None);
    }

    #[test]
    fn command_name_is_never_a_marker() {
        let r = extract_redirection(argv(&[">", "file"]));
        assert_eq!(r.argv, argv(&[">", "file"]));
        assert_eq!(r.output, None);
    }

    #[test]
    fn output_open_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old contents that are long").unwrap();
        let path = path.to_str().unwrap();
        drop(open_stdout_redirect(path).unwrap());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "");
    }

    #[test]
    fn missing_input_is_reported() {
        let err = open_stdin_redirect("/definitely/not/here.txt").unwrap_err();
        assert_eq!(err.to_string(), "Could not open input file /definitely/not/here.txt");
    }
}
