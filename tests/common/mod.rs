#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Mutex, MutexGuard};

use minish::{Config, ShellState};

/// Tests that read or change the working directory hold this.
static CWD_LOCK: Mutex<()> = Mutex::new(());

pub fn cwd_lock() -> MutexGuard<'static, ()> {
    CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Collects everything written to it; clones share the buffer.
#[derive(Clone, Default)]
pub struct SharedBuf(Rc<RefCell<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub struct Harness {
    pub state: ShellState,
    pub out: SharedBuf,
    pub err: SharedBuf,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(Config::default_config())
    }

    pub fn with_config(config: Config) -> Self {
        let out = SharedBuf::default();
        let err = SharedBuf::default();
        let state = ShellState::with_output(config, Box::new(out.clone()), Box::new(err.clone()));
        Harness { state, out, err }
    }

    pub fn run(&mut self, line: &str) -> minish::ExecutionResult {
        minish::execute_line(line, &mut self.state)
    }

    pub fn previous(&self) -> Option<&str> {
        self.state.history.previous()
    }
}

pub fn path_str(p: &Path) -> String {
    p.to_str().expect("temp paths are utf-8").to_string()
}

pub fn canonical(p: &Path) -> PathBuf {
    p.canonicalize().unwrap()
}
