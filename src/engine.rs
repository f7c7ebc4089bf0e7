//! Query engine boundary.
//!
//! The engine that executes queries lives outside this crate. It receives one
//! encoded payload as text and answers with text; diagnostics on its error
//! channel mean the request failed. Nothing else about it is assumed.

use crate::error::{Error, Result};
use crate::query::wire::{self, WireFormat};
use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, instrument, warn};

/// Executes encoded payloads.
pub trait QueryEngine {
    /// Run one encoded payload and return the engine's answer.
    fn execute(&self, payload: &str) -> Result<String>;
}

impl<E: QueryEngine + ?Sized> QueryEngine for Box<E> {
    fn execute(&self, payload: &str) -> Result<String> {
        (**self).execute(payload)
    }
}

/// Encode `payload` and hand it to `engine`.
pub fn submit<E, P>(engine: &E, payload: &P) -> Result<String>
where
    E: QueryEngine + ?Sized,
    P: WireFormat,
{
    let text = wire::encode(payload)?;
    engine.execute(&text)
}

/// Runs an external program with the payload as its last argument.
///
/// Standard output is the answer. A non-zero exit status or any output on
/// standard error fails the request with the stderr text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEngine {
    program: PathBuf,
    args: Vec<String>,
}

impl ProcessEngine {
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Arguments placed before the payload
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }
}

impl QueryEngine for ProcessEngine {
    #[instrument(skip(self, payload), fields(program = %self.program.display()))]
    fn execute(&self, payload: &str) -> Result<String> {
        debug!(bytes = payload.len(), "Sending payload to engine");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(payload)
            .output()
            .map_err(|e| {
                Error::Engine(format!("failed to start {}: {}", self.program.display(), e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            warn!(status = %output.status, "Engine exited with failure");
            return Err(Error::Engine(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }
        if !stderr.trim().is_empty() {
            warn!("Engine reported diagnostics");
            return Err(Error::Engine(stderr.trim().to_string()));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::Engine(format!("engine output is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::match_all;
    use std::cell::RefCell;

    struct Recorder {
        seen: RefCell<Vec<String>>,
    }

    impl QueryEngine for Recorder {
        fn execute(&self, payload: &str) -> Result<String> {
            self.seen.borrow_mut().push(payload.to_string());
            Ok("[]".to_string())
        }
    }

    #[test]
    fn test_submit_encodes_payload() {
        let engine = Recorder {
            seen: RefCell::new(Vec::new()),
        };
        let answer = submit(&engine, &match_all()).unwrap();
        assert_eq!(answer, "[]");
        assert_eq!(
            engine.seen.borrow().as_slice(),
            [r#"{"Search":{"Op":"AND","Query":[]}}"#.to_string()]
        );
    }

    #[test]
    fn test_boxed_engine() {
        let engine: Box<dyn QueryEngine> = Box::new(Recorder {
            seen: RefCell::new(Vec::new()),
        });
        assert!(submit(&engine, &match_all()).is_ok());
    }

    #[test]
    fn test_missing_program() {
        let engine = ProcessEngine::new("/nonexistent/w3query-engine");
        let err = engine.execute("{}").unwrap_err();
        assert!(matches!(err, Error::Engine(msg) if msg.contains("failed to start")));
    }

    #[cfg(unix)]
    #[test]
    fn test_process_round_trip() {
        let engine = ProcessEngine::new("/bin/sh").with_args(vec![
            "-c".to_string(),
            "printf '%s' \"$0\"".to_string(),
        ]);
        assert_eq!(engine.execute("hello").unwrap(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_process_stderr_fails() {
        let engine = ProcessEngine::new("/bin/sh").with_args(vec![
            "-c".to_string(),
            "echo 'no such field' >&2".to_string(),
        ]);
        let err = engine.execute("{}").unwrap_err();
        assert_eq!(err, Error::Engine("no such field".to_string()));
    }
}
