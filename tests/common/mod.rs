//! Shared test helpers.

#![allow(dead_code)]

use std::path::PathBuf;

use rchars::{FormControl, InputHandle, SetValueOptions};

/// Create a temp dir with one file of `lines`. Returns (guard, file path).
pub fn input_file(lines: &[&str]) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("values.txt");
    std::fs::write(&path, lines.join("\n")).unwrap();
    (dir, path)
}

/// Input handle that counts direct writes.
#[derive(Debug, Default)]
pub struct RecordingInput {
    pub value: String,
    pub writes: usize,
}

impl RecordingInput {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            writes: 0,
        }
    }
}

impl InputHandle for RecordingInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: String) {
        self.value = value;
        self.writes += 1;
    }
}

/// Form control that records every `set_value` call.
#[derive(Debug, Default)]
pub struct SpyControl {
    pub calls: Vec<(String, SetValueOptions)>,
}

impl FormControl for SpyControl {
    fn set_value(&mut self, value: &str, options: SetValueOptions) {
        self.calls.push((value.to_string(), options));
    }
}
