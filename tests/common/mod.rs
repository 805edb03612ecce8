#![allow(dead_code)]

use basic::mach::{Input, Printer, Runtime};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::io::{self, Write};
use std::rc::Rc;

/// Everything printed, prompts and typed answers included.
#[derive(Clone, Default)]
pub struct Transcript(Rc<RefCell<Vec<u8>>>);

impl Transcript {
    pub fn take(&self) -> String {
        let bytes = std::mem::take(&mut *self.0.borrow_mut());
        String::from_utf8(bytes).unwrap()
    }
}

impl Write for Transcript {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Answers INPUT from a fixed list, echoing like a terminal would.
pub struct Script {
    answers: VecDeque<String>,
    echo: Transcript,
}

impl Input for Script {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.echo.write_all(prompt.as_bytes())?;
        match self.answers.pop_front() {
            Some(answer) => {
                self.echo.write_all(answer.as_bytes())?;
                self.echo.write_all(b"\n")?;
                Ok(Some(answer))
            }
            None => Ok(None),
        }
    }
}

pub struct Session {
    pub runtime: Runtime,
    transcript: Transcript,
}

impl Session {
    pub fn new() -> Session {
        Session::with_input(&[])
    }

    pub fn with_input(answers: &[&str]) -> Session {
        let transcript = Transcript::default();
        let script = Script {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            echo: transcript.clone(),
        };
        let runtime = Runtime::new(
            Box::new(Printer::new(transcript.clone(), 8)),
            Box::new(script),
        );
        Session {
            runtime,
            transcript,
        }
    }

    pub fn enter(&mut self, line: &str) -> bool {
        self.runtime.enter(line)
    }

    pub fn enter_all(&mut self, lines: &[&str]) {
        for line in lines {
            self.enter(line);
        }
    }

    /// Output produced since the last call.
    pub fn output(&mut self) -> String {
        self.transcript.take()
    }
}

/// Enters each line, then RUN, and returns everything printed.
pub fn run(lines: &[&str]) -> String {
    let mut s = Session::new();
    s.enter_all(lines);
    s.enter("RUN");
    s.output()
}

pub fn run_with_input(lines: &[&str], answers: &[&str]) -> String {
    let mut s = Session::with_input(answers);
    s.enter_all(lines);
    s.enter("RUN");
    s.output()
}
