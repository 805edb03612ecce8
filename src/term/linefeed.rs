use crate::mach::{Input, Program, Runtime};
use linefeed::complete::Suffix;
use linefeed::{Completer, Completion, DefaultTerminal, Interface, Prompter, ReadResult, Signal, Terminal};
use std::collections::HashMap;
use std::io::{self, ErrorKind};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::debug;

/// Interactive session on a terminal. Returns at end of input.
pub fn interactive(tab_size: usize) -> io::Result<()> {
    let command = Arc::new(Interface::new("BASIC")?);
    command.set_report_signal(Signal::Interrupt, true);
    let mut runtime = Runtime::new(
        Box::new(super::printer(tab_size)),
        Box::new(Prompted {
            interface: command.clone(),
        }),
    );
    let interrupted = runtime.interrupter();
    if let Err(e) = ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst)) {
        return Err(io::Error::new(ErrorKind::Other, e));
    }
    command.write_fmt(format_args!("BASIC\nREADY.\n"))?;
    loop {
        command.set_completer(Arc::new(LineCompleter::new(runtime.program())));
        let line = match command.read_line()? {
            ReadResult::Input(line) => line,
            ReadResult::Signal(Signal::Interrupt) => {
                command.set_buffer("")?;
                command.lock_reader().cancel_read_line()?;
                continue;
            }
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        let immediate = !line.trim_start().starts_with(|c: char| c.is_ascii_digit());
        if runtime.enter(&line) {
            command.add_history_unique(line);
        }
        if immediate {
            command.write_fmt(format_args!("READY.\n"))?;
        }
    }
    debug!("end of input");
    Ok(())
}

/// Answers `INPUT` through the same line editor as the command loop.
struct Prompted {
    interface: Arc<Interface<DefaultTerminal>>,
}

impl Input for Prompted {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.interface.set_prompt(prompt)?;
        let result = self.interface.read_line();
        self.interface.set_prompt("")?;
        match result? {
            ReadResult::Input(line) => Ok(Some(line)),
            ReadResult::Signal(Signal::Interrupt) => {
                self.interface.set_buffer("")?;
                self.interface.lock_reader().cancel_read_line()?;
                Err(io::Error::new(ErrorKind::Interrupted, "BREAK"))
            }
            ReadResult::Signal(_) | ReadResult::Eof => Ok(None),
        }
    }
}

/// Typing a line number then tab recalls that line for editing.
struct LineCompleter {
    lines: HashMap<u16, String>,
}

impl LineCompleter {
    fn new(program: &Program) -> LineCompleter {
        let lines = program
            .statements()
            .filter_map(|s| s.line_number().map(|n| (n, s.text().to_string())))
            .collect();
        LineCompleter { lines }
    }
}

impl<Term: Terminal> Completer<Term> for LineCompleter {
    fn complete(
        &self,
        _word: &str,
        prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        let num = prompter.buffer().trim().parse::<u16>().ok()?;
        let text = self.lines.get(&num)?;
        let mut comp = Completion::simple(text.clone());
        comp.suffix = Suffix::None;
        Some(vec![comp])
    }
}
