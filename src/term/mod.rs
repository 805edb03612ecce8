/*!
## Terminal Module

Front ends that connect a runtime to the process's stdin and stdout.

*/

use crate::mach::{Input, LineInput, Printer, Runtime};
use std::cell::RefCell;
use std::fs;
use std::io::{self, BufReader};
use std::path::Path;
use std::rc::Rc;
use tracing::info;

mod linefeed;

pub use self::linefeed::interactive;

fn printer(tab_size: usize) -> Printer<io::Stdout> {
    Printer::new(io::stdout(), tab_size).styled(atty::is(atty::Stream::Stdout))
}

/// Loads a program file and runs it. Returns false if any line failed to
/// parse or the run stopped on an error.
pub fn run_file(path: &Path, tab_size: usize) -> io::Result<bool> {
    let source = fs::read_to_string(path)?;
    info!(path = %path.display(), "loading program");
    let mut runtime = Runtime::new(
        Box::new(printer(tab_size)),
        Box::new(LineInput::new(BufReader::new(io::stdin()), io::stdout())),
    );
    let parsed = runtime.load_str(&source);
    let ran = runtime.run();
    Ok(parsed && ran)
}

/// An input source shared between the command loop and `INPUT`.
struct Shared(Rc<RefCell<dyn Input>>);

impl Input for Shared {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.0.borrow_mut().read_line(prompt)
    }
}

/// Reads lines from a stdin that is not a terminal, entering each one as
/// if typed. `INPUT` answers come from the same stream.
pub fn piped(tab_size: usize) -> io::Result<()> {
    let stdin: Rc<RefCell<dyn Input>> = Rc::new(RefCell::new(LineInput::new(
        BufReader::new(io::stdin()),
        io::stdout(),
    )));
    let mut runtime = Runtime::new(Box::new(printer(tab_size)), Box::new(Shared(stdin.clone())));
    loop {
        let line = stdin.borrow_mut().read_line("")?;
        match line {
            Some(line) => {
                runtime.enter(&line);
            }
            None => break,
        }
    }
    Ok(())
}
