use super::program::Index;
use super::stack::Frame;
use super::*;
use crate::error;
use crate::lang::{ast::Statement, parse, Error, Mode};
use std::io::{self, BufReader};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};

type Result<T> = std::result::Result<T, Error>;

/// ## Execution engine
///
/// Owns the program, the variables and the scope stack. A `RUN` walks a
/// snapshot of the program one statement at a time; statements request
/// jumps by setting `pending`.

pub struct Runtime {
    pub(super) program: Program,
    pub(super) index: Index,
    pub(super) vars: Var,
    pub(super) stack: Stack<Frame>,
    pub(super) functions: Function,
    pub(super) pc: Address,
    pub(super) pending: Option<Address>,
    pub(super) running: bool,
    pub(super) output: Box<dyn Output>,
    pub(super) input: Box<dyn Input>,
    interrupted: Arc<AtomicBool>,
}

impl Default for Runtime {
    fn default() -> Runtime {
        Runtime::new(
            Box::new(Printer::new(io::stdout(), 8)),
            Box::new(LineInput::new(BufReader::new(io::stdin()), io::stdout())),
        )
    }
}

impl Runtime {
    pub fn new(output: Box<dyn Output>, input: Box<dyn Input>) -> Runtime {
        Runtime {
            program: Program::new(),
            index: Index::default(),
            vars: Var::new(),
            stack: Stack::new("SCOPE STACK OVERFLOW"),
            functions: Function::new(),
            pc: 0,
            pending: None,
            running: false,
            output,
            input,
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn set_program(&mut self, program: Program) {
        self.program = program;
        self.running = false;
    }

    pub fn set_input(&mut self, input: Box<dyn Input>) {
        self.input = input;
    }

    pub fn functions_mut(&mut self) -> &mut Function {
        &mut self.functions
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flag polled between statements. Setting it stops a run with BREAK.
    pub fn interrupter(&self) -> Arc<AtomicBool> {
        self.interrupted.clone()
    }

    pub fn interrupt(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    /// Loads a source text as the program, reporting lines that fail to
    /// parse. Returns false if any line failed.
    pub fn load_str(&mut self, source: &str) -> bool {
        let mut program = Program::new();
        let errors = program.load_str(source);
        for e in &errors {
            self.output.diagnostic(e);
        }
        self.set_program(program);
        errors.is_empty()
    }

    /// Interactive entry. Numbered lines are stored, anything else runs now.
    /// Returns true when the line was accepted.
    pub fn enter(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        let stmt = match parse(line, Mode::Interactive) {
            Ok(stmt) => stmt,
            Err(e) => {
                self.output.diagnostic(&e);
                return false;
            }
        };
        match stmt.line_number() {
            Some(n) => {
                if !self.program.insert(stmt) {
                    warn!(line = n, "line not stored");
                    self.output
                        .diagnostic(&error!(SyntaxError, Some(n); "INVALID LINE NUMBER"));
                    return false;
                }
                true
            }
            None => {
                self.execute_statement(&stmt);
                true
            }
        }
    }

    /// Runs one statement outside of a program run. Errors are reported
    /// and only abort this statement.
    pub fn execute_statement(&mut self, stmt: &Statement) -> bool {
        let result = self.execute(stmt);
        let ok = match result {
            Ok(()) => true,
            Err(e) => {
                self.output
                    .diagnostic(&e.in_line_number(stmt.line_number()));
                false
            }
        };
        self.output.flush();
        ok
    }

    /// Runs the stored program from the top. Returns false if it stopped
    /// on an error.
    pub fn run(&mut self) -> bool {
        self.interrupted.store(false, Ordering::SeqCst);
        self.pending = None;
        self.index = self.program.index();
        self.stack.clear();
        self.pc = 0;
        self.running = true;
        info!(statements = self.index.len(), "run");
        let mut ok = true;
        while self.running && self.pc < self.index.len() {
            if let Err(e) = self.step() {
                self.output.diagnostic(&e);
                ok = false;
                break;
            }
        }
        self.running = false;
        self.stack.clear();
        self.output.flush();
        info!(ok = ok, "run finished");
        ok
    }

    fn step(&mut self) -> Result<()> {
        let stmt = match self.index.get(self.pc) {
            Some(stmt) => stmt,
            None => {
                self.running = false;
                return Ok(());
            }
        };
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Break, stmt.line_number()));
        }
        self.pending = None;
        debug!(pc = self.pc, line = ?stmt.line_number(), "execute");
        self.execute(&stmt)
            .map_err(|e| e.in_line_number(stmt.line_number()))?;
        match self.pending.take() {
            Some(addr) => self.pc = addr,
            None => self.pc += 1,
        }
        Ok(())
    }

    /// Requests a jump to `line` once the current statement finishes.
    pub(super) fn goto(&mut self, line: u16) -> Result<()> {
        match self.index.resolve(line) {
            Some(addr) => {
                debug!(line = line, addr = addr, "jump");
                self.pending = Some(addr);
                Ok(())
            }
            None => Err(error!(UndefinedLine; format!("LINE NUMBER {} DOES NOT EXIST", line))),
        }
    }
}
