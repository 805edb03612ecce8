use super::stack::{Frame, Kind};
use super::{disk, Runtime, Val};
use crate::error;
use crate::lang::ast::{Body, Expression, Printable, Statement};
use crate::lang::{Error, Ident, MAX_LINE_NUMBER};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    pub(super) fn execute(&mut self, stmt: &Statement) -> Result<()> {
        use Body::*;
        match stmt.body() {
            Cat => self.r#cat(),
            End => {
                self.running = false;
                Ok(())
            }
            For(var, start, limit, step) => self.r#for(var, start, limit, step.as_ref()),
            Gosub(line) => self.r#gosub(*line),
            Goto(line) => self.goto(*line),
            If(predicate, then, r#else) => self.r#if(predicate, *then, *r#else),
            Input(prompt, var) => self.r#input(prompt.as_deref(), var),
            Let(var, expr) => {
                let val = self.evaluate(expr)?;
                self.vars.store(var, val)
            }
            List(first, last) => self.r#list(*first, *last),
            Load(name) => self.r#load(name),
            New => {
                self.program.clear();
                self.running = false;
                Ok(())
            }
            Next(var) => self.r#next(var.as_ref()),
            Print(items) => self.r#print(items),
            Rem => Ok(()),
            Return => self.r#return(),
            Run => {
                self.run();
                Ok(())
            }
            Save(name) => self.r#save(name),
        }
    }

    fn number(&mut self, expr: &Expression, what: &str) -> Result<f64> {
        match self.evaluate(expr)? {
            Val::Number(n) => Ok(n),
            val => Err(error!(TypeMismatch; format!(
                "FOR LOOP {} MUST BE NUMBER, NOT {}",
                what,
                val.type_name()
            ))),
        }
    }

    fn r#for(
        &mut self,
        var: &Ident,
        start: &Expression,
        limit: &Expression,
        step: Option<&Expression>,
    ) -> Result<()> {
        let initial = self.evaluate(start)?;
        self.vars.store(var, initial)?;
        let limit = self.number(limit, "LIMIT")?;
        let step = match step {
            Some(expr) => self.number(expr, "STEP")?,
            None => 1.0,
        };
        self.stack.push(Frame::For {
            var: var.clone(),
            limit,
            step,
            top: self.pc + 1,
        })
    }

    fn r#next(&mut self, named: Option<&Ident>) -> Result<()> {
        let (var, limit, step, top) = match self.stack.last() {
            Some(Frame::For {
                var,
                limit,
                step,
                top,
            }) => (var.clone(), *limit, *step, *top),
            _ => return Err(error!(NextWithoutFor; "NESTING ERROR")),
        };
        if let Some(named) = named {
            if named.name() != var.name() {
                return Err(error!(NextWithoutFor; format!(
                    "NEXT INDEX {} DOES NOT MATCH FOR INDEX {}",
                    named, var
                )));
            }
        }
        let index = self.vars.increment(&var, step)?;
        let more = if step < 0.0 {
            index >= limit
        } else {
            index <= limit
        };
        if more {
            self.pending = Some(top);
        } else {
            self.stack.pop()?;
        }
        Ok(())
    }

    fn r#gosub(&mut self, line: u16) -> Result<()> {
        self.stack.push(Frame::Gosub { ret: self.pc + 1 })?;
        self.goto(line)
    }

    fn r#return(&mut self) -> Result<()> {
        let ret = match self.stack.pop_until(Kind::Gosub) {
            Some(Frame::Gosub { ret }) => *ret,
            _ => return Err(error!(ReturnWithoutGosub)),
        };
        self.stack.pop()?;
        debug!(addr = ret, "return");
        self.pending = Some(ret);
        Ok(())
    }

    fn r#if(&mut self, predicate: &Expression, then: u16, r#else: Option<u16>) -> Result<()> {
        match self.evaluate(predicate)? {
            Val::Boolean(true) => self.goto(then),
            Val::Boolean(false) => match r#else {
                Some(line) => self.goto(line),
                None => Ok(()),
            },
            _ => Err(error!(TypeMismatch; "IF EXPRESSION NOT COMPARISON")),
        }
    }

    fn r#print(&mut self, items: &[Printable]) -> Result<()> {
        for item in items {
            match item {
                Printable::Expression(expr) => {
                    let val = self.evaluate(expr)?;
                    self.output.print(&val.to_string());
                }
                Printable::Tab => self.output.print("\t"),
                Printable::Newline => self.output.print("\n"),
            }
        }
        Ok(())
    }

    fn r#input(&mut self, prompt: Option<&str>, var: &Ident) -> Result<()> {
        let prompt = format!("{}? ", prompt.unwrap_or(""));
        loop {
            self.output.flush();
            let line = match self.input.read_line(&prompt) {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::Interrupted => return Err(error!(Break)),
                Err(e) => {
                    return Err(error!(InternalError; format!(
                        "ERROR READING TERMINAL INPUT; {}",
                        e
                    )))
                }
            };
            self.output.set_column(0);
            let val = match line {
                None if var.is_string() => Val::String(String::new()),
                None => Val::Number(0.0),
                Some(s) if var.is_string() => Val::String(s),
                Some(s) => match leading_number(&s) {
                    Some(n) => Val::Number(n),
                    None => {
                        self.output.print("INVALID INPUT\n");
                        continue;
                    }
                },
            };
            return self.vars.store(var, val);
        }
    }

    fn r#list(&mut self, first: Option<u16>, last: Option<u16>) -> Result<()> {
        let first = first.unwrap_or(0);
        let last = last.unwrap_or(MAX_LINE_NUMBER);
        let mut listing = String::new();
        for stmt in self.program.statements() {
            match stmt.line_number() {
                Some(n) if n < first => continue,
                Some(n) if n > last => break,
                _ => {}
            }
            listing.push_str(stmt.text());
            listing.push('\n');
        }
        self.output.print(&listing);
        Ok(())
    }

    fn r#load(&mut self, name: &str) -> Result<()> {
        let source = disk::load(name)?;
        if !self.load_str(&source) {
            return Err(error!(DiskIoError; format!("FAILED TO LOAD {}", name)));
        }
        Ok(())
    }

    fn r#save(&mut self, name: &str) -> Result<()> {
        if self.program.is_empty() {
            return Err(error!(DiskIoError; "NOTHING TO SAVE"));
        }
        disk::save(name, self.program.lines())
    }

    fn r#cat(&mut self) -> Result<()> {
        const COLS: usize = 4;
        if let Some(header) = catalog_header(std::env::var("UID").ok().as_deref()) {
            self.output.print(&header);
        }
        let files = disk::catalog(Path::new("."))?;
        for (i, (name, ext)) in files.iter().enumerate() {
            self.output.print(&format!("{:<8} {:<3}    ", name, ext));
            if (i + 1) % COLS == 0 {
                self.output.print("\n");
            }
        }
        if files.len() % COLS != 0 {
            self.output.print("\n");
        }
        Ok(())
    }
}

/// Shown above a listing when `UID` names a user other than 0.
fn catalog_header(uid: Option<&str>) -> Option<String> {
    let uid = uid?.trim().parse::<i32>().ok()?;
    if uid == 0 {
        return None;
    }
    Some(format!("\nCATALOG FOR USER {:>9}\n\n", uid))
}

/// Longest numeric prefix after leading whitespace.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let mut ends: Vec<usize> = s.char_indices().map(|(i, _)| i).skip(1).collect();
    ends.push(s.len());
    ends.iter().rev().find_map(|&end| s[..end].parse::<f64>().ok())
}
