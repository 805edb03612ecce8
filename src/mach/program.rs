use super::Address;
use crate::lang::{ast::Statement, parse, Error, Mode};
use std::rc::Rc;
use tracing::warn;

/// ## Stored program
///
/// Statements are kept ordered by line number with no duplicates.

#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<Rc<Statement>>,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    /// Parses a whole source text. Lines that fail to parse are
    /// returned as errors and skipped; parsing resumes on the next line.
    pub fn load_str(&mut self, source: &str) -> Vec<Error> {
        let mut errors = vec![];
        for line in source.lines() {
            if line.trim().is_empty() {
                continue;
            }
            match parse(line, Mode::Batch) {
                Ok(stmt) => {
                    if !self.insert(stmt) {
                        warn!(line = %line.trim(), "discarding line without a line number");
                    }
                }
                Err(e) => errors.push(e),
            }
        }
        errors
    }

    /// Returns false when the statement has no usable line number.
    pub fn insert(&mut self, stmt: Statement) -> bool {
        let number = match stmt.line_number() {
            None | Some(0) => return false,
            Some(n) => n,
        };
        match self
            .statements
            .binary_search_by_key(&number, |s| s.line_number().unwrap_or(0))
        {
            Ok(idx) => self.statements[idx] = Rc::new(stmt),
            Err(idx) => self.statements.insert(idx, Rc::new(stmt)),
        }
        true
    }

    /// The statement at or before `line`.
    pub fn find(&self, line: u16) -> Option<&Statement> {
        let idx = match self
            .statements
            .binary_search_by_key(&line, |s| s.line_number().unwrap_or(0))
        {
            Ok(idx) => idx,
            Err(0) => return None,
            Err(idx) => idx - 1,
        };
        self.statements.get(idx).map(|s| s.as_ref())
    }

    pub fn clear(&mut self) {
        self.statements.clear();
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().map(|s| s.as_ref())
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.statements.iter().map(|s| s.text())
    }

    pub fn index(&self) -> Index {
        Index {
            statements: self.statements.clone(),
        }
    }
}

/// Flattened snapshot of a program taken when it starts running.
#[derive(Debug, Default, Clone)]
pub struct Index {
    statements: Vec<Rc<Statement>>,
}

impl Index {
    pub fn get(&self, addr: Address) -> Option<Rc<Statement>> {
        self.statements.get(addr).cloned()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn resolve(&self, line: u16) -> Option<Address> {
        self.statements
            .binary_search_by_key(&line, |s| s.line_number().unwrap_or(0))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn program(lines: &[&str]) -> Program {
        let mut p = Program::new();
        for line in lines {
            let stmt = parse(line, Mode::Batch).unwrap();
            assert!(p.insert(stmt));
        }
        p
    }

    #[test]
    fn test_ordered_insert() {
        let p = program(&["30 END", "10 PRINT 1", "20 PRINT 2"]);
        assert_eq!(
            p.lines().collect::<Vec<_>>(),
            vec!["10 PRINT 1", "20 PRINT 2", "30 END"]
        );
    }

    #[test]
    fn test_replace_keeps_count() {
        let mut p = program(&["10 PRINT 1", "20 PRINT 2", "30 END"]);
        assert!(p.insert(parse("20 PRINT \"TWO\"", Mode::Batch).unwrap()));
        assert_eq!(p.len(), 3);
        assert_eq!(
            p.lines().collect::<Vec<_>>(),
            vec!["10 PRINT 1", "20 PRINT \"TWO\"", "30 END"]
        );
    }

    #[test]
    fn test_no_line_number_not_inserted() {
        let mut p = Program::new();
        assert!(!p.insert(parse("PRINT 1", Mode::Interactive).unwrap()));
        assert!(!p.insert(parse("0 PRINT 1", Mode::Batch).unwrap()));
        assert!(p.is_empty());
    }

    #[test]
    fn test_find_at_or_before() {
        let p = program(&["10 END", "20 END", "40 END"]);
        assert_eq!(p.find(20).and_then(|s| s.line_number()), Some(20));
        assert_eq!(p.find(35).and_then(|s| s.line_number()), Some(20));
        assert!(p.find(5).is_none());
    }

    #[test]
    fn test_index_resolve() {
        let p = program(&["10 END", "20 END", "40 END"]);
        let index = p.index();
        assert_eq!(index.resolve(40), Some(2));
        assert_eq!(index.resolve(30), None);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_load_str_skips_bad_lines() {
        let mut p = Program::new();
        let errors = p.load_str("10 PRINT 1\n20 FOO\n\nPRINT 2\n30 END\n");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line_number(), Some(20));
        assert_eq!(p.len(), 2);
    }
}
