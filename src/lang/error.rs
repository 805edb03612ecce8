use super::{Column, LineNumber};

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    line_number: LineNumber,
    column: Column,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, ..$col:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_column($col)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, ..$col:expr;  $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_column($col)
            .message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            line_number: None,
            column: 0..0,
            message: String::new(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn column(&self) -> Column {
        self.column.clone()
    }

    pub fn detail(&self) -> &str {
        &self.message
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    /// Attaches a line number unless one is already known.
    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        if self.line_number.is_none() {
            self.line_number = line;
        }
        self
    }

    /// Attaches a column unless one is already known.
    pub fn in_column(mut self, column: &Column) -> Error {
        if self.column == (0..0) {
            self.column = column.clone();
        }
        self
    }

    pub fn message<S: Into<String>>(mut self, message: S) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NextWithoutFor,
    SyntaxError,
    ReturnWithoutGosub,
    IllegalFunctionCall,
    OutOfMemory,
    UndefinedLine,
    IllegalDirect,
    TypeMismatch,
    UndefinedFunction,
    Break,
    InternalError,
    FileNotFound,
    DiskIoError,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let code_str = match self {
            NextWithoutFor => "NEXT WITHOUT FOR",
            SyntaxError => "SYNTAX ERROR",
            ReturnWithoutGosub => "RETURN WITHOUT GOSUB",
            IllegalFunctionCall => "ILLEGAL FUNCTION CALL",
            OutOfMemory => "OUT OF MEMORY",
            UndefinedLine => "UNDEFINED LINE",
            IllegalDirect => "ILLEGAL DIRECT",
            TypeMismatch => "TYPE MISMATCH",
            UndefinedFunction => "UNDEFINED FUNCTION",
            Break => "BREAK",
            InternalError => "INTERNAL ERROR",
            FileNotFound => "FILE NOT FOUND",
            DiskIoError => "DISK I/O ERROR",
        };
        write!(f, "{}", code_str)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        if (0..0) != self.column {
            suffix.push_str(&format!(" ({}..{})", self.column.start, self.column.end));
        }
        if suffix.is_empty() {
            write!(f, "{}", self.code)?;
        } else {
            write!(f, "{} IN{}", self.code, suffix)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}
