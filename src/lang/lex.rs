use super::{token::*, Column};
use std::iter::Peekable;
use std::str::CharIndices;

fn is_basic_whitespace(c: char) -> bool {
    c.is_ascii_whitespace()
}

fn is_basic_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_basic_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// ## On-demand tokenizer for a single line
///
/// Only the current token exists at any time. The span of the most
/// recent token is kept so callers can recover its exact source text.
pub struct Lexer<'a> {
    line: &'a str,
    chars: Peekable<CharIndices<'a>>,
    span: Column,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str) -> Lexer<'a> {
        Lexer {
            line,
            chars: line.char_indices().peekable(),
            span: 0..0,
        }
    }

    pub fn span(&self) -> Column {
        self.span.clone()
    }

    pub fn text(&self) -> &'a str {
        &self.line[self.span.clone()]
    }

    fn offset(&mut self) -> usize {
        match self.chars.peek() {
            Some((index, _)) => *index,
            None => self.line.len(),
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    fn bump(&mut self) {
        self.chars.next();
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_basic_whitespace(ch) {
                break;
            }
            self.bump();
        }
    }

    fn digits(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_basic_digit(ch) {
                break;
            }
            self.bump();
        }
    }

    /// Consumes the digits of a leading line number, if there is one.
    pub fn line_number(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let start = self.offset();
        self.digits();
        let end = self.offset();
        self.span = start..end;
        if start == end {
            None
        } else {
            Some(self.text())
        }
    }

    /// Consumes everything left on the line.
    pub fn rest(&mut self) -> &'a str {
        let start = self.offset();
        while self.chars.next().is_some() {}
        self.span = start..self.line.len();
        self.text()
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let start = self.offset();
        let token = match self.peek() {
            None => Token::End,
            Some(ch) if is_basic_digit(ch) => self.number(start),
            Some(ch) if is_basic_alphabetic(ch) => self.alphabetic(start),
            Some('"') => self.string(),
            Some(_) => self.minutia(),
        };
        self.span = start..self.offset();
        token
    }

    fn number(&mut self, start: usize) -> Token {
        self.digits();
        if let Some('.') = self.peek() {
            self.bump();
            self.digits();
        }
        if let Some('e') | Some('E') = self.peek() {
            self.bump();
            if let Some('+') | Some('-') = self.peek() {
                self.bump();
            }
            match self.peek() {
                Some(ch) if is_basic_digit(ch) => self.digits(),
                _ => return Token::Error("INVALID NUMBER"),
            }
        }
        let end = self.offset();
        match self.line[start..end].parse::<f64>() {
            Ok(n) => Token::Number(n),
            Err(_) => Token::Error("INVALID NUMBER"),
        }
    }

    fn alphabetic(&mut self, start: usize) -> Token {
        while let Some(ch) = self.peek() {
            if !is_basic_alphabetic(ch) {
                break;
            }
            self.bump();
        }
        if let Some('$') = self.peek() {
            self.bump();
        }
        let end = self.offset();
        Token::Ident(self.line[start..end].to_string())
    }

    fn string(&mut self) -> Token {
        self.bump();
        let mut s = String::new();
        loop {
            match self.chars.next() {
                Some((_, '"')) => return Token::String(s),
                Some((_, ch)) => s.push(ch),
                None => return Token::Error("UNTERMINATED STRING"),
            }
        }
    }

    fn minutia(&mut self) -> Token {
        use Operator::*;
        let ch = match self.chars.next() {
            Some((_, ch)) => ch,
            None => return Token::End,
        };
        let op = match ch {
            '+' => Plus,
            '-' => Minus,
            '*' => Multiply,
            '/' => Divide,
            '(' => LParen,
            ')' => RParen,
            ',' => Comma,
            ';' => Semicolon,
            '=' => Equal,
            '<' => match self.peek() {
                Some('=') => {
                    self.bump();
                    LessEqual
                }
                Some('>') => {
                    self.bump();
                    NotEqual
                }
                _ => Less,
            },
            '>' => match self.peek() {
                Some('=') => {
                    self.bump();
                    GreaterEqual
                }
                _ => Greater,
            },
            _ => return Token::Error("UNEXPECTED CHARACTER"),
        };
        Token::Operator(op)
    }
}
