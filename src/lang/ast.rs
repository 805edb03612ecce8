use super::{Ident, LineNumber};

/// A parsed line: its number, the source exactly as entered, and the body.
#[derive(Debug, PartialEq)]
pub struct Statement {
    line_number: LineNumber,
    text: String,
    body: Body,
}

impl Statement {
    pub fn new(line_number: LineNumber, text: &str, body: Body) -> Statement {
        Statement {
            line_number,
            text: text.to_string(),
            body,
        }
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

#[derive(Debug, PartialEq)]
pub enum Body {
    Cat,
    End,
    For(Ident, Expression, Expression, Option<Expression>),
    Gosub(u16),
    Goto(u16),
    If(Expression, u16, Option<u16>),
    Input(Option<String>, Ident),
    Let(Ident, Expression),
    List(Option<u16>, Option<u16>),
    Load(String),
    New,
    Next(Option<Ident>),
    Print(Vec<Printable>),
    Rem,
    Return,
    Run,
    Save(String),
}

#[derive(Debug, PartialEq)]
pub enum Printable {
    Expression(Expression),
    Tab,
    Newline,
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(f64),
    String(String),
    Var(Ident),
    Function(String, Vec<Expression>),
    Negation(Box<Expression>),
    Multiply(Box<Expression>, Box<Expression>),
    Divide(Box<Expression>, Box<Expression>),
    Add(Box<Expression>, Box<Expression>),
    Subtract(Box<Expression>, Box<Expression>),
    Equal(Box<Expression>, Box<Expression>),
    NotEqual(Box<Expression>, Box<Expression>),
    Less(Box<Expression>, Box<Expression>),
    LessEqual(Box<Expression>, Box<Expression>),
    Greater(Box<Expression>, Box<Expression>),
    GreaterEqual(Box<Expression>, Box<Expression>),
}
