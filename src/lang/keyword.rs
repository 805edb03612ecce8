use super::ast::Body;
use super::parse::{self, Parser};
use super::Error;

type ParseFn = fn(&mut Parser) -> Result<Body, Error>;

const PROGRAM: u8 = 0x01;
const IMMEDIATE: u8 = 0x02;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Program,
    Immediate,
}

pub struct Keyword {
    pub name: &'static str,
    flags: u8,
    pub parse: ParseFn,
}

impl Keyword {
    pub fn allows(&self, context: Context) -> bool {
        let flag = match context {
            Context::Program => PROGRAM,
            Context::Immediate => IMMEDIATE,
        };
        self.flags & flag != 0
    }
}

macro_rules! keyword {
    ($name:expr, $flags:expr, $parse:path) => {
        Keyword {
            name: $name,
            flags: $flags,
            parse: $parse,
        }
    };
}

static KEYWORDS: &[Keyword] = &[
    keyword!("LET", PROGRAM | IMMEDIATE, parse::r#let),
    keyword!("PRINT", PROGRAM | IMMEDIATE, parse::r#print),
    keyword!("INPUT", PROGRAM | IMMEDIATE, parse::r#input),
    keyword!("REM", PROGRAM | IMMEDIATE, parse::r#rem),
    keyword!("IF", PROGRAM, parse::r#if),
    keyword!("GOTO", PROGRAM, parse::r#goto),
    keyword!("GOSUB", PROGRAM, parse::r#gosub),
    keyword!("RETURN", PROGRAM, parse::r#return),
    keyword!("FOR", PROGRAM, parse::r#for),
    keyword!("NEXT", PROGRAM, parse::r#next),
    keyword!("END", PROGRAM, parse::r#end),
    keyword!("RUN", IMMEDIATE, parse::r#run),
    keyword!("NEW", IMMEDIATE, parse::r#new),
    keyword!("LIST", PROGRAM | IMMEDIATE, parse::r#list),
    keyword!("LOAD", IMMEDIATE, parse::r#load),
    keyword!("SAVE", IMMEDIATE, parse::r#save),
    keyword!("CAT", IMMEDIATE, parse::r#cat),
];

pub fn find(word: &str) -> Option<&'static Keyword> {
    KEYWORDS.iter().find(|kw| kw.name.eq_ignore_ascii_case(word))
}
