use super::keyword::{self, Context};
use super::{ast::*, lex::Lexer, token::*, Column, Error, Ident, LineNumber, MAX_LINE_NUMBER};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Where a line came from. Files are parsed in `Batch` mode, where every
/// line is program text. In `Interactive` mode an unnumbered line is an
/// immediate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Batch,
    Interactive,
}

pub fn parse(line: &str, mode: Mode) -> Result<Statement> {
    let text = line.trim();
    let mut parser = Parser::new(text);
    let line_number = match parser.line_number() {
        Ok(n) => n,
        Err(e) => return Err(e.in_column(&parser.column())),
    };
    match parser.statement(line_number, mode) {
        Ok(body) => Ok(Statement::new(line_number, text, body)),
        Err(e) => Err(e.in_column(&parser.column()).in_line_number(line_number)),
    }
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    token: Token,
}

impl<'a> Parser<'a> {
    fn new(line: &'a str) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(line),
            token: Token::End,
        }
    }

    fn column(&self) -> Column {
        self.lexer.span()
    }

    fn line_number(&mut self) -> Result<LineNumber> {
        match self.lexer.line_number() {
            None => Ok(None),
            Some(digits) => match digits.parse::<u16>() {
                Ok(n) if n <= MAX_LINE_NUMBER => Ok(Some(n)),
                _ => Err(error!(SyntaxError; "INVALID LINE NUMBER")),
            },
        }
    }

    fn statement(&mut self, line_number: LineNumber, mode: Mode) -> Result<Body> {
        self.advance()?;
        let kw = match &self.token {
            Token::Ident(id) => keyword::find(id),
            _ => None,
        };
        let kw = match kw {
            Some(kw) => kw,
            None => return Err(error!(SyntaxError; "KEYWORD EXPECTED")),
        };
        let context = match (mode, line_number) {
            (Mode::Interactive, None) => Context::Immediate,
            _ => Context::Program,
        };
        if !kw.allows(context) {
            return Err(match context {
                Context::Immediate => {
                    error!(IllegalDirect; format!("'{}' IS ONLY VALID IN A PROGRAM", kw.name))
                }
                Context::Program => {
                    error!(SyntaxError; format!("'{}' IS NOT VALID IN A PROGRAM", kw.name))
                }
            });
        }
        (kw.parse)(self)
    }

    pub(super) fn advance(&mut self) -> Result<()> {
        self.token = self.lexer.next_token();
        if let Token::Error(msg) = self.token {
            return Err(error!(SyntaxError; msg));
        }
        Ok(())
    }

    pub(super) fn skip_rest(&mut self) {
        self.lexer.rest();
        self.token = Token::End;
    }

    pub(super) fn at_end(&self) -> bool {
        self.token == Token::End
    }

    pub(super) fn expect_end(&mut self) -> Result<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(error!(SyntaxError; "END OF STATEMENT EXPECTED"))
        }
    }

    pub(super) fn expect(&mut self, op: Operator) -> Result<()> {
        if self.token == Token::Operator(op) {
            return self.advance();
        }
        Err(error!(SyntaxError; format!("{} EXPECTED", op.describe())))
    }

    pub(super) fn expect_word(&mut self, word: &str) -> Result<()> {
        if self.token.is_word(word) {
            return self.advance();
        }
        Err(error!(SyntaxError; format!("{} EXPECTED", word)))
    }

    pub(super) fn ident(&mut self) -> Result<Ident> {
        let ident = match &self.token {
            Token::Ident(s) => Ident::new(s),
            _ => return Err(error!(SyntaxError; "IDENTIFIER EXPECTED")),
        };
        self.advance()?;
        Ok(ident)
    }

    pub(super) fn line_target(&mut self) -> Result<u16> {
        let target = match self.token {
            Token::Number(n) if n.fract() == 0.0 && n >= 0.0 && n <= MAX_LINE_NUMBER as f64 => {
                n as u16
            }
            _ => return Err(error!(SyntaxError; "LINE NUMBER EXPECTED")),
        };
        self.advance()?;
        Ok(target)
    }

    pub(super) fn file_name(&mut self) -> Result<String> {
        let name = match &self.token {
            Token::String(s) | Token::Ident(s) => s.clone(),
            _ => return Err(error!(SyntaxError; "FILE NAME EXPECTED")),
        };
        self.advance()?;
        Ok(name)
    }

    pub(super) fn printer_list(&mut self) -> Result<Vec<Printable>> {
        let mut v: Vec<Printable> = vec![];
        let mut linefeed = true;
        loop {
            match self.token {
                Token::End => {
                    if linefeed {
                        v.push(Printable::Newline);
                    }
                    return Ok(v);
                }
                Token::Operator(Operator::Semicolon) => {
                    linefeed = false;
                    self.advance()?;
                }
                Token::Operator(Operator::Comma) => {
                    linefeed = false;
                    v.push(Printable::Tab);
                    self.advance()?;
                }
                _ => {
                    linefeed = true;
                    v.push(Printable::Expression(self.expression()?));
                }
            }
        }
    }

    /// Relational operators sit at the top and never chain.
    pub(super) fn expression(&mut self) -> Result<Expression> {
        let lhs = self.sum()?;
        match self.token {
            Token::Operator(op) if op.is_relational() => {
                self.advance()?;
                let rhs = self.sum()?;
                Ok(Expression::for_binary_op(op, lhs, rhs))
            }
            _ => Ok(lhs),
        }
    }

    fn sum(&mut self) -> Result<Expression> {
        let mut lhs = self.term()?;
        while let Token::Operator(op @ Operator::Plus) | Token::Operator(op @ Operator::Minus) =
            self.token
        {
            self.advance()?;
            let rhs = self.term()?;
            lhs = Expression::for_binary_op(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Expression> {
        let mut lhs = self.unary()?;
        while let Token::Operator(op @ Operator::Multiply) | Token::Operator(op @ Operator::Divide) =
            self.token
        {
            self.advance()?;
            let rhs = self.unary()?;
            lhs = Expression::for_binary_op(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Expression> {
        if self.token == Token::Operator(Operator::Minus) {
            self.advance()?;
            return Ok(Expression::Negation(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expression> {
        let expr = match &self.token {
            Token::Operator(Operator::LParen) => {
                self.advance()?;
                let expr = self.expression()?;
                if self.token != Token::Operator(Operator::RParen) {
                    return Err(error!(SyntaxError; "UNBALANCED PARENTHESES"));
                }
                expr
            }
            Token::Number(n) => Expression::Number(*n),
            Token::String(s) => Expression::String(s.clone()),
            Token::Ident(s) => {
                let name = s.clone();
                self.advance()?;
                if self.token == Token::Operator(Operator::LParen) {
                    return Ok(Expression::Function(
                        name.to_ascii_uppercase(),
                        self.expression_list()?,
                    ));
                }
                return Ok(Expression::Var(Ident::new(&name)));
            }
            t => {
                return Err(
                    error!(SyntaxError; format!("{} FOUND, LITERAL OR VARIABLE EXPECTED", t)),
                )
            }
        };
        self.advance()?;
        Ok(expr)
    }

    fn expression_list(&mut self) -> Result<Vec<Expression>> {
        self.expect(Operator::LParen)?;
        let mut v: Vec<Expression> = vec![];
        if self.token == Token::Operator(Operator::RParen) {
            self.advance()?;
            return Ok(v);
        }
        loop {
            v.push(self.expression()?);
            match self.token {
                Token::Operator(Operator::RParen) => {
                    self.advance()?;
                    return Ok(v);
                }
                Token::Operator(Operator::Comma) => self.advance()?,
                _ => return Err(error!(SyntaxError; "SYNTAX ERROR IN FUNCTION CALL")),
            }
        }
    }
}

impl Expression {
    fn for_binary_op(op: Operator, lhs: Expression, rhs: Expression) -> Expression {
        use Operator::*;
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match op {
            Plus => Expression::Add(lhs, rhs),
            Minus => Expression::Subtract(lhs, rhs),
            Multiply => Expression::Multiply(lhs, rhs),
            Divide => Expression::Divide(lhs, rhs),
            Equal => Expression::Equal(lhs, rhs),
            NotEqual => Expression::NotEqual(lhs, rhs),
            Less => Expression::Less(lhs, rhs),
            LessEqual => Expression::LessEqual(lhs, rhs),
            Greater => Expression::Greater(lhs, rhs),
            GreaterEqual => Expression::GreaterEqual(lhs, rhs),
            LParen | RParen | Comma | Semicolon => unreachable!("not a binary operator"),
        }
    }
}

// Statement parsers referenced from the keyword table. Each one starts
// with the keyword as the current token and must consume the whole line.

pub(super) fn r#let(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let ident = parse.ident()?;
    parse.expect(Operator::Equal)?;
    let expr = parse.expression()?;
    parse.expect_end()?;
    Ok(Body::Let(ident, expr))
}

pub(super) fn r#print(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    Ok(Body::Print(parse.printer_list()?))
}

pub(super) fn r#if(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let predicate = parse.expression()?;
    parse.expect_word("THEN")?;
    let then = parse.line_target()?;
    let mut r#else = None;
    if !parse.at_end() {
        parse.expect_word("ELSE")?;
        r#else = Some(parse.line_target()?);
    }
    parse.expect_end()?;
    Ok(Body::If(predicate, then, r#else))
}

pub(super) fn r#goto(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let line = parse.line_target()?;
    parse.expect_end()?;
    Ok(Body::Goto(line))
}

pub(super) fn r#gosub(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let line = parse.line_target()?;
    parse.expect_end()?;
    Ok(Body::Gosub(line))
}

pub(super) fn r#for(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let ident = parse.ident()?;
    if ident.is_string() {
        return Err(error!(SyntaxError; "FOR LOOP INDEX MAY NOT BE STRING"));
    }
    parse.expect(Operator::Equal)?;
    let start = parse.expression()?;
    parse.expect_word("TO")?;
    let limit = parse.expression()?;
    let mut step = None;
    if !parse.at_end() {
        parse.expect_word("STEP")?;
        step = Some(parse.expression()?);
    }
    parse.expect_end()?;
    Ok(Body::For(ident, start, limit, step))
}

pub(super) fn r#next(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let mut ident = None;
    if !parse.at_end() {
        ident = Some(parse.ident()?);
    }
    parse.expect_end()?;
    Ok(Body::Next(ident))
}

pub(super) fn r#input(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let mut prompt = None;
    if let Token::String(s) = &parse.token {
        prompt = Some(s.clone());
        parse.advance()?;
        parse.expect(Operator::Comma)?;
    }
    let ident = parse.ident()?;
    parse.expect_end()?;
    Ok(Body::Input(prompt, ident))
}

pub(super) fn r#list(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let (mut first, mut last) = (None, None);
    if !parse.at_end() {
        first = Some(parse.line_target()?);
        if !parse.at_end() {
            parse.expect(Operator::Minus)?;
            last = Some(parse.line_target()?);
        }
    }
    parse.expect_end()?;
    Ok(Body::List(first, last))
}

pub(super) fn r#load(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let name = parse.file_name()?;
    parse.expect_end()?;
    Ok(Body::Load(name))
}

pub(super) fn r#save(parse: &mut Parser) -> Result<Body> {
    parse.advance()?;
    let name = parse.file_name()?;
    parse.expect_end()?;
    Ok(Body::Save(name))
}

pub(super) fn r#rem(parse: &mut Parser) -> Result<Body> {
    parse.skip_rest();
    Ok(Body::Rem)
}

fn bare(parse: &mut Parser, body: Body) -> Result<Body> {
    parse.advance()?;
    parse.expect_end()?;
    Ok(body)
}

pub(super) fn r#return(parse: &mut Parser) -> Result<Body> {
    bare(parse, Body::Return)
}

pub(super) fn r#end(parse: &mut Parser) -> Result<Body> {
    bare(parse, Body::End)
}

pub(super) fn r#run(parse: &mut Parser) -> Result<Body> {
    bare(parse, Body::Run)
}

pub(super) fn r#new(parse: &mut Parser) -> Result<Body> {
    bare(parse, Body::New)
}

pub(super) fn r#cat(parse: &mut Parser) -> Result<Body> {
    bare(parse, Body::Cat)
}
