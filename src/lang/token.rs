#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    End,
    Error(&'static str),
    Number(f64),
    Ident(String),
    String(String),
    Operator(Operator),
}

impl Token {
    pub fn is_word(&self, word: &str) -> bool {
        match self {
            Token::Ident(s) => s.eq_ignore_ascii_case(word),
            _ => false,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            End => write!(f, "END OF LINE"),
            Error(s) => write!(f, "{}", s),
            Number(n) => write!(f, "{}", n),
            Ident(s) => write!(f, "{}", s.to_ascii_uppercase()),
            String(s) => write!(f, "\"{}\"", s),
            Operator(op) => write!(f, "'{}'", op),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Comma,
    Semicolon,
    Equal,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
}

impl Operator {
    pub fn is_relational(&self) -> bool {
        use Operator::*;
        match self {
            Equal | Less | Greater | LessEqual | GreaterEqual | NotEqual => true,
            Plus | Minus | Multiply | Divide | LParen | RParen | Comma | Semicolon => false,
        }
    }

    /// Name used in "... EXPECTED" parse errors.
    pub fn describe(&self) -> &'static str {
        use Operator::*;
        match self {
            Plus => "PLUS",
            Minus => "MINUS",
            Multiply => "TIMES",
            Divide => "DIVIDE",
            LParen => "LEFT PARENTHESIS",
            RParen => "RIGHT PARENTHESIS",
            Comma => "COMMA",
            Semicolon => "SEMICOLON",
            Equal => "EQUALS",
            Less => "LESS THAN",
            Greater => "GREATER THAN",
            LessEqual => "LESS OR EQUAL",
            GreaterEqual => "GREATER OR EQUAL",
            NotEqual => "NOT EQUAL",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Plus => write!(f, "+"),
            Minus => write!(f, "-"),
            Multiply => write!(f, "*"),
            Divide => write!(f, "/"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Comma => write!(f, ","),
            Semicolon => write!(f, ";"),
            Equal => write!(f, "="),
            Less => write!(f, "<"),
            Greater => write!(f, ">"),
            LessEqual => write!(f, "<="),
            GreaterEqual => write!(f, ">="),
            NotEqual => write!(f, "<>"),
        }
    }
}
