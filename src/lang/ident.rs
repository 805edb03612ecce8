// Used in both the parser and the machine

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum Ident {
    Plain(String),
    String(String),
}

impl Ident {
    /// Names are stored upper case; a trailing `$` selects a string variable.
    pub fn new(name: &str) -> Ident {
        let name = name.to_ascii_uppercase();
        if name.ends_with('$') {
            Ident::String(name)
        } else {
            Ident::Plain(name)
        }
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Ident::String(_))
    }

    pub fn name(&self) -> &str {
        match self {
            Ident::Plain(s) | Ident::String(s) => s,
        }
    }
}

impl std::fmt::Display for Ident {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
