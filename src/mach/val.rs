/// ## Dynamically typed value

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Number(f64),
    String(String),
    Boolean(bool),
    Void,
}

impl Val {
    /// Name used in type errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Number(_) => "NUMBER",
            Val::String(_) => "STRING",
            Val::Boolean(_) => "BOOLEAN",
            Val::Void => "VOID",
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Val::*;
        match self {
            Number(n) => {
                let a = n.abs();
                if a != 0.0 && (a >= 1e16 || a < 1e-6) {
                    write!(f, "{:E}", n)
                } else {
                    write!(f, "{}", n)
                }
            }
            String(s) => write!(f, "{}", s),
            Boolean(true) => write!(f, "TRUE"),
            Boolean(false) => write!(f, "FALSE"),
            Void => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display() {
        assert_eq!(Val::Number(5.0).to_string(), "5");
        assert_eq!(Val::Number(-2.5).to_string(), "-2.5");
        assert_eq!(Val::Number(0.0).to_string(), "0");
        assert_eq!(Val::Number(1e20).to_string(), "1E20");
        assert_eq!(Val::Number(1.5e-9).to_string(), "1.5E-9");
    }

    #[test]
    fn test_other_display() {
        assert_eq!(Val::String("HI".to_string()).to_string(), "HI");
        assert_eq!(Val::Boolean(true).to_string(), "TRUE");
        assert_eq!(Val::Void.to_string(), "");
        assert_eq!(Val::Boolean(false).type_name(), "BOOLEAN");
    }
}
