/// Represents a runtime value in the interpreter.
///
/// This enum models the two types a script can compute with: integers and
/// text. Values carry no identity; they are copied on assignment and on
/// return, so no two variables ever alias the same storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit signed).
    Integer(i64),
    /// A text value. Comparison operators order text byte-wise.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// Names the value's type for error messages.
    ///
    /// # Example
    /// ```
    /// use ggscript::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).type_name(), "integer");
    /// assert_eq!(Value::from("abc").type_name(), "text");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders integers in ordinary decimal and text verbatim.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
