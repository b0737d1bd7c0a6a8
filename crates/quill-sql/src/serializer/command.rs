use quill_core::stmt::Value;

/// A rendered statement: SQL text plus the deduplicated parameter values, in
/// placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub text: String,
    pub params: Vec<Value>,
}

impl Command {
    pub fn new(text: String, params: Vec<Value>) -> Command {
        Command { text, params }
    }

    /// A command with no parameters, for SQL assembled outside the
    /// serializer (catalog probes, scripted DDL).
    pub fn raw(text: impl Into<String>) -> Command {
        Command {
            text: text.into(),
            params: vec![],
        }
    }
}
