/// The value type of a column, independent of any dialect's native type
/// names. Each serializer maps these to its engine's declarations and each
/// introspector maps catalog types back; a native type with no reverse
/// mapping is a fatal type-mapping error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Bool,
    I32,
    I64,
    F64,
    String,
    Bytes,
    Date,
    DateTime,
    Uuid,
}

impl ValueType {
    pub fn is_integer(self) -> bool {
        matches!(self, Self::I32 | Self::I64)
    }

    pub fn is_string(self) -> bool {
        matches!(self, Self::String)
    }
}
