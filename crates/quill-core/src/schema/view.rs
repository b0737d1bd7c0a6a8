use crate::stmt::Select;

/// A desired view.
///
/// The backing select is rendered with parameters substituted as literals
/// (views cannot be parameterized) and compared as text against the stored
/// definition to decide between no-op and `ALTER VIEW`.
#[derive(Debug, Clone)]
pub struct View {
    pub name: String,

    pub select: Select,
}

impl View {
    pub fn new(name: impl Into<String>, select: Select) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }
}
