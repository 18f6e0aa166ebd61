//! Open/closed state of an admin create/edit modal.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Which record, if any, the form modal is editing.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Editor<T> {
    #[default]
    Closed,
    Create,
    Edit(T),
}

impl<T> Editor<T> {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Record being edited; `None` when creating or closed.
    #[must_use]
    pub fn existing(&self) -> Option<&T> {
        match self {
            Self::Edit(item) => Some(item),
            Self::Closed | Self::Create => None,
        }
    }

    /// Modal heading for a record called `noun`.
    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        match self {
            Self::Edit(_) => format!("Edit {noun}"),
            Self::Closed | Self::Create => format!("Add New {noun}"),
        }
    }
}
