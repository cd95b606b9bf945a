//! In-progress complaint form.

use crate::models::Department;

/// Which part of the complaint form receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Service,
    Description,
    Attachment,
    Submit,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Service => FormField::Description,
            FormField::Description => FormField::Attachment,
            FormField::Attachment => FormField::Submit,
            FormField::Submit => FormField::Service,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FormField::Service => FormField::Submit,
            FormField::Description => FormField::Service,
            FormField::Attachment => FormField::Description,
            FormField::Submit => FormField::Attachment,
        }
    }

    pub fn accepts_text(self) -> bool {
        matches!(self, FormField::Description | FormField::Attachment)
    }
}

/// Transient complaint form input. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintForm {
    pub department: Option<Department>,
    pub service: Option<String>,
    pub description: String,
    pub attachment_name: String,
    pub focus: FormField,
    /// Highlighted entry in the department's service list
    pub service_cursor: usize,
}

impl ComplaintForm {
    /// Start a form for `department`, discarding previous input.
    pub fn for_department(department: Department) -> Self {
        Self {
            department: Some(department),
            ..Self::default()
        }
    }

    pub fn services(&self) -> &'static [&'static str] {
        self.department.map(|d| d.services()).unwrap_or(&[])
    }

    pub fn highlighted_service(&self) -> Option<&'static str> {
        self.services().get(self.service_cursor).copied()
    }

    pub fn move_service_cursor(&mut self, delta: isize) {
        let len = self.services().len();
        if len == 0 {
            return;
        }
        self.service_cursor = (self.service_cursor as isize + delta).rem_euclid(len as isize) as usize;
    }

    /// Append a character to whichever text field has focus.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Description => self.description.push(c),
            FormField::Attachment if !matches!(c, '/' | '\\') => self.attachment_name.push(c),
            _ => {}
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            FormField::Description => {
                self.description.pop();
            }
            FormField::Attachment => {
                self.attachment_name.pop();
            }
            _ => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
