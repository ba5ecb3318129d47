//! Form field value objects

/// The kind of input control backing a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Free text entry, optionally spanning multiple lines
    Text { multiline: bool },
    /// Telephone number entry
    Tel,
    /// A toggleable checkbox (e.g. privacy consent)
    Checkbox,
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value.
///
/// `error` is recomputed only by validation passes; rendering code reads
/// it but never writes it.
#[derive(Debug, Clone)]
pub struct Field {
    pub identifier: String,
    pub label: String,
    pub control: Control,
    pub required: bool,
    pub value: FieldValue,
    pub error: Option<String>,
}

impl Field {
    /// Create a new text field
    pub fn text(identifier: &str, label: &str, required: bool, multiline: bool) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            control: Control::Text { multiline },
            required,
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a new telephone field
    pub fn tel(identifier: &str, label: &str, required: bool) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            control: Control::Tel,
            required,
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a new checkbox field
    pub fn checkbox(identifier: &str, label: &str, required: bool) -> Self {
        Self {
            identifier: identifier.to_string(),
            label: label.to_string(),
            control: Control::Checkbox,
            required,
            value: FieldValue::Checked(false),
            error: None,
        }
    }

    /// Get the text value (empty string for checkboxes)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(_) => "",
        }
    }

    /// Get the checked state (false for text fields)
    pub fn is_checked(&self) -> bool {
        match &self.value {
            FieldValue::Checked(c) => *c,
            FieldValue::Text(_) => false,
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.control, Control::Text { multiline: true })
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Toggle a checkbox (no-op for text fields)
    pub fn toggle(&mut self) {
        if let FieldValue::Checked(c) = &mut self.value {
            *c = !*c;
        }
    }

    /// Mark the field with a validation error message
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Clear the validation error marker. Safe to call when none is set;
    /// only removes the marker validation added, nothing else.
    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
