//! Form field value objects

use super::validation::Constraint;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    /// Masked text (passwords); rendered as bullets unless revealed
    Secret(String),
    /// On/off toggle ("Remember me")
    Flag(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value,
/// validation rules, and current error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub placeholder: String,
    pub value: FieldValue,
    pub rules: Vec<Constraint>,
    /// Message from the last failing rule, cleared on revalidation
    pub error: Option<String>,
    /// Whether a secret field is currently shown in clear text
    pub revealed: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str, placeholder: &str, rules: Vec<Constraint>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(String::new()),
            rules,
            error: None,
            revealed: false,
        }
    }

    /// Create a new text field with an initial value
    pub fn text_with_value(
        name: &str,
        label: &str,
        placeholder: &str,
        value: String,
        rules: Vec<Constraint>,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: placeholder.to_string(),
            value: FieldValue::Text(value),
            rules,
            error: None,
            revealed: false,
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str, rules: Vec<Constraint>) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: "••••••••".to_string(),
            value: FieldValue::Secret(String::new()),
            rules,
            error: None,
            revealed: false,
        }
    }

    /// Create a new flag field
    pub fn flag(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            placeholder: String::new(),
            value: FieldValue::Flag(false),
            rules: Vec::new(),
            error: None,
            revealed: false,
        }
    }

    /// Get the text value (empty string for flag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s,
            FieldValue::Flag(_) => "",
        }
    }

    /// Get the flag value (false for text fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            _ => false,
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self.value, FieldValue::Secret(_))
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.value, FieldValue::Flag(_))
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => *s = value,
            FieldValue::Flag(_) => {}
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.push(c),
            FieldValue::Flag(b) => {
                if c == ' ' {
                    *b = !*b;
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => {
                s.pop();
            }
            FieldValue::Flag(_) => {}
        }
    }

    /// Toggle a flag field, or reveal/hide a secret field
    pub fn toggle(&mut self) {
        match &mut self.value {
            FieldValue::Flag(b) => *b = !*b,
            FieldValue::Secret(_) => self.revealed = !self.revealed,
            FieldValue::Text(_) => {}
        }
    }

    /// Clear the field value and error
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) | FieldValue::Secret(s) => s.clear(),
            FieldValue::Flag(b) => *b = false,
        }
        self.error = None;
        self.revealed = false;
    }

    /// Run this field's rules against its current value, recording the
    /// first failure. Returns true when the field is valid.
    pub fn validate(&mut self) -> bool {
        self.error = self
            .rules
            .iter()
            .find_map(|rule| rule.check(&self.label, self.as_text()));
        self.error.is_none()
    }

    /// Get the display value for rendering (masked for hidden secrets)
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Secret(s) => {
                if self.revealed {
                    s.clone()
                } else {
                    "•".repeat(s.chars().count())
                }
            }
            FieldValue::Flag(b) => if *b { "[x]" } else { "[ ]" }.to_string(),
        }
    }
}
