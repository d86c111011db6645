//! Submission form state
//!
//! Raw field text as typed, plus focus and the advanced-options toggle.
//! Normalization happens only on submit, in [`FormState::build_request`].

use chrono::{DateTime, Utc};
use snip_core::{build_shorten_request, InputError, ShortenRequest};

/// A focusable form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormField {
    #[default]
    Url,
    CustomCode,
    Expiration,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Url => "URL",
            FormField::CustomCode => "Custom code (optional)",
            FormField::Expiration => "Expires at (optional)",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Url => "Enter your long URL here...",
            FormField::CustomCode => "my-custom-code",
            FormField::Expiration => "YYYY-MM-DD HH:MM",
        }
    }

    /// Whether the field lives in the advanced section
    pub fn is_advanced(&self) -> bool {
        !matches!(self, FormField::Url)
    }
}

const BASIC_FIELDS: &[FormField] = &[FormField::Url];
const ALL_FIELDS: &[FormField] = &[FormField::Url, FormField::CustomCode, FormField::Expiration];

#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub url: String,
    pub custom_code: String,
    pub expiration: String,

    /// Advanced section (custom code, expiration) expanded
    pub show_advanced: bool,

    pub focus: FormField,

    /// Inline message from client-side validation
    pub validation_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields the user can currently reach, in focus order
    pub fn visible_fields(&self) -> &'static [FormField] {
        if self.show_advanced {
            ALL_FIELDS
        } else {
            BASIC_FIELDS
        }
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + 1) % fields.len()];
    }

    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Show or hide the advanced section
    ///
    /// Hiding it moves focus back to the URL field. Field values are kept.
    pub fn toggle_advanced(&mut self) {
        self.show_advanced = !self.show_advanced;
        if !self.show_advanced && self.focus.is_advanced() {
            self.focus = FormField::Url;
        }
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Url => &self.url,
            FormField::CustomCode => &self.custom_code,
            FormField::Expiration => &self.expiration,
        }
    }

    pub fn set_value(&mut self, field: FormField, text: String) {
        match field {
            FormField::Url => self.url = text,
            FormField::CustomCode => self.custom_code = text,
            FormField::Expiration => self.expiration = text,
        }
        // Stale once the user edits again
        self.validation_error = None;
    }

    /// Normalize the raw fields into a request, as of `now`
    pub fn build_request(&self, now: DateTime<Utc>) -> Result<ShortenRequest, InputError> {
        build_shorten_request(&self.url, &self.custom_code, &self.expiration, now)
    }

    /// Empty every field and collapse the advanced section
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
