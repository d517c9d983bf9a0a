//! Client-side checks run before any request is sent.
//!
//! Checks never stop at the first problem: every rule adds to one
//! [`Problems`] list so the form can show all of them at once.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Problems {
    messages: Vec<String>,
}

impl Problems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_result(self) -> Result<(), Vec<String>> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(self.messages)
        }
    }

    /// Non-blank text.
    pub fn required(&mut self, value: &str, label: &str) {
        if value.trim().is_empty() {
            self.push(format!("{label} is required"));
        }
    }

    pub fn required_number(&mut self, value: Option<f64>, label: &str) {
        if value.is_none() {
            self.push(format!("{label} is required"));
        }
    }

    pub fn non_negative(&mut self, value: Option<f64>, label: &str) {
        if matches!(value, Some(v) if v < 0.0) {
            self.push(format!("{label} cannot be negative"));
        }
    }

    /// Percentage in `0..=100`; absent values are left to `required_number`.
    pub fn percentage(&mut self, value: Option<f64>, label: &str) {
        if let Some(v) = value {
            if !(0.0..=100.0).contains(&v) {
                self.push(format!("{label} must be between 0 and 100"));
            }
        }
    }

    /// Optional email: blank passes, otherwise needs `local@domain.tld`.
    pub fn email(&mut self, value: &str, label: &str) {
        let value = value.trim();
        if !value.is_empty() && !is_email(value) {
            self.push(format!("{label} is not a valid email address"));
        }
    }

    /// Optional phone: blank passes, otherwise exactly 10 digits.
    pub fn phone(&mut self, value: &str, label: &str) {
        let value = value.trim();
        if !value.is_empty() && !(value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()))
        {
            self.push(format!("{label} must be a 10 digit number"));
        }
    }

    /// Optional pincode: blank passes, otherwise see [`is_pincode`].
    pub fn pincode(&mut self, value: &str, label: &str) {
        let value = value.trim();
        if !value.is_empty() && !is_pincode(value) {
            self.push(format!("{label} must be 6 digits and cannot start with 0"));
        }
    }

    pub fn max_items<T>(&mut self, items: &[T], max: usize, label: &str) {
        self.max_count(items.len(), max, label);
    }

    pub fn max_count(&mut self, count: usize, max: usize, label: &str) {
        if count > max {
            self.push(format!("{label}: at most {max} allowed, got {count}"));
        }
    }
}

impl fmt::Display for Problems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

/// Indian postal code: exactly six ASCII digits, first digit not zero.
pub fn is_pincode(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 6 && bytes.iter().all(u8::is_ascii_digit) && bytes[0] != b'0'
}

fn is_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
                && !value.contains(char::is_whitespace)
        }
        None => false,
    }
}
