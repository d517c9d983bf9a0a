//! Editors for array-valued form leaves.
//!
//! Array membership is what changes here, so these operations take the
//! current list and return the next one instead of going through a path
//! setter. All of them are pure and synchronous.

use crate::shared::validation::is_pincode;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PincodeError {
    #[error("pincode must be 6 digits and cannot start with 0")]
    InvalidFormat,
    #[error("pincode {0} is already in the list")]
    Duplicate(String),
}

/// Appends `input` (trimmed) after checking format and uniqueness.
pub fn add_pincode(pincodes: &[String], input: &str) -> Result<Vec<String>, PincodeError> {
    let candidate = input.trim();
    if !is_pincode(candidate) {
        return Err(PincodeError::InvalidFormat);
    }
    if pincodes.iter().any(|p| p == candidate) {
        return Err(PincodeError::Duplicate(candidate.to_string()));
    }
    let mut next = pincodes.to_vec();
    next.push(candidate.to_string());
    Ok(next)
}

/// Removes every entry equal to `value`.
pub fn remove_pincode(pincodes: &[String], value: &str) -> Vec<String> {
    pincodes.iter().filter(|p| *p != value).cloned().collect()
}

pub fn push<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(item);
    next
}

/// Out-of-range indexes leave the list unchanged.
pub fn remove_at<T: Clone>(items: &[T], index: usize) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Applies `f` to the element at `index` only.
pub fn update_at<T: Clone>(items: &[T], index: usize, f: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = items.to_vec();
    if let Some(item) = next.get_mut(index) {
        f(item);
    }
    next
}
