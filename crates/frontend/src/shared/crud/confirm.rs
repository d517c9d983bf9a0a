//! Explicit confirmation step in front of destructive actions.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfirmDialog<T> {
    #[default]
    Idle,
    /// Waiting for the user's answer about `T`.
    Pending(T),
    /// Answered yes; the action is running.
    Confirmed(T),
    Cancelled,
}

impl<T: Clone> ConfirmDialog<T> {
    pub fn request(&mut self, target: T) {
        *self = ConfirmDialog::Pending(target);
    }

    /// Only a pending question can be confirmed; returns what to act on.
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::take(self) {
            ConfirmDialog::Pending(target) => {
                *self = ConfirmDialog::Confirmed(target.clone());
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self, ConfirmDialog::Pending(_)) {
            *self = ConfirmDialog::Cancelled;
        }
    }

    /// Back to idle once the confirmed action finished.
    pub fn settle(&mut self) {
        *self = ConfirmDialog::Idle;
    }

    pub fn pending(&self) -> Option<&T> {
        match self {
            ConfirmDialog::Pending(target) => Some(target),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, ConfirmDialog::Confirmed(_))
    }

    /// The dialog is on screen while pending and while the action runs.
    pub fn subject(&self) -> Option<&T> {
        match self {
            ConfirmDialog::Pending(target) | ConfirmDialog::Confirmed(target) => Some(target),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_requires_a_pending_question() {
        let mut dialog = ConfirmDialog::<String>::default();
        assert_eq!(dialog.confirm(), None);

        dialog.request("p1".to_string());
        assert_eq!(dialog.pending().map(String::as_str), Some("p1"));
        assert_eq!(dialog.confirm().as_deref(), Some("p1"));
        assert!(dialog.is_running());
        assert_eq!(dialog.confirm(), None, "a running action is not confirmed twice");

        dialog.settle();
        assert_eq!(dialog, ConfirmDialog::Idle);
    }

    #[test]
    fn cancel_only_affects_pending() {
        let mut dialog = ConfirmDialog::Pending(1);
        dialog.cancel();
        assert_eq!(dialog, ConfirmDialog::Cancelled);
        assert_eq!(dialog.confirm(), None);

        let mut running = ConfirmDialog::Confirmed(2);
        running.cancel();
        assert!(running.is_running());
    }
}
