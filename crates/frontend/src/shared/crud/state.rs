use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use contracts::domain::common::Resource;
use leptos::prelude::*;

use super::confirm::ConfirmDialog;
use super::editor::EditorState;
use super::list_state::ListState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Non-blocking message shown above a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Record about to be deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: String,
    pub label: String,
}

/// Everything a list page owns.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudState<R> {
    pub list: ListState<R>,
    pub editor: EditorState<R>,
    pub confirm: ConfirmDialog<DeleteTarget>,
    pub notice: Option<Notice>,
    /// Ids of the records whose status change is in flight.
    pub status_busy: BTreeSet<String>,
}

impl<R> Default for CrudState<R> {
    fn default() -> Self {
        Self {
            list: ListState::default(),
            editor: EditorState::default(),
            confirm: ConfirmDialog::default(),
            notice: None,
            status_busy: BTreeSet::new(),
        }
    }
}

impl<R: Resource> CrudState<R> {
    pub fn is_busy(&self, id: &str) -> bool {
        self.status_busy.contains(id)
    }
}

/// Where the controller keeps its state.
///
/// `apply` returns `None` once the owner is gone, so results that
/// arrive after a page unmounted are dropped.
pub trait StateCell<S>: Clone + 'static {
    fn apply<O>(&self, f: impl FnOnce(&mut S) -> O) -> Option<O>;
}

impl<S: Send + Sync + 'static> StateCell<S> for RwSignal<S> {
    fn apply<O>(&self, f: impl FnOnce(&mut S) -> O) -> Option<O> {
        self.try_update(f)
    }
}

/// Plain shared cell, for driving a controller outside of a reactive owner.
impl<S: 'static> StateCell<S> for Rc<RefCell<S>> {
    fn apply<O>(&self, f: impl FnOnce(&mut S) -> O) -> Option<O> {
        Some(f(&mut self.borrow_mut()))
    }
}
