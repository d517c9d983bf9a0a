//! Create/edit editor state machine.
//!
//! ```text
//! Closed -> Open(Create)
//! Closed -> Fetching(id) -> Open(Edit)
//! Open -> Submitting -> Closed          (success)
//! Open -> Submitting -> Open + error    (failure, same mode and form)
//! any  -> Closed                        (cancel, no request)
//! ```
//!
//! Every transition that starts or ends an editing session bumps
//! `session`; a fetch or submit result carrying an older session is
//! dropped.

use contracts::domain::common::{Resource, WriteMode};

use crate::shared::api::{ApiError, Payload, UploadSet};
use crate::shared::form::{FormEdit, FormStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    Closed,
    Fetching,
    Open,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit { id: String },
}

impl EditorMode {
    pub fn write_mode(&self) -> WriteMode {
        match self {
            EditorMode::Create => WriteMode::Create,
            EditorMode::Edit { .. } => WriteMode::Edit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchTicket {
    session: u64,
}

/// A validated submission on its way to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitTicket {
    session: u64,
    pub mode: EditorMode,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Failed,
    /// The editor was closed or reopened while the request was in flight.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState<R> {
    status: EditorStatus,
    mode: EditorMode,
    form: FormStore,
    uploads: UploadSet,
    /// Server or transport error of the last attempt.
    error: Option<String>,
    /// Client-side validation problems of the last attempt.
    problems: Vec<String>,
    editing: Option<R>,
    session: u64,
}

impl<R> Default for EditorState<R> {
    fn default() -> Self {
        Self {
            status: EditorStatus::Closed,
            mode: EditorMode::Create,
            form: FormStore::default(),
            uploads: UploadSet::default(),
            error: None,
            problems: Vec::new(),
            editing: None,
            session: 0,
        }
    }
}

impl<R: Resource> EditorState<R> {
    pub fn status(&self) -> EditorStatus {
        self.status
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn form(&self) -> &FormStore {
        &self.form
    }

    pub fn uploads(&self) -> &UploadSet {
        &self.uploads
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }

    pub fn editing(&self) -> Option<&R> {
        self.editing.as_ref()
    }

    /// Fetching, open or submitting.
    pub fn is_active(&self) -> bool {
        self.status != EditorStatus::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.status == EditorStatus::Submitting
    }

    pub fn title(&self) -> String {
        match self.mode {
            EditorMode::Create => format!("New {}", R::element_name().to_lowercase()),
            EditorMode::Edit { .. } => format!("Edit {}", R::element_name().to_lowercase()),
        }
    }

    fn start(&mut self, status: EditorStatus, mode: EditorMode, form: FormStore, editing: Option<R>) {
        self.session += 1;
        self.status = status;
        self.mode = mode;
        self.form = form;
        self.uploads = UploadSet::default();
        self.error = None;
        self.problems.clear();
        self.editing = editing;
    }

    pub fn open_create(&mut self) {
        self.start(
            EditorStatus::Open,
            EditorMode::Create,
            FormStore::new(R::empty_form()),
            None,
        );
    }

    pub fn open_edit(&mut self, record: R) {
        let mode = EditorMode::Edit {
            id: record.id().to_string(),
        };
        let form = FormStore::new(record.to_form());
        self.start(EditorStatus::Open, mode, form, Some(record));
    }

    pub fn begin_fetch(&mut self, id: &str) -> FetchTicket {
        let mode = EditorMode::Edit { id: id.to_string() };
        self.start(EditorStatus::Fetching, mode, FormStore::default(), None);
        FetchTicket {
            session: self.session,
        }
    }

    /// Returns false when the result belongs to an abandoned session.
    pub fn finish_fetch(&mut self, ticket: &FetchTicket, result: Result<R, String>) -> bool {
        if ticket.session != self.session || self.status != EditorStatus::Fetching {
            return false;
        }
        match result {
            Ok(record) => {
                self.form = FormStore::new(record.to_form());
                self.editing = Some(record);
                self.status = EditorStatus::Open;
            }
            Err(message) => {
                self.status = EditorStatus::Closed;
                self.error = Some(message);
            }
        }
        true
    }

    /// Discards the form. Never issues a request.
    pub fn cancel(&mut self) {
        self.start(EditorStatus::Closed, EditorMode::Create, FormStore::default(), None);
    }

    /// Applies a form edit while the form is editable.
    pub fn apply(&mut self, edit: FormEdit) {
        if self.status != EditorStatus::Open {
            return;
        }
        match edit {
            FormEdit::Input { path, input } => self.form.apply_input(&path, input),
            FormEdit::Set { path, value } => self.form.set_value(&path, value),
            FormEdit::Upload { part, file, single } => {
                if single {
                    self.uploads.replace(&part, file);
                } else {
                    self.uploads.add(&part, file);
                }
            }
            FormEdit::ClearUpload { part } => self.uploads.clear(&part),
        }
    }

    /// Validates the form and, when it passes, moves to `Submitting`.
    /// Validation problems keep the editor open, are stored for display
    /// and come back as [`ApiError::Validation`].
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, ApiError> {
        if self.status != EditorStatus::Open {
            return Err(ApiError::Unsupported {
                operation: "submit",
                resource: R::element_name(),
            });
        }
        let record = match R::from_form(self.form.tree(), self.mode.write_mode()) {
            Ok(record) => record,
            Err(problems) => {
                self.problems = problems.clone();
                self.error = None;
                return Err(ApiError::Validation(problems));
            }
        };
        let staged = record
            .validate_uploads(&|part| self.uploads.count(part))
            .into_result();
        if let Err(problems) = staged {
            self.problems = problems.clone();
            self.error = None;
            return Err(ApiError::Validation(problems));
        }
        let payload = Payload::for_record(&record, &self.uploads).inspect_err(|e| {
            self.error = Some(e.to_string());
        })?;
        self.problems.clear();
        self.error = None;
        self.status = EditorStatus::Submitting;
        Ok(SubmitTicket {
            session: self.session,
            mode: self.mode.clone(),
            payload,
        })
    }

    pub fn finish_submit(&mut self, ticket: &SubmitTicket, result: Result<(), String>) -> SubmitOutcome {
        if ticket.session != self.session || self.status != EditorStatus::Submitting {
            return SubmitOutcome::Stale;
        }
        match result {
            Ok(()) => {
                self.cancel();
                SubmitOutcome::Saved
            }
            Err(message) => {
                self.status = EditorStatus::Open;
                self.error = Some(message);
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_category::{fields, Category};
    use serde_json::json;

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            is_active: true,
            ..Default::default()
        }
    }

    #[test]
    fn create_opens_with_defaults_and_cancel_discards() {
        let mut editor = EditorState::<Category>::default();
        editor.open_create();
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.form().tree(), &Category::empty_form());

        editor.apply(FormEdit::text(fields::NAME, "Fruits"));
        editor.cancel();
        assert_eq!(editor.status(), EditorStatus::Closed);
        assert_eq!(editor.form(), &FormStore::default());
        assert!(editor.editing().is_none());
    }

    #[test]
    fn validation_failure_stays_open_without_ticket() {
        let mut editor = EditorState::<Category>::default();
        editor.open_create();
        let err = editor.begin_submit().unwrap_err();
        assert_eq!(err, ApiError::Validation(vec!["Name is required".into()]));
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.problems(), ["Name is required"]);
    }

    #[test]
    fn staged_images_over_the_limit_block_submit() {
        use crate::shared::api::UploadFile;
        use contracts::domain::a001_product::{self as product, Product, IMAGES_PART};

        let mut editor = EditorState::<Product>::default();
        editor.open_create();
        editor.apply(FormEdit::text(product::fields::NAME, "Rice"));
        editor.apply(FormEdit::text(product::fields::CATEGORY, "c1"));
        editor.apply(FormEdit::text(product::fields::PRICE, "40"));
        for n in 0..8 {
            editor.apply(FormEdit::Upload {
                part: IMAGES_PART.to_string(),
                file: UploadFile {
                    file_name: format!("img{n}.png"),
                    mime: "image/png".into(),
                    bytes: vec![0x89],
                },
                single: false,
            });
        }

        let err = editor.begin_submit().unwrap_err();
        assert_eq!(
            err,
            ApiError::Validation(vec!["Images: at most 5 allowed, got 8".into()])
        );
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.problems(), ["Images: at most 5 allowed, got 8"]);

        editor.apply(FormEdit::ClearUpload { part: IMAGES_PART.to_string() });
        assert!(editor.begin_submit().is_ok());
    }

    #[test]
    fn edit_submit_carries_id_and_payload() {
        let mut editor = EditorState::default();
        editor.open_edit(category("c1", "Fruit"));
        editor.apply(FormEdit::text(fields::NAME, "Fruits"));

        let ticket = editor.begin_submit().unwrap();
        assert_eq!(ticket.mode, EditorMode::Edit { id: "c1".into() });
        let Payload::Json(body) = &ticket.payload else {
            panic!("expected json");
        };
        assert_eq!(body["name"], json!("Fruits"));
        assert_eq!(body["_id"], json!("c1"));
        assert!(editor.is_submitting());

        editor.apply(FormEdit::text(fields::NAME, "ignored while submitting"));
        assert_eq!(editor.form().get(fields::NAME), "Fruits");

        assert_eq!(editor.finish_submit(&ticket, Ok(())), SubmitOutcome::Saved);
        assert_eq!(editor.status(), EditorStatus::Closed);
    }

    #[test]
    fn failed_submit_reopens_with_same_form_and_record() {
        let mut editor = EditorState::default();
        editor.open_edit(category("1", "A"));
        editor.apply(FormEdit::text(fields::NAME, "B"));
        let ticket = editor.begin_submit().unwrap();

        let outcome = editor.finish_submit(&ticket, Err("Failed to update category".into()));

        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.mode(), &EditorMode::Edit { id: "1".into() });
        assert_eq!(editor.form().get(fields::NAME), "B");
        assert_eq!(editor.editing().map(|c| c.name.as_str()), Some("A"));
        assert_eq!(editor.error(), Some("Failed to update category"));
    }

    #[test]
    fn results_for_abandoned_sessions_are_dropped() {
        let mut editor = EditorState::<Category>::default();
        let fetch = editor.begin_fetch("c1");
        editor.cancel();
        assert!(!editor.finish_fetch(&fetch, Ok(category("c1", "Fruit"))));
        assert_eq!(editor.status(), EditorStatus::Closed);

        editor.open_edit(category("c2", "Veg"));
        let submit = editor.begin_submit().unwrap();
        editor.cancel();
        editor.open_create();
        assert_eq!(editor.finish_submit(&submit, Err("boom".into())), SubmitOutcome::Stale);
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.error(), None);
    }

    #[test]
    fn fetch_populates_the_form() {
        let mut editor = EditorState::<Category>::default();
        let ticket = editor.begin_fetch("c9");
        assert_eq!(editor.status(), EditorStatus::Fetching);
        assert!(editor.finish_fetch(&ticket, Ok(category("c9", "Dairy"))));
        assert_eq!(editor.status(), EditorStatus::Open);
        assert_eq!(editor.form().get(fields::NAME), "Dairy");
        assert_eq!(editor.title(), "Edit category");
    }
}
