use std::marker::PhantomData;

use contracts::domain::common::Resource;
use leptos::prelude::*;
use serde::Serialize;

use super::editor::{EditorMode, SubmitOutcome};
use super::list_state::LoadOutcome;
use super::state::{CrudState, DeleteTarget, Notice, StateCell};
use crate::shared::api::{ApiClient, ApiError, Operation, Transport};
use crate::shared::form::{FormEdit, FormHandle};

/// Drives one resource page: every user action goes through here and
/// ends as a state change in `C`.
pub struct CrudController<R, T, C> {
    client: ApiClient<T>,
    state: C,
    _resource: PhantomData<fn() -> R>,
}

impl<R, T: Clone, C: Clone> Clone for CrudController<R, T, C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
            _resource: PhantomData,
        }
    }
}

fn failure<R: Resource>(operation: Operation, error: &ApiError) -> String {
    let message = error.user_message(&operation.fallback::<R>());
    log::error!("{} {}: {}", R::resource_index(), operation.verb(), error);
    message
}

impl<R, T, C> CrudController<R, T, C>
where
    R: Resource,
    T: Transport + Clone,
    C: StateCell<CrudState<R>>,
{
    pub fn new(client: ApiClient<T>, state: C) -> Self {
        Self {
            client,
            state,
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    // ========================================================================
    // Collection
    // ========================================================================

    pub async fn load(&self) {
        let Some((ticket, query)) = self
            .state
            .apply(|s| (s.list.begin_load(), s.list.server_query()))
        else {
            return;
        };
        let result = self
            .client
            .list::<R>(&query)
            .await
            .map_err(|e| failure::<R>(Operation::Load, &e));

        self.state.apply(|s| match s.list.finish_load(ticket, result) {
            LoadOutcome::Loaded => {}
            LoadOutcome::Stale => log::debug!("{} dropped a stale load", R::resource_index()),
            LoadOutcome::Failed(message) => s.notice = Some(Notice::error(message)),
        });
    }

    pub fn set_search(&self, text: &str) {
        self.state.apply(|s| s.list.set_search(text));
    }

    /// Backend-side filters trigger a reload, the rest filter in place.
    pub async fn set_selection(&self, key: &str, value: &str) {
        self.state.apply(|s| s.list.set_selection(key, value));
        if R::server_filters().contains(&key) {
            self.load().await;
        }
    }

    pub async fn clear_filters(&self) {
        let had_server_filter = self
            .state
            .apply(|s| {
                let had = R::server_filters()
                    .iter()
                    .any(|key| !s.list.selection(key).is_empty());
                s.list.clear_filters();
                had
            })
            .unwrap_or(false);
        if had_server_filter {
            self.load().await;
        }
    }

    pub fn set_page(&self, page: usize) {
        self.state.apply(|s| s.list.set_page(page));
    }

    pub fn dismiss_notice(&self) {
        self.state.apply(|s| s.notice = None);
    }

    // ========================================================================
    // Editor
    // ========================================================================

    pub fn open_create(&self) {
        self.state.apply(|s| s.editor.open_create());
    }

    /// Edits a record already held by the list.
    pub fn open_edit(&self, record: R) {
        self.state.apply(|s| s.editor.open_edit(record));
    }

    /// Edits a record fetched fresh from the backend.
    pub async fn open_by_id(&self, id: &str) {
        let Some(ticket) = self.state.apply(|s| s.editor.begin_fetch(id)) else {
            return;
        };
        let result = self
            .client
            .get::<R>(id)
            .await
            .map_err(|e| failure::<R>(Operation::Fetch, &e));
        self.state.apply(|s| {
            if !s.editor.finish_fetch(&ticket, result) {
                log::debug!("{} dropped a stale fetch of {id}", R::resource_index());
            }
        });
    }

    pub fn edit(&self, edit: FormEdit) {
        self.state.apply(|s| s.editor.apply(edit));
    }

    pub fn cancel(&self) {
        self.state.apply(|s| s.editor.cancel());
    }

    async fn write(&self) -> (SubmitOutcome, bool) {
        let ticket = match self.state.apply(|s| s.editor.begin_submit()) {
            Some(Ok(ticket)) => ticket,
            Some(Err(error)) => {
                log::debug!("{} submit refused: {error}", R::resource_index());
                return (SubmitOutcome::Failed, false);
            }
            None => return (SubmitOutcome::Stale, false),
        };

        let (operation, result) = match &ticket.mode {
            EditorMode::Create => (
                Operation::Create,
                self.client.create::<R>(ticket.payload.clone()).await,
            ),
            EditorMode::Edit { id } => (
                Operation::Update,
                self.client.update::<R>(id, ticket.payload.clone()).await,
            ),
        };
        let written = result.is_ok();
        let result = result.map_err(|e| failure::<R>(operation, &e));

        let outcome = self
            .state
            .apply(|s| {
                let outcome = s.editor.finish_submit(&ticket, result);
                if outcome == SubmitOutcome::Saved {
                    s.notice = Some(Notice::success(format!("{} saved", R::element_name())));
                }
                outcome
            })
            .unwrap_or(SubmitOutcome::Stale);
        (outcome, written)
    }

    /// Sends the form without touching the list.
    pub async fn submit(&self) -> SubmitOutcome {
        self.write().await.0
    }

    /// Sends the form and reloads the list after any successful write.
    pub async fn save(&self) -> SubmitOutcome {
        let (outcome, written) = self.write().await;
        if written {
            self.load().await;
        }
        outcome
    }

    // ========================================================================
    // Delete and status
    // ========================================================================

    pub fn request_delete(&self, record: &R) {
        let target = DeleteTarget {
            id: record.id().to_string(),
            label: record.display_name().to_string(),
        };
        self.state.apply(|s| s.confirm.request(target));
    }

    pub fn cancel_delete(&self) {
        self.state.apply(|s| s.confirm.cancel());
    }

    /// Deletes the record awaiting confirmation. Without one, nothing is sent.
    pub async fn confirm_delete(&self) -> bool {
        let Some(Some(target)) = self.state.apply(|s| s.confirm.confirm()) else {
            return false;
        };
        let result = self.client.delete::<R>(&target.id).await;
        let deleted = result.is_ok();
        let notice = match result {
            Ok(()) => Notice::success(format!("{} deleted", target.label)),
            Err(e) => Notice::error(failure::<R>(Operation::Delete, &e)),
        };
        self.state.apply(|s| {
            s.confirm.settle();
            s.notice = Some(notice);
        });
        if deleted {
            self.load().await;
        }
        deleted
    }

    pub async fn change_status<B: Serialize>(&self, id: &str, body: &B) -> bool {
        self.state.apply(|s| s.status_busy.insert(id.to_string()));
        let result = self.client.change_status::<R, B>(id, body).await;
        let changed = result.is_ok();
        self.state.apply(|s| {
            s.status_busy.remove(id);
            s.notice = Some(match &result {
                Ok(()) => Notice::success("Status updated"),
                Err(e) => Notice::error(failure::<R>(Operation::ChangeStatus, e)),
            });
        });
        if changed {
            self.load().await;
        }
        changed
    }
}

/// Form handle over the editor held in a page's state signal.
pub fn form_handle<R: Resource>(state: RwSignal<CrudState<R>>) -> FormHandle {
    let form = Memo::new(move |_| state.with(|s| s.editor.form().clone()));
    let uploads = Memo::new(move |_| state.with(|s| s.editor.uploads().clone()));
    let busy = Memo::new(move |_| state.with(|s| s.editor.is_submitting()));
    FormHandle::new(
        form.into(),
        uploads.into(),
        busy.into(),
        Callback::new(move |edit: FormEdit| state.update(|s| s.editor.apply(edit))),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::{Method, Payload};
    use crate::shared::crud::confirm::ConfirmDialog;
    use crate::shared::crud::editor::EditorStatus;
    use crate::system::auth::AuthContext;
    use contracts::domain::a002_category::{fields, Category};
    use contracts::domain::a003_order::{Order, OrderStatusUpdate};
    use futures::executor::block_on;
    use serde_json::json;

    type Cell<R> = Rc<RefCell<CrudState<R>>>;

    fn controller<R: Resource>(mock: &MockTransport) -> CrudController<R, MockTransport, Cell<R>> {
        let client = ApiClient::new("http://api.test", || AuthContext::bearer("t"), mock.clone());
        CrudController::new(client, Rc::new(RefCell::new(CrudState::default())))
    }

    const TWO_CATEGORIES: &str =
        r#"{"categories":[{"_id":"c1","name":"Fruits"},{"_id":"c2","name":"Dairy"}]}"#;

    #[test]
    fn load_fills_the_list() {
        let mock = MockTransport::default();
        mock.respond(200, TWO_CATEGORIES);
        let ctrl = controller::<Category>(&mock);

        block_on(ctrl.load());

        let state = ctrl.state().borrow();
        assert_eq!(state.list.records().len(), 2);
        assert!(!state.list.loading());
        assert_eq!(state.notice, None);
    }

    #[test]
    fn failed_load_keeps_records_and_reports() {
        let mock = MockTransport::default();
        mock.respond(200, TWO_CATEGORIES);
        mock.fail("offline");
        let ctrl = controller::<Category>(&mock);

        block_on(ctrl.load());
        block_on(ctrl.load());

        let state = ctrl.state().borrow();
        assert_eq!(state.list.records().len(), 2);
        assert_eq!(state.notice, Some(Notice::error("Failed to load categories")));
    }

    #[test]
    fn delete_needs_confirmation() {
        let mock = MockTransport::default();
        mock.respond(200, TWO_CATEGORIES);
        let ctrl = controller::<Category>(&mock);
        block_on(ctrl.load());

        assert!(!block_on(ctrl.confirm_delete()));
        assert_eq!(mock.requests().len(), 1);

        let dairy = ctrl.state().borrow().list.records()[1].clone();
        ctrl.request_delete(&dairy);
        ctrl.cancel_delete();
        assert!(!block_on(ctrl.confirm_delete()));
        assert_eq!(mock.requests().len(), 1, "cancelled delete sends nothing");

        mock.respond(200, r#"{"message":"deleted"}"#);
        mock.respond(200, r#"{"categories":[{"_id":"c1","name":"Fruits"}]}"#);
        ctrl.request_delete(&dairy);
        assert!(block_on(ctrl.confirm_delete()));

        let sent = mock.requests();
        assert_eq!(sent[1].method, Method::Delete);
        assert_eq!(sent[1].url, "http://api.test/api/categories/c2");
        let state = ctrl.state().borrow();
        assert_eq!(state.list.records().len(), 1);
        assert_eq!(state.confirm, ConfirmDialog::Idle);
        assert_eq!(state.notice, Some(Notice::success("Dairy deleted")));
    }

    #[test]
    fn failed_delete_reports_and_keeps_rows() {
        let mock = MockTransport::default();
        mock.respond(200, TWO_CATEGORIES);
        mock.respond(409, r#"{"error":"Category has products"}"#);
        let ctrl = controller::<Category>(&mock);
        block_on(ctrl.load());

        let fruits = ctrl.state().borrow().list.records()[0].clone();
        ctrl.request_delete(&fruits);
        assert!(!block_on(ctrl.confirm_delete()));

        let state = ctrl.state().borrow();
        assert_eq!(state.list.records().len(), 2);
        assert_eq!(state.notice, Some(Notice::error("Category has products")));
        assert_eq!(mock.requests().len(), 2);
    }

    #[test]
    fn create_then_list_shows_the_new_record() {
        let mock = MockTransport::default();
        mock.respond(200, "[]");
        let ctrl = controller::<Category>(&mock);
        block_on(ctrl.load());

        ctrl.open_create();
        ctrl.edit(FormEdit::text(fields::NAME, "  Bakery "));
        mock.respond(201, r#"{"category":{"_id":"c3","name":"Bakery"}}"#);
        mock.respond(200, r#"[{"_id":"c3","name":"Bakery"}]"#);

        assert_eq!(block_on(ctrl.save()), SubmitOutcome::Saved);

        let sent = mock.requests();
        assert_eq!(sent[1].method, Method::Post);
        match &sent[1].body {
            Payload::Json(body) => assert_eq!(body["name"], json!("Bakery")),
            other => panic!("expected json, got {other:?}"),
        }
        let state = ctrl.state().borrow();
        assert_eq!(state.editor.status(), EditorStatus::Closed);
        assert_eq!(state.list.records()[0].name, "Bakery");
    }

    #[test]
    fn invalid_form_sends_nothing() {
        let mock = MockTransport::default();
        let ctrl = controller::<Category>(&mock);
        ctrl.open_create();

        assert_eq!(block_on(ctrl.save()), SubmitOutcome::Failed);
        assert!(mock.requests().is_empty());
        assert_eq!(ctrl.state().borrow().editor.problems(), ["Name is required"]);
    }

    #[test]
    fn rejected_update_keeps_the_form_open() {
        let mock = MockTransport::default();
        mock.respond(200, r#"{"category":{"_id":"c1","name":"Fruits"}}"#);
        mock.respond(422, r#"{"message":"Name already exists"}"#);
        let ctrl = controller::<Category>(&mock);

        block_on(ctrl.open_by_id("c1"));
        ctrl.edit(FormEdit::text(fields::NAME, "Dairy"));
        assert_eq!(block_on(ctrl.save()), SubmitOutcome::Failed);

        let sent = mock.requests();
        assert_eq!(sent.len(), 2, "no reload after a failed write");
        assert_eq!(sent[1].method, Method::Put);
        let state = ctrl.state().borrow();
        assert_eq!(state.editor.status(), EditorStatus::Open);
        assert_eq!(state.editor.error(), Some("Name already exists"));
        assert_eq!(state.editor.form().get(fields::NAME), "Dairy");
    }

    #[test]
    fn cancel_is_idempotent_and_offline() {
        let mock = MockTransport::default();
        let ctrl = controller::<Category>(&mock);
        ctrl.open_create();
        ctrl.cancel();
        ctrl.cancel();
        assert_eq!(ctrl.state().borrow().editor.status(), EditorStatus::Closed);
        assert!(mock.requests().is_empty());
    }

    #[test]
    fn server_filter_reloads_with_query() {
        let mock = MockTransport::default();
        mock.respond(200, r#"{"orders":[]}"#);
        mock.respond(200, r#"{"orders":[]}"#);
        let ctrl = controller::<Order>(&mock);

        block_on(ctrl.set_selection("status", "packed"));
        block_on(ctrl.set_selection("payment", "paid"));
        block_on(ctrl.clear_filters());

        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            ["http://api.test/api/orders?status=packed", "http://api.test/api/orders"]
        );
    }

    #[test]
    fn status_change_reloads_on_success() {
        let mock = MockTransport::default();
        mock.respond(200, "{}");
        mock.respond(200, r#"{"orders":[{"_id":"o1","status":"packed"}]}"#);
        let ctrl = controller::<Order>(&mock);

        let body = OrderStatusUpdate {
            status: "packed".into(),
            note: None,
        };
        assert!(block_on(ctrl.change_status("o1", &body)));

        let state = ctrl.state().borrow();
        assert!(state.status_busy.is_empty());
        assert_eq!(state.list.records()[0].status, "packed");
        assert_eq!(state.notice, Some(Notice::success("Status updated")));
    }

    #[test]
    fn rejected_status_change_keeps_the_saved_status() {
        let mock = MockTransport::default();
        mock.respond(200, r#"{"orders":[{"_id":"o1","status":"pending"}]}"#);
        mock.respond(400, r#"{"message":"Cannot move a pending order to delivered"}"#);
        let ctrl = controller::<Order>(&mock);
        block_on(ctrl.load());

        let body = OrderStatusUpdate {
            status: "delivered".into(),
            note: None,
        };
        assert!(!block_on(ctrl.change_status("o1", &body)));

        assert_eq!(mock.requests().len(), 2, "no reload after a rejection");
        let state = ctrl.state().borrow();
        assert_eq!(state.list.records()[0].status, "pending");
        assert!(!state.is_busy("o1"));
        assert_eq!(
            state.notice,
            Some(Notice::error("Cannot move a pending order to delivered"))
        );
    }

    #[test]
    fn concurrent_status_changes_stay_busy_independently() {
        const PACKED: &str = r#"{"orders":[{"_id":"o1","status":"packed"},{"_id":"o2","status":"packed"}]}"#;
        let mock = MockTransport::default();
        let release = mock.hold_next();
        let ctrl = controller::<Order>(&mock);
        let body = OrderStatusUpdate {
            status: "packed".into(),
            note: None,
        };

        block_on(async {
            let slow = ctrl.change_status("o1", &body);
            futures::pin_mut!(slow);
            assert!(futures::poll!(slow.as_mut()).is_pending());
            assert!(ctrl.state().borrow().is_busy("o1"));

            mock.respond(200, "{}");
            mock.respond(200, PACKED);
            assert!(ctrl.change_status("o2", &body).await);
            {
                let state = ctrl.state().borrow();
                assert!(state.is_busy("o1"), "o1 is still waiting on the server");
                assert!(!state.is_busy("o2"));
            }

            mock.respond(200, "{}");
            mock.respond(200, PACKED);
            release.send(()).unwrap();
            assert!(slow.await);
        });

        assert!(ctrl.state().borrow().status_busy.is_empty());
    }
}
