//! List-and-form view controller.
//!
//! [`ResourceView`] owns the behaviour of a resource screen; the UI layer
//! only renders [`ViewState`] and forwards user intents. State lives behind
//! the [`ViewStore`] port so the dashboard can keep it in a reactive signal
//! while tests keep it in a plain `RefCell`.
//!
//! Every mutation is followed by a full re-fetch of the collection. Nothing
//! is patched locally.
//!
//! Each view carries a [`CancellationToken`] scoped to its lifetime. Once
//! [`ResourceView::close`] has been called, in-flight requests are dropped
//! and their results never reach the state.

use std::cell::RefCell;
use std::rc::Rc;

use tokio_util::sync::CancellationToken;

use crate::api::ResourceClient;
use crate::error::ClientError;
use crate::resource::{Cell, Resource};
use crate::transport::Transport;

/// Message of the blocking confirmation shown before a delete.
pub const CONFIRM_DELETE: &str = "Are you sure?";

/// Local UI state of one resource screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState<R: Resource> {
    pub records: Vec<R::Record>,
    pub loading: bool,
    pub error: Option<String>,
    pub form_visible: bool,
    pub form: R::Create,
}

impl<R: Resource> Default for ViewState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
            form_visible: false,
            form: R::Create::default(),
        }
    }
}

impl<R: Resource> ViewState<R> {
    /// Label of the header toggle button.
    #[must_use]
    pub fn toggle_label(&self) -> String {
        if self.form_visible {
            "Cancel".to_string()
        } else {
            format!("Add {}", R::LABEL)
        }
    }

    /// Table rows as `(id, cells)` pairs.
    #[must_use]
    pub fn rows(&self) -> Vec<(String, Vec<Cell>)> {
        self.records
            .iter()
            .map(|record| (R::id(record).to_string(), R::cells(record)))
            .collect()
    }

    /// Text to show under the table, if the collection is empty.
    #[must_use]
    pub fn empty_text(&self) -> Option<&'static str> {
        self.records.is_empty().then_some(R::EMPTY_TEXT)
    }
}

/// Where a view keeps its state.
pub trait ViewStore<R: Resource> {
    /// Read the state without subscribing to changes.
    fn with<O>(&self, f: impl FnOnce(&ViewState<R>) -> O) -> O;

    /// Mutate the state in place.
    fn update(&self, f: impl FnOnce(&mut ViewState<R>));
}

impl<R: Resource> ViewStore<R> for Rc<RefCell<ViewState<R>>> {
    fn with<O>(&self, f: impl FnOnce(&ViewState<R>) -> O) -> O {
        f(&self.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut ViewState<R>)) {
        f(&mut self.borrow_mut());
    }
}

/// Blocking yes/no prompt.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Controller of a list-and-form screen for resource `R`.
pub struct ResourceView<R, T, S> {
    client: ResourceClient<R, T>,
    store: S,
    scope: CancellationToken,
}

impl<R, T: Clone, S: Clone> Clone for ResourceView<R, T, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            store: self.store.clone(),
            scope: self.scope.clone(),
        }
    }
}

impl<R, T, S> ResourceView<R, T, S>
where
    R: Resource,
    T: Transport,
    S: ViewStore<R>,
{
    pub fn new(client: ResourceClient<R, T>, store: S) -> Self {
        Self {
            client,
            store,
            scope: CancellationToken::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn client(&self) -> &ResourceClient<R, T> {
        &self.client
    }

    /// Tear the view down: pending and future requests are abandoned.
    pub fn close(&self) {
        self.scope.cancel();
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.scope.is_cancelled()
    }

    fn fail(&self, action: &str, noun: &str, err: &ClientError) {
        tracing::warn!(resource = R::PLURAL, error = %err, "failed to {action} {noun}");
        let message = format!("Failed to {action} {noun}");
        self.store.update(|state| state.error = Some(message));
    }

    /// Fetch the collection and replace the list.
    ///
    /// On failure the list is left as it was and the fixed fetch error is
    /// shown. `loading` is cleared either way.
    pub async fn load(&self) {
        let Some(result) = self.scope.run_until_cancelled(self.client.list()).await else {
            return;
        };
        match result {
            Ok(records) => self.store.update(|state| {
                state.records = records;
                state.loading = false;
            }),
            Err(err) => {
                self.fail("fetch", R::PLURAL, &err);
                self.store.update(|state| state.loading = false);
            }
        }
    }

    /// Show or hide the creation form. Entered values are kept.
    pub fn toggle_form(&self) {
        self.store
            .update(|state| state.form_visible = !state.form_visible);
    }

    /// Edit the creation form.
    pub fn update_form(&self, f: impl FnOnce(&mut R::Create)) {
        self.store.update(|state| f(&mut state.form));
    }

    /// Create a record from the current form.
    ///
    /// On success the form is hidden and reset, then the list re-fetched.
    /// On failure the form stays open with its values.
    pub async fn submit(&self) {
        let payload = self.store.with(|state| state.form.clone());
        let Some(result) = self
            .scope
            .run_until_cancelled(self.client.create(&payload))
            .await
        else {
            return;
        };
        match result {
            Ok(_) => {
                self.store.update(|state| {
                    state.form_visible = false;
                    state.form = R::Create::default();
                });
                self.load().await;
            }
            Err(err) => self.fail("create", R::SINGULAR, &err),
        }
    }

    /// Delete a record after confirmation, then re-fetch.
    ///
    /// Declining the prompt sends nothing.
    pub async fn delete(&self, id: &str, confirm: &impl Confirm) {
        if !confirm.confirm(CONFIRM_DELETE) {
            return;
        }
        let Some(result) = self.scope.run_until_cancelled(self.client.delete(id)).await else {
            return;
        };
        match result {
            Ok(()) => self.load().await,
            Err(err) => self.fail("delete", R::SINGULAR, &err),
        }
    }

    /// Replace a record's mutable fields, then re-fetch.
    pub async fn update(&self, id: &str, payload: &R::Update) {
        let Some(result) = self
            .scope
            .run_until_cancelled(self.client.update(id, payload))
            .await
        else {
            return;
        };
        match result {
            Ok(_) => self.load().await,
            Err(err) => self.fail("update", R::SINGULAR, &err),
        }
    }
}
