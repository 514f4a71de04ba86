use std::cell::{Ref, RefCell};
use std::future::Future;
use std::rc::Rc;

use gloo_file::File as GlooFile;
use shared::{ApiError, Ticket, UploadState};
use wasm_bindgen_futures::spawn_local;
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;

/// Upload state for one screen, shared between its callbacks and the
/// request future. Cheap to clone.
pub struct UseSubmissionHandle<T> {
    state: Rc<RefCell<UploadState<GlooFile, T>>>,
    rerender: UseForceUpdateHandle,
}

impl<T> Clone for UseSubmissionHandle<T> {
    fn clone(&self) -> Self {
        Self {
            state: Rc::clone(&self.state),
            rerender: self.rerender.clone(),
        }
    }
}

impl<T: 'static> UseSubmissionHandle<T> {
    pub fn state(&self) -> Ref<'_, UploadState<GlooFile, T>> {
        self.state.borrow()
    }

    pub fn select_file(&self, file: GlooFile) {
        log::info!("Selected file: {}", file.name());
        self.state.borrow_mut().select_file(file);
        self.rerender.force_update();
    }

    /// Sends the selected file with `request`, unless there is no file or a
    /// request is already in flight. The check runs synchronously, so a
    /// double click cannot dispatch twice.
    pub fn submit<F, Fut>(&self, request: F)
    where
        F: FnOnce(GlooFile) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let Some(Ticket { generation, file }) = self.state.borrow_mut().begin() else {
            log::debug!("Submit ignored: no file selected or request pending");
            return;
        };
        self.rerender.force_update();

        let response = request(file);
        let state = Rc::clone(&self.state);
        let rerender = self.rerender.clone();

        spawn_local(async move {
            let result = response.await;

            if let Err(e) = &result {
                log::error!("Request {} failed: {:?}", generation, e);
            }
            if state.borrow_mut().settle(generation, result) {
                rerender.force_update();
            }
        });
    }
}

/// Generic async submission: one instance per upload screen.
#[hook]
pub fn use_submission<T: 'static>() -> UseSubmissionHandle<T> {
    let state = use_mut_ref(UploadState::<GlooFile, T>::new);
    let rerender = use_force_update();

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            move || state.borrow_mut().detach()
        });
    }

    UseSubmissionHandle { state, rerender }
}
