use super::results::{render_diy_project, render_tier_tabs};
use super::upload_section::{SubmitButton, UploadSection};
use super::utils::render_error_message;
use crate::api;
use crate::hooks::use_submission;
use gloo_file::File as GlooFile;
use shared::view::diy_project_view;
use shared::{DiyResult, Tier, TierSelection};
use yew::prelude::*;

#[function_component(DiyGenerator)]
pub fn diy_generator() -> Html {
    let submission = use_submission::<DiyResult>();
    let selection = use_state(TierSelection::default);

    let on_file = {
        let submission = submission.clone();
        Callback::from(move |file: GlooFile| submission.select_file(file))
    };

    let on_submit = {
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submission.submit(api::submit_diy_request);
        })
    };

    let state = submission.state();
    let revision = state.successes();
    let tier = selection.current(revision);

    let on_select_tier = {
        let selection = selection.clone();
        Callback::from(move |tier: Tier| {
            let mut next = *selection;
            next.select(tier, revision);
            selection.set(next);
        })
    };

    html! {
        <div class="screen diy-generator">
            <header class="screen-header">
                <h1>{"DIY Generator"}</h1>
                <p class="subtitle">{"Upload an image of an item to get DIY project ideas at Easy, Medium, and Hard levels."}</p>
            </header>

            <form class="upload-form" onsubmit={on_submit}>
                <UploadSection
                    label="Item Image"
                    accept="image/*"
                    icon="🛠️"
                    hint="PNG, JPG, etc."
                    file_name={state.file().map(|f| f.name())}
                    on_file={on_file}
                />
                <SubmitButton
                    label="✨ Generate DIY Projects"
                    pending_label="Generating..."
                    pending={state.is_pending()}
                    enabled={state.can_submit()}
                />
            </form>

            { render_error_message(state.last_error()) }
            {
                if let Some(result) = state.last_result() {
                    html! {
                        <div class="results-container">
                            { render_tier_tabs(tier, on_select_tier) }
                            { diy_project_view(result, tier).as_ref().map(render_diy_project).unwrap_or_default() }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
