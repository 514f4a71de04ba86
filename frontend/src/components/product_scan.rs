use super::results::render_product_scan;
use super::upload_section::{SubmitButton, UploadSection};
use super::utils::render_error_message;
use crate::api;
use crate::hooks::use_submission;
use gloo_file::File as GlooFile;
use shared::view::ProductScanView;
use shared::ProductScanResult;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(ProductScan)]
pub fn product_scan() -> Html {
    let submission = use_submission::<ProductScanResult>();
    let medical_context = use_state(|| api::DEFAULT_MEDICAL_CONTEXT.to_string());

    let on_file = {
        let submission = submission.clone();
        Callback::from(move |file: GlooFile| submission.select_file(file))
    };

    let on_context_input = {
        let medical_context = medical_context.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            medical_context.set(input.value());
        })
    };

    let on_submit = {
        let submission = submission.clone();
        let medical_context = medical_context.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let context = (*medical_context).clone();
            submission.submit(move |file| async move {
                api::submit_product_scan(file, &context).await
            });
        })
    };

    let state = submission.state();

    html! {
        <div class="screen product-scan">
            <header class="screen-header">
                <h1>{"Scan Product"}</h1>
                <p class="subtitle">{"Upload an image or video of a product to analyze its health and environmental impact."}</p>
            </header>

            <form class="upload-form" onsubmit={on_submit}>
                <UploadSection
                    label="Product Image/Video"
                    accept="image/*,video/*"
                    icon="📦"
                    hint="PNG, JPG, MP4, etc."
                    file_name={state.file().map(|f| f.name())}
                    on_file={on_file}
                />
                <div class="form-field">
                    <label class="field-label" for="medical-context">{"Medical conditions (optional)"}</label>
                    <input
                        id="medical-context"
                        type="text"
                        value={(*medical_context).clone()}
                        placeholder="e.g. None, allergies, diabetes..."
                        oninput={on_context_input}
                    />
                </div>
                <SubmitButton
                    label="🔍 Scan Product"
                    pending_label="Analyzing..."
                    pending={state.is_pending()}
                    enabled={state.can_submit()}
                />
            </form>

            { render_error_message(state.last_error()) }
            { state.last_result().map(|result| render_product_scan(&ProductScanView::from(result))).unwrap_or_default() }
        </div>
    }
}
