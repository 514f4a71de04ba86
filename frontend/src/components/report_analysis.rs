use super::results::render_report;
use super::upload_section::{SubmitButton, UploadSection};
use super::utils::render_error_message;
use crate::api;
use crate::hooks::use_submission;
use gloo_file::File as GlooFile;
use shared::view::ReportView;
use shared::ReportResult;
use yew::prelude::*;

#[function_component(ReportAnalysis)]
pub fn report_analysis() -> Html {
    let submission = use_submission::<ReportResult>();

    let on_file = {
        let submission = submission.clone();
        Callback::from(move |file: GlooFile| submission.select_file(file))
    };

    let on_submit = {
        let submission = submission.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submission.submit(|file| async move {
                api::submit_report_analysis(file, api::DEMO_USER_ID).await
            });
        })
    };

    let state = submission.state();

    html! {
        <div class="screen report-analysis">
            <header class="screen-header">
                <h1>{"Report Analysis"}</h1>
                <p class="subtitle">{"Upload a medical report (PDF, image, or video) for AI-powered extraction and categorization."}</p>
            </header>

            <form class="upload-form" onsubmit={on_submit}>
                <UploadSection
                    label="Report File"
                    accept=".pdf,image/*,video/*"
                    icon="📋"
                    hint="PDF, images, or video"
                    file_name={state.file().map(|f| f.name())}
                    on_file={on_file}
                />
                <SubmitButton
                    label="🔍 Analyze Report"
                    pending_label="Analyzing..."
                    pending={state.is_pending()}
                    enabled={state.can_submit()}
                />
            </form>

            { render_error_message(state.last_error()) }
            { state.last_result().map(|result| render_report(&ReportView::from(result))).unwrap_or_default() }
        </div>
    }
}
