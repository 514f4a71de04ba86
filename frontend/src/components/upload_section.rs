use super::utils::{debounce, first_file};
use gloo_file::File as GlooFile;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UploadSectionProps {
    pub label: AttrValue,
    pub accept: AttrValue,
    pub icon: AttrValue,
    pub hint: AttrValue,
    pub file_name: Option<String>,
    pub on_file: Callback<GlooFile>,
}

/// File chooser with click and drag & drop. Choosing a file never submits.
#[function_component(UploadSection)]
pub fn upload_section(props: &UploadSectionProps) -> Html {
    let is_dragging = use_state(|| false);
    let input_ref = use_node_ref();

    let handle_change = {
        let on_file = props.on_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().as_ref().and_then(first_file) {
                on_file.emit(file);
            }
            input.set_value("");
        })
    };

    let handle_drag_over = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(true);
        })
    };

    let handle_drag_leave = {
        let is_dragging = is_dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);
        })
    };

    let handle_drop = {
        let is_dragging = is_dragging.clone();
        let on_file = props.on_file.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            is_dragging.set(false);

            if let Some(file) = e
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .as_ref()
                .and_then(first_file)
            {
                on_file.emit(file);
            }
        })
    };

    let trigger_file_input = {
        let input_ref = input_ref.clone();
        move || {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                input.click();
            }
        }
    };

    html! {
        <div class="upload-section">
            <label class="field-label">{ props.label.clone() }</label>
            <input
                ref={input_ref}
                type="file"
                accept={props.accept.clone()}
                style="display: none;"
                onchange={handle_change}
            />
            <div
                class={classes!("upload-area", props.file_name.is_some().then_some("has-file"), is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, trigger_file_input)}
            >
                <div class="upload-placeholder">
                    <span class="upload-icon">{ props.icon.clone() }</span>
                    <p>{ props.file_name.clone().unwrap_or_else(|| "Click or drag to upload".to_string()) }</p>
                    <p class="file-types">{ props.hint.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub pending_label: AttrValue,
    pub pending: bool,
    pub enabled: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" class="analyze-btn" disabled={!props.enabled}>
            {
                if props.pending {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{ format!(" {}", props.pending_label) }</> }
                } else {
                    html! { { props.label.clone() } }
                }
            }
        </button>
    }
}
