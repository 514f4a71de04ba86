use super::utils::render_bullet_list;
use shared::view::{DiyProjectView, ImpactView, ProductScanView, ReportView};
use shared::Tier;
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_product_scan(view: &ProductScanView) -> Html {
    html! {
        <div class="results-container">
            <h2>{"Results"}</h2>
            <div class="result-card">
                <h3>{"📋 Product Details"}</h3>
                <dl class="details-list">
                    <dt>{"Name"}</dt><dd>{ &view.name }</dd>
                    <dt>{"Description"}</dt><dd>{ &view.description }</dd>
                    <dt>{"Ingredients"}</dt><dd>{ &view.ingredients }</dd>
                    <dt>{"Manufacturing"}</dt><dd>{ &view.manufacturing_location }</dd>
                </dl>
            </div>
            { view.environmental.as_ref().map(|impact| render_impact("🌍 Environmental Impact", impact)).unwrap_or_default() }
            { view.health.as_ref().map(|impact| render_impact("❤️ Health Impact", impact)).unwrap_or_default() }
        </div>
    }
}

fn render_impact(title: &'static str, impact: &ImpactView) -> Html {
    html! {
        <div class="result-card">
            <h3>{ title }</h3>
            <div class="impact-grid">
                <div class="impact-positives">
                    <h4>{"✓ Positives"}</h4>
                    { render_bullet_list("positives", &impact.positives) }
                </div>
                <div class="impact-negatives">
                    <h4>{"✗ Negatives"}</h4>
                    { render_bullet_list("negatives", &impact.negatives) }
                </div>
            </div>
        </div>
    }
}

pub fn render_tier_tabs(selected: Tier, on_select: Callback<Tier>) -> Html {
    html! {
        <div class="tier-tabs">
            { for Tier::iter().map(|tier| {
                let on_select = on_select.clone();
                html! {
                    <button
                        key={tier.to_string()}
                        class={classes!("tier-tab", (tier == selected).then_some("selected"))}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(tier))}
                    >
                        { tier.to_string() }
                    </button>
                }
            })}
        </div>
    }
}

pub fn render_diy_project(project: &DiyProjectView) -> Html {
    html! {
        <div class="result-card diy-project">
            <h2>{ &project.title }</h2>
            {
                if let Some(image) = &project.image {
                    html! { <img class="generated-image" src={image.src.clone()} alt={image.alt.clone()} /> }
                } else {
                    html! {}
                }
            }
            <div class="materials">
                <h3>{"📎 Materials Required"}</h3>
                <ul>
                    { for project.materials.iter().map(|m| html! {
                        <li>{ format!("{}: ", m.material) }<strong>{ &m.quantity }</strong></li>
                    })}
                </ul>
            </div>
            <div class="steps">
                <h3>{"📝 Steps"}</h3>
                <ol>
                    { for project.steps.iter().map(|s| html! {
                        <li>
                            <span class="step-number">{ &s.number }</span>
                            <div>
                                <p>{ &s.description }</p>
                                <p class="step-meta">{ format!("⏱️ {} · 🛡️ {}", s.estimated_time, s.safety_tip) }</p>
                            </div>
                        </li>
                    })}
                </ol>
            </div>
            <div class="difficulty">
                <h3>{"Difficulty"}</h3>
                <p>{ &project.difficulty }</p>
            </div>
        </div>
    }
}

pub fn render_report(report: &ReportView) -> Html {
    html! {
        <div class="results-container result-card">
            <h2>{"Analysis Result"}</h2>
            <div class="report-category">
                <h3>{"📑 Report Category"}</h3>
                <p>{ &report.category }</p>
            </div>
            <div class="report-content">
                <h3>{"📄 Extracted Content"}</h3>
                { render_bullet_list("extracted-items", &report.items) }
            </div>
            {
                if let Some(path) = &report.stored_at {
                    html! { <p class="stored-at">{ format!("Stored as {}", path) }</p> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(owner) = &report.owner {
                    html! { <p class="report-owner">{ format!("Uploaded by {}", owner) }</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
