use super::super::Screen;
use yew::prelude::*;

struct Feature {
    screen: Screen,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        screen: Screen::ProductScan,
        description: "Upload a product image or video to get health and environmental impact insights.",
    },
    Feature {
        screen: Screen::DiyGenerator,
        description: "Turn everyday items into creative DIY projects. Easy, Medium, and Hard levels.",
    },
    Feature {
        screen: Screen::ReportAnalysis,
        description: "Upload medical reports for AI-powered extraction and categorization.",
    },
];

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_navigate: Callback<Screen>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    html! {
        <div class="screen dashboard">
            <div class="hero">
                <span class="hero-badge">{"✨ AI-Powered Sustainability"}</span>
                <h1>{"Welcome to EcoVation"}</h1>
                <p class="subtitle">
                    {"Make sustainable choices with AI-powered product insights, DIY upcycling ideas, and report analysis."}
                </p>
            </div>
            <div class="feature-grid">
                { for FEATURES.iter().map(|feature| {
                    let screen = feature.screen;
                    let on_navigate = props.on_navigate.clone();
                    html! {
                        <div
                            key={screen.label()}
                            class="feature-card"
                            onclick={Callback::from(move |_: MouseEvent| on_navigate.emit(screen))}
                        >
                            <div class="feature-icon">{ screen.icon() }</div>
                            <h2>{ screen.label() }</h2>
                            <p>{ feature.description }</p>
                            <span class="feature-link">{"Get started →"}</span>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
