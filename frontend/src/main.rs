mod api;
mod components;
mod hooks;

use components::dashboard::Dashboard;
use components::diy_generator::DiyGenerator;
use components::header::render_header;
use components::product_scan::ProductScan;
use components::report_analysis::ReportAnalysis;
use shared::ApiConfig;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    ProductScan,
    DiyGenerator,
    ReportAnalysis,
}

impl Screen {
    pub const ALL: [Screen; 4] = [
        Screen::Dashboard,
        Screen::ProductScan,
        Screen::DiyGenerator,
        Screen::ReportAnalysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::ProductScan => "Scan Product",
            Screen::DiyGenerator => "DIY Generator",
            Screen::ReportAnalysis => "Report Analysis",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Screen::Dashboard => "🏠",
            Screen::ProductScan => "📦",
            Screen::DiyGenerator => "🛠️",
            Screen::ReportAnalysis => "📋",
        }
    }
}

// Yew msg components
pub enum Msg {
    Navigate(Screen),
}

// Main component. Screens own their upload state, so switching away drops it.
pub struct Model {
    screen: Screen,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            screen: Screen::Dashboard,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(screen) => {
                if self.screen == screen {
                    return false;
                }
                log::info!("Navigating to {}", screen.label());
                self.screen = screen;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                { render_header(self.screen, link) }

                <main class="main-content">
                {
                    match self.screen {
                        Screen::Dashboard => html! {
                            <Dashboard on_navigate={link.callback(Msg::Navigate)} />
                        },
                        Screen::ProductScan => html! { <ProductScan /> },
                        Screen::DiyGenerator => html! { <DiyGenerator /> },
                        Screen::ReportAnalysis => html! { <ReportAnalysis /> },
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{"EcoVation | Fullstack Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting against {}", ApiConfig::global().api_base_url);
    yew::Renderer::<Model>::new().render();
}
