use super::super::{Model, Msg, Screen};
use yew::html::Scope;
use yew::prelude::*;

/// Renders the application header with the screen switcher
pub fn render_header(current: Screen, link: &Scope<Model>) -> Html {
    html! {
        <header class="app-header">
            <nav class="app-nav">
                <button class="brand" onclick={link.callback(|_| Msg::Navigate(Screen::Dashboard))}>
                    <span class="brand-icon">{"🌱"}</span>
                    <span class="brand-name">{"EcoVation"}</span>
                </button>
                <div class="nav-links">
                    { for Screen::ALL.iter().map(|&screen| html! {
                        <button
                            key={screen.label()}
                            class={classes!("nav-link", (screen == current).then_some("active"))}
                            onclick={link.callback(move |_| Msg::Navigate(screen))}
                        >
                            { format!("{} {}", screen.icon(), screen.label()) }
                        </button>
                    })}
                </div>
            </nav>
        </header>
    }
}
