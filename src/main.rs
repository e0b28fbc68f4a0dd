use log::info;
use yew::prelude::*;

mod config;
mod content;
mod motion;
mod state;
mod theme;

mod components {
    pub mod icon;
    pub mod nav;
    pub mod reveal;
}

mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod landing;
    pub mod services;
}

use pages::landing::LandingPage;
use theme::Theme;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Theme />
            <LandingPage />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {} landing page", config::BRAND_NAME);
    yew::Renderer::<App>::new().render();
}
