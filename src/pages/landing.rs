use log::info;
use yew::prelude::*;

use crate::components::nav::Nav;
use crate::content::{FAQS, SERVICES};
use crate::pages::{
    about::About, contact::Contact, faq::Faq, footer::Footer, hero::Hero,
    how_it_works::HowItWorks, services::Services,
};
use crate::state::{FaqAccordion, HoverAction, MenuAction, MenuState, ServiceHover};

/// The whole page. Owns the three interaction cells and hands each section
/// only the slice it renders.
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let menu = use_reducer(MenuState::default);
    let faq = use_reducer(|| FaqAccordion::new(FAQS.len()));
    let hover = use_reducer(|| ServiceHover::new(SERVICES.len()));

    let on_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |action: MenuAction| menu.dispatch(action))
    };
    let on_faq = {
        let faq = faq.dispatcher();
        Callback::from(move |index: usize| faq.dispatch(index))
    };
    let on_hover = {
        let hover = hover.dispatcher();
        Callback::from(move |action: HoverAction| hover.dispatch(action))
    };

    info!("Rendering landing page");

    html! {
        <div class="landing-page">
            <Nav menu={*menu} on_menu={on_menu} />
            <Hero />
            <Services hover={*hover} on_hover={on_hover} />
            <HowItWorks />
            <About />
            <Faq faq={*faq} on_toggle={on_faq} />
            <Contact />
            <Footer />
        </div>
    }
}
