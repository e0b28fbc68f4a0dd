use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::content::CONTACT_LINK;
use crate::motion::{Easing, Motion};

#[function_component(Hero)]
pub fn hero() -> Html {
    let backdrop = Motion::default().opacity(0.0).over(1.0).easing(Easing::Linear);

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop entrance" style={backdrop.entrance()}></div>
            <div class="container hero-inner">
                <RevealOnScroll class="hero-copy">
                    <h1>{"Effortless Compliance for UAE Businesses"}</h1>
                    <p class="hero-subtitle">
                        {"One dashboard to manage your business documents, employee renewals, and trade licenses."}
                    </p>
                    <a href={CONTACT_LINK.href} class="btn btn-accent btn-large">
                        {"Book a Compliance Review"}
                    </a>
                </RevealOnScroll>
            </div>
        </section>
    }
}
