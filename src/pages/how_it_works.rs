use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::STEPS;

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="section section-tinted">
            <div class="container">
                <RevealOnScroll>
                    <h2 class="section-title">{"How It Works"}</h2>
                    <p class="section-subtitle">
                        {"Four simple steps to streamline your business compliance"}
                    </p>
                </RevealOnScroll>
                <div class="grid grid-4">
                    { for STEPS.iter().enumerate().map(|(index, step)| html! {
                        <RevealOnScroll delay={index as f64 * config::STAGGER_SECS} class="step">
                            <div class="step-disc">
                                <IconGlyph icon={step.icon} class="icon-lg" />
                            </div>
                            <h3>{ step.title }</h3>
                            <p>{ step.description }</p>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}
