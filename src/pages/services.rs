use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::SERVICES;
use crate::motion;
use crate::state::{HoverAction, ServiceHover};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub hover: ServiceHover,
    pub on_hover: Callback<HoverAction>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let cards = SERVICES.iter().enumerate().map(|(index, service)| {
        let hovered = props.hover.is_hovered(index);
        let onmouseenter = props.on_hover.reform(move |_: MouseEvent| HoverAction::Enter(index));
        let onmouseleave = props.on_hover.reform(move |_: MouseEvent| HoverAction::Leave(index));

        html! {
            <RevealOnScroll delay={index as f64 * config::STAGGER_SECS}>
                <div
                    class={classes!("service-card", hovered.then_some("hovered"))}
                    style={motion::service_card(hovered).style()}
                    onmouseenter={onmouseenter}
                    onmouseleave={onmouseleave}
                >
                    <div class="card-tint" style={motion::card_tint(hovered).style()}></div>
                    <div class="card-body">
                        <div class="card-icon">
                            <IconGlyph icon={service.icon} class="icon-xl" />
                        </div>
                        <h3>{ service.title }</h3>
                        <p>{ service.description }</p>
                    </div>
                </div>
            </RevealOnScroll>
        }
    });

    html! {
        <section id="services" class="section section-white">
            <div class="container">
                <RevealOnScroll>
                    <h2 class="section-title">{"Our Services"}</h2>
                    <p class="section-subtitle">
                        {"Streamline your business compliance with our digital-first approach"}
                    </p>
                </RevealOnScroll>
                <div class="grid grid-3">
                    { for cards }
                </div>
            </div>
        </section>
    }
}
