use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::FAQS;
use crate::motion;
use crate::state::FaqAccordion;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub faq: FaqAccordion,
    pub on_toggle: Callback<usize>,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let items = FAQS.iter().enumerate().map(|(index, entry)| {
        let expanded = props.faq.is_expanded(index);
        let onclick = props.on_toggle.reform(move |e: MouseEvent| {
            e.prevent_default();
            index
        });
        let panel_id = format!("faq-answer-{}", index);
        let controls = panel_id.clone();

        html! {
            <div class={classes!("faq-item", expanded.then_some("open"))}>
                <button
                    class="faq-question"
                    onclick={onclick}
                    aria-expanded={expanded.to_string()}
                    aria-controls={controls}
                >
                    <span class="question-text">{ entry.question }</span>
                    <span class="chevron" style={motion::chevron(expanded).style()}>
                        <IconGlyph icon={Icon::ChevronDown} class="icon-sm" />
                    </span>
                </button>
                <div
                    id={panel_id}
                    class="faq-answer"
                    style={motion::collapse(expanded, config::ACCORDION_DURATION_SECS)}
                    aria-hidden={(!expanded).to_string()}
                >
                    <div class="faq-answer-inner">
                        <p>{ entry.answer }</p>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <section id="faqs" class="section section-tinted">
            <div class="container">
                <RevealOnScroll>
                    <h2 class="section-title">{"Common Questions"}</h2>
                    <p class="section-subtitle">{"Everything you need to know about our services"}</p>
                </RevealOnScroll>
                <RevealOnScroll class="faq-list">
                    { for items }
                </RevealOnScroll>
            </div>
        </section>
    }
}
