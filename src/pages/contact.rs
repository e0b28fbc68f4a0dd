use log::debug;
use yew::prelude::*;

use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::INQUIRY_TYPES;

/// Static enquiry form. Nothing is sent anywhere; submitting only stops the
/// browser from reloading the page.
#[function_component(Contact)]
pub fn contact() -> Html {
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("contact form submitted; no handler is attached");
    });

    let field_delay = |slot: usize| slot as f64 * config::STAGGER_SECS;

    html! {
        <section id="contact" class="section section-white">
            <div class="container narrow">
                <RevealOnScroll>
                    <h2 class="section-title">{"Get Started"}</h2>
                    <p class="section-subtitle">
                        {"Ready to streamline your business compliance? Let's talk."}
                    </p>
                </RevealOnScroll>
                <form class="contact-form" onsubmit={onsubmit}>
                    <div class="grid grid-2">
                        <RevealOnScroll delay={field_delay(0)}>
                            <label class="field">
                                <span class="field-label">{"Name"}</span>
                                <input type="text" name="name" placeholder="Your name" />
                            </label>
                        </RevealOnScroll>
                        <RevealOnScroll delay={field_delay(1)}>
                            <label class="field">
                                <span class="field-label">{"Email"}</span>
                                <input type="email" name="email" placeholder="your@email.com" />
                            </label>
                        </RevealOnScroll>
                    </div>
                    <RevealOnScroll delay={field_delay(2)}>
                        <label class="field">
                            <span class="field-label">{"Inquiry Type"}</span>
                            <select name="inquiry">
                                { for INQUIRY_TYPES.iter().map(|kind| html! { <option>{ *kind }</option> }) }
                            </select>
                        </label>
                    </RevealOnScroll>
                    <RevealOnScroll delay={field_delay(3)}>
                        <label class="field">
                            <span class="field-label">{"Message"}</span>
                            <textarea name="message" rows="4" placeholder="Tell us about your needs..." />
                        </label>
                    </RevealOnScroll>
                    <RevealOnScroll delay={field_delay(4)}>
                        <button type="submit" class="btn btn-accent btn-block">{"Send Message"}</button>
                    </RevealOnScroll>
                </form>
            </div>
        </section>
    }
}
