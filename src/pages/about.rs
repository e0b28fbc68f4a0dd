use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::FEATURES;
use crate::motion;

#[function_component(About)]
pub fn about() -> Html {
    let picture = motion::slide_in(20.0, 0.6, 0.3);
    let overlay = motion::Motion::default().opacity(0.0).over(0.6).after(0.6);

    html! {
        <section id="about" class="section section-white">
            <div class="container grid grid-2 about-grid">
                <div>
                    <RevealOnScroll>
                        <h2 class="section-title align-left">{"About "}{ config::BRAND_NAME }</h2>
                        <p class="lead">
                            {"We are not a typing center. We are your digital compliance team."}
                        </p>
                        <p class="body-copy">
                            {"Doculab revolutionizes business compliance in the UAE by combining cutting-edge technology with expert knowledge. \
                              Our platform automates document tracking, sends renewal reminders, and provides real-time status updates, all without \
                              you leaving your office."}
                        </p>
                    </RevealOnScroll>
                    <div class="grid grid-2 feature-grid">
                        { for FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <RevealOnScroll delay={index as f64 * config::STAGGER_SECS} class="feature">
                                <div class="feature-icon">
                                    <IconGlyph icon={feature.icon} class="icon-lg" />
                                </div>
                                <div>
                                    <h4>{ feature.title }</h4>
                                    <p>{ feature.description }</p>
                                </div>
                            </RevealOnScroll>
                        }) }
                    </div>
                </div>
                <div class="about-picture entrance" style={picture.entrance()}>
                    <div class="about-overlay entrance" style={overlay.entrance()}></div>
                    // Loaded straight from the CDN; a failed load shows the browser's broken image.
                    <img src={config::ABOUT_IMAGE_URL} alt="Business Dashboard" />
                </div>
            </div>
        </section>
    }
}
