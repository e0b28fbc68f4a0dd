use chrono::Datelike;
use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::components::reveal::RevealOnScroll;
use crate::config;
use crate::content::{CONTACT_DETAILS, FOOTER_LINKS};

pub fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::BRAND_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="grid grid-3">
                    <RevealOnScroll>
                        <h4 class="footer-brand">{ config::BRAND_NAME }</h4>
                        <p>
                            {"Your trusted partner for business compliance in the UAE. We make document management effortless."}
                        </p>
                    </RevealOnScroll>
                    <RevealOnScroll delay={config::STAGGER_SECS}>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-list">
                            { for FOOTER_LINKS.iter().map(|link| html! {
                                <li><a href={link.href}>{ link.label }</a></li>
                            }) }
                        </ul>
                    </RevealOnScroll>
                    <RevealOnScroll delay={2.0 * config::STAGGER_SECS}>
                        <h4>{"Contact"}</h4>
                        <ul class="footer-list">
                            { for CONTACT_DETAILS.iter().map(|detail| html! {
                                <li class="contact-detail">
                                    <IconGlyph icon={detail.icon} class="icon-sm" />
                                    <span>{ detail.text }</span>
                                </li>
                            }) }
                        </ul>
                    </RevealOnScroll>
                </div>
                <div class="footer-bottom">
                    <p>{ copyright_line(year) }</p>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn copyright_names_the_brand_and_year() {
        assert_eq!(copyright_line(2026), "© 2026 Doculab. All rights reserved.");
    }
}
