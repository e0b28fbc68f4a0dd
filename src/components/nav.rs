use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::{Icon, IconGlyph};
use crate::config;
use crate::content::{CONTACT_LINK, NAV_LINKS};
use crate::motion;
use crate::state::{MenuAction, MenuState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub menu: MenuState,
    pub on_menu: Callback<MenuAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { menu, on_menu } = props;

    let toggle_menu = {
        let on_menu = on_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_menu.emit(MenuAction::Toggle);
        })
    };

    // Anchor navigation still happens; the drawer just gets out of the way.
    let close_menu = {
        let on_menu = on_menu.clone();
        Callback::from(move |_: MouseEvent| on_menu.emit(MenuAction::Close))
    };

    let brand_style = motion::slide_in(-20.0, 0.5, 0.0);
    let links_style = motion::Motion::default().offset(0.0, -10.0).opacity(0.0).over(0.5).after(0.2);

    html! {
        <nav class="top-nav">
            <div class="nav-content container">
                <a href="#home" class="nav-logo entrance" style={brand_style.entrance()}>
                    { config::BRAND_NAME }
                </a>

                <div class="nav-links entrance" style={links_style.entrance()}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="nav-link">{ link.label }</a>
                    }) }
                    <a href={CONTACT_LINK.href} class="btn btn-accent nav-cta">{ CONTACT_LINK.label }</a>
                </div>

                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Toggle navigation"
                    aria-expanded={menu.is_open().to_string()}
                    aria-controls="mobile-menu"
                >
                    <IconGlyph icon={if menu.is_open() { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            <div
                id="mobile-menu"
                class="mobile-menu"
                style={motion::collapse(menu.is_open(), config::MENU_DURATION_SECS)}
                aria-hidden={(!menu.is_open()).to_string()}
            >
                <div class="mobile-menu-inner">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.href} class="mobile-link" onclick={close_menu.clone()}>{ link.label }</a>
                    }) }
                    <a href={CONTACT_LINK.href} class="mobile-link btn btn-accent" onclick={close_menu.clone()}>
                        { CONTACT_LINK.label }
                    </a>
                </div>
            </div>
        </nav>
    }
}
