use yew::prelude::*;

/// Symbolic glyphs used across the page, drawn as 24x24 stroked outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    ChevronDown,
    Send,
    FileCheck,
    Building,
    Users,
    Clock,
    Mail,
    Shield,
    CheckCircle,
    Briefcase,
    FileText,
    BarChart,
    CircleDot,
}

const CIRCLE: &str = "M22 12a10 10 0 1 1-20 0 10 10 0 0 1 20 0";
const FILE: &str = "M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z";
const FILE_FOLD: &str = "M14 2v4a2 2 0 0 0 2 2h4";

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6 6 18", "m6 6 12 12"],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::Send => &["m22 2-7 20-4-9-9-4Z", "M22 2 11 13"],
            Icon::FileCheck => &[FILE, FILE_FOLD, "m9 15 2 2 4-4"],
            Icon::Building => &[
                "M6 22V4a2 2 0 0 1 2-2h8a2 2 0 0 1 2 2v18Z",
                "M6 12H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h2",
                "M18 9h2a2 2 0 0 1 2 2v9a2 2 0 0 1-2 2h-2",
                "M10 6h4",
                "M10 10h4",
                "M10 14h4",
                "M10 18h4",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M13 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Clock => &[CIRCLE, "M12 6v6l4 2"],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "m22 6-10 7L2 6",
            ],
            Icon::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            Icon::CheckCircle => &[CIRCLE, "m9 12 2 2 4-4"],
            Icon::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2Z",
            ],
            Icon::FileText => &[FILE, FILE_FOLD, "M10 9H8", "M16 13H8", "M16 17H8"],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::CircleDot => &[CIRCLE, "M13 12a1 1 0 1 1-2 0 1 1 0 0 1 2 0"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_at_least_one_path() {
        let all = [
            Icon::Menu,
            Icon::Close,
            Icon::ChevronDown,
            Icon::Send,
            Icon::FileCheck,
            Icon::Building,
            Icon::Users,
            Icon::Clock,
            Icon::Mail,
            Icon::Shield,
            Icon::CheckCircle,
            Icon::Briefcase,
            Icon::FileText,
            Icon::BarChart,
            Icon::CircleDot,
        ];
        for icon in all {
            assert!(!icon.paths().is_empty(), "{icon:?} draws nothing");
        }
    }
}
