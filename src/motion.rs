//! Animation descriptors. A `Motion` names the visual state an element should
//! settle into and how to get there; the browser's CSS transitions do the
//! interpolation.

use std::fmt::Write;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "cubic-bezier(0, 0, 0.58, 1)",
            Easing::EaseInOut => "cubic-bezier(0.42, 0, 0.58, 1)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
            duration: 0.3,
            delay: 0.0,
            easing: Easing::EaseOut,
        }
    }
}

impl Motion {
    pub fn opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }

    pub fn offset(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    pub fn rotate(self, degrees: f64) -> Self {
        Self { rotate: degrees, ..self }
    }

    pub fn over(self, duration: f64) -> Self {
        Self { duration, ..self }
    }

    pub fn after(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            self.x, self.y, self.scale, self.rotate
        )
    }

    /// Inline `style` value driving the element toward this state.
    pub fn style(&self) -> String {
        let mut css = String::new();
        let _ = write!(css, "opacity: {};", self.opacity);
        let _ = write!(css, " transform: {};", self.transform());
        let _ = write!(
            css,
            " transition: opacity {d}s {e} {w}s, transform {d}s {e} {w}s;",
            d = self.duration,
            e = self.easing.css(),
            w = self.delay
        );
        css
    }

    /// Inline `style` playing a one-shot mount animation from this state to
    /// rest. Pairs with the `enter` keyframes in the global theme.
    pub fn entrance(&self) -> String {
        format!(
            "--enter-opacity: {}; --enter-transform: {}; animation: enter {}s {} {}s both;",
            self.opacity,
            self.transform(),
            self.duration,
            self.easing.css(),
            self.delay
        )
    }
}

/// Entrance used by the reveal wrapper: rise 20px into place and fade in.
pub fn fade_in_up(revealed: bool, delay: f64) -> Motion {
    let base = Motion::default()
        .over(config::REVEAL_DURATION_SECS)
        .after(delay)
        .easing(Easing::EaseInOut);
    if revealed {
        base
    } else {
        base.opacity(0.0).offset(0.0, config::REVEAL_OFFSET_PX)
    }
}

/// Horizontal variant for the brand mark and the about image.
pub fn slide_in(from_x: f64, duration: f64, delay: f64) -> Motion {
    Motion::default().offset(from_x, 0.0).opacity(0.0).over(duration).after(delay)
}

pub fn service_card(hovered: bool) -> Motion {
    let rest = Motion::default().over(config::HOVER_DURATION_SECS).easing(Easing::EaseOut);
    if hovered {
        rest.scale(config::HOVER_SCALE).offset(0.0, -config::HOVER_LIFT_PX)
    } else {
        rest
    }
}

pub fn card_tint(hovered: bool) -> Motion {
    Motion::default()
        .opacity(if hovered { 1.0 } else { 0.0 })
        .over(config::HOVER_DURATION_SECS)
}

pub fn chevron(expanded: bool) -> Motion {
    Motion::default()
        .rotate(if expanded { 180.0 } else { 0.0 })
        .over(config::ACCORDION_DURATION_SECS)
}

/// Height animation between 0 and the content's natural height. The element
/// must be a single-row grid (see the theme) so `auto` height can transition.
pub fn collapse(open: bool, duration: f64) -> String {
    format!(
        "grid-template-rows: {rows}; opacity: {opacity}; visibility: {visibility}; \
         transition: grid-template-rows {d}s {e}, opacity {d}s {e}, visibility {d}s;",
        rows = if open { "1fr" } else { "0fr" },
        opacity = if open { 1 } else { 0 },
        visibility = if open { "visible" } else { "hidden" },
        d = duration,
        e = Easing::EaseOut.css(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hidden_reveal_sits_below_rest_and_transparent() {
        let hidden = fade_in_up(false, 0.0);
        assert_eq!(hidden.opacity, 0.0);
        assert_eq!(hidden.y, 20.0);
        assert_eq!(hidden.duration, 0.6);

        let shown = fade_in_up(true, 0.3);
        assert_eq!((shown.opacity, shown.y), (1.0, 0.0));
        assert!(shown.style().contains("transform 0.6s cubic-bezier(0.42, 0, 0.58, 1) 0.3s"));
    }

    #[test]
    fn hovered_card_lifts_and_grows() {
        let card = service_card(true);
        assert_eq!(card.scale, 1.03);
        assert_eq!(card.y, -5.0);
        assert_eq!(card.easing, Easing::EaseOut);
        assert_eq!(card.duration, 0.2);
        assert_eq!(service_card(false), Motion::default().over(0.2));
    }

    #[test]
    fn chevron_flips_when_expanded() {
        assert_eq!(chevron(true).rotate, 180.0);
        assert_eq!(chevron(false).rotate, 0.0);
        assert!(chevron(true).style().contains("rotate(180deg)"));
    }

    #[test]
    fn style_renders_every_target() {
        let style = Motion::default().opacity(0.5).offset(-20.0, 4.0).scale(1.1).style();
        assert_eq!(
            style,
            "opacity: 0.5; transform: translate(-20px, 4px) scale(1.1) rotate(0deg); \
             transition: opacity 0.3s cubic-bezier(0, 0, 0.58, 1) 0s, \
             transform 0.3s cubic-bezier(0, 0, 0.58, 1) 0s;"
        );
    }

    #[test]
    fn entrance_starts_from_the_descriptor() {
        let style = slide_in(-20.0, 0.5, 0.0).entrance();
        assert_eq!(
            style,
            "--enter-opacity: 0; --enter-transform: translate(-20px, 0px) scale(1) rotate(0deg); \
             animation: enter 0.5s cubic-bezier(0, 0, 0.58, 1) 0s both;"
        );
    }

    #[test]
    fn collapsed_panel_has_no_height() {
        let closed = collapse(false, 0.2);
        assert!(closed.contains("grid-template-rows: 0fr"));
        assert!(closed.contains("visibility: hidden"));
        assert!(collapse(true, 0.2).contains("grid-template-rows: 1fr"));
    }
}
