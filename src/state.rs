//! Page interaction state. Each cell is a small reducer so the components only
//! ever dispatch actions and never write the state directly.

use std::rc::Rc;

use log::{debug, warn};
use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A drawer link was followed.
    Close,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match (action, self) {
            (MenuAction::Toggle, MenuState::Closed) => MenuState::Open,
            (MenuAction::Toggle, MenuState::Open) | (MenuAction::Close, _) => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: MenuAction) -> Rc<Self> {
        let next = self.apply(action);
        debug!("menu {:?} -> {:?}", *self, next);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Single-expansion accordion over a fixed number of entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    len: usize,
    expanded: Option<usize>,
}

impl FaqAccordion {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Header `index` was clicked.
    pub fn toggle(self, index: usize) -> Self {
        if index >= self.len {
            warn!("ignoring toggle of faq {} (only {} entries)", index, self.len);
            return self;
        }
        let expanded = if self.expanded == Some(index) { None } else { Some(index) };
        Self { expanded, ..self }
    }
}

impl Reducible for FaqAccordion {
    /// Index of the clicked header.
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let next = self.toggle(index);
        debug!("faq expanded {:?} -> {:?}", self.expanded, next.expanded);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    Enter(usize),
    Leave(usize),
}

/// Which service card the pointer is over, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceHover {
    len: usize,
    hovered: Option<usize>,
}

impl ServiceHover {
    pub fn new(len: usize) -> Self {
        Self { len, hovered: None }
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered == Some(index)
    }

    pub fn apply(self, action: HoverAction) -> Self {
        match action {
            HoverAction::Enter(index) if index >= self.len => {
                warn!("ignoring hover of service {} (only {} cards)", index, self.len);
                self
            }
            HoverAction::Enter(index) => Self { hovered: Some(index), ..self },
            // Pointer devices are exclusive, so any leave clears the emphasis.
            HoverAction::Leave(_) => Self { hovered: None, ..self },
        }
    }
}

impl Reducible for ServiceHover {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: HoverAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Latch behind the reveal-on-scroll wrapper. `Revealed` is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealAction {
    /// Visible fraction reported by the viewport observer.
    Observed { intersecting: bool, ratio: f64 },
    /// The observer could not be attached; show the content as is.
    Unobservable,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        self == RevealState::Revealed
    }

    pub fn apply(self, action: RevealAction) -> Self {
        match (self, action) {
            (RevealState::Revealed, _) => RevealState::Revealed,
            (RevealState::Hidden, RevealAction::Observed { intersecting, ratio }) => {
                if intersecting && ratio >= config::REVEAL_THRESHOLD {
                    RevealState::Revealed
                } else {
                    RevealState::Hidden
                }
            }
            (RevealState::Hidden, RevealAction::Unobservable) => RevealState::Revealed,
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: RevealAction) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn seen(ratio: f64) -> RevealAction {
        RevealAction::Observed { intersecting: ratio > 0.0, ratio }
    }

    #[test]
    fn menu_alternates_from_closed() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        for press in 1..=6 {
            menu = menu.apply(MenuAction::Toggle);
            assert_eq!(menu.is_open(), press % 2 == 1, "after press {press}");
        }
    }

    #[rstest]
    #[case(MenuState::Open)]
    #[case(MenuState::Closed)]
    fn following_a_link_leaves_menu_closed(#[case] start: MenuState) {
        assert_eq!(start.apply(MenuAction::Close), MenuState::Closed);
    }

    #[rstest]
    fn faq_toggle_round_trips(#[values(0, 1, 2, 3)] i: usize) {
        let faq = FaqAccordion::new(4);
        let opened = faq.toggle(i);
        assert_eq!(opened.expanded(), Some(i));
        assert_eq!(opened.toggle(i).expanded(), None);
    }

    #[rstest]
    fn faq_never_has_two_open(
        #[values(0, 1, 2, 3)] i: usize,
        #[values(0, 1, 2, 3)] j: usize,
    ) {
        if i == j {
            return;
        }
        let faq = FaqAccordion::new(4).toggle(i).toggle(j);
        assert_eq!(faq.expanded(), Some(j));
        assert!(!faq.is_expanded(i));
    }

    #[test]
    fn faq_ignores_out_of_range_header() {
        let faq = FaqAccordion::new(4).toggle(1);
        assert_eq!(faq.toggle(4), faq);
        assert_eq!(FaqAccordion::new(4).toggle(17).expanded(), None);
    }

    #[rstest]
    fn hover_enter_then_leave(#[values(0, 1, 2)] i: usize) {
        let hover = ServiceHover::new(3).apply(HoverAction::Enter(i));
        assert_eq!(hover.hovered(), Some(i));
        assert_eq!(hover.apply(HoverAction::Leave(i)).hovered(), None);
    }

    #[test]
    fn hover_leave_clears_regardless_of_order() {
        // enter 1, enter 2 (pointer jumped), then the late leave of 1 arrives
        let hover = ServiceHover::new(3)
            .apply(HoverAction::Enter(1))
            .apply(HoverAction::Enter(2))
            .apply(HoverAction::Leave(1));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn hover_ignores_unknown_card() {
        let hover = ServiceHover::new(3).apply(HoverAction::Enter(3));
        assert_eq!(hover.hovered(), None);
    }

    #[test]
    fn fresh_load_then_faq_clicks() {
        let menu = MenuState::default();
        let hover = ServiceHover::new(3);
        let faq = FaqAccordion::new(4);
        assert!(!menu.is_open());
        assert_eq!(hover.hovered(), None);
        assert_eq!(faq.expanded(), None);

        let faq = faq.toggle(2);
        assert!(faq.is_expanded(2));
        let faq = faq.toggle(0);
        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(2));
    }

    #[rstest]
    #[case(0.0, RevealState::Hidden)]
    #[case(0.05, RevealState::Hidden)]
    #[case(0.1, RevealState::Revealed)]
    #[case(0.8, RevealState::Revealed)]
    fn reveal_waits_for_threshold(#[case] ratio: f64, #[case] expected: RevealState) {
        assert_eq!(RevealState::default().apply(seen(ratio)), expected);
    }

    #[test]
    fn reveal_latches_after_scrolling_out() {
        let state = RevealState::default().apply(seen(0.5)).apply(seen(0.0)).apply(seen(0.02));
        assert!(state.is_revealed());
    }

    #[test]
    fn reveal_requires_intersecting_flag() {
        let state = RevealState::default()
            .apply(RevealAction::Observed { intersecting: false, ratio: 0.3 });
        assert_eq!(state, RevealState::Hidden);
    }

    #[test]
    fn unobservable_content_is_shown() {
        assert!(RevealState::default().apply(RevealAction::Unobservable).is_revealed());
    }

    #[test]
    fn reducers_keep_the_same_rc_when_nothing_changes() {
        let closed = Rc::new(MenuState::Closed);
        let again = closed.clone().reduce(MenuAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));
    }
}
