use std::rc::Rc;

use yew::Reducible;

use crate::config::CAROUSEL_STEP_PX;

/// Which feature tab is showing. Exactly one index is active.
#[derive(Debug, Clone, PartialEq)]
pub struct TabSelector {
    pub active: usize,
    len: usize,
}

impl TabSelector {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }
}

pub enum TabAction {
    Select(usize),
}

impl Reducible for TabSelector {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TabAction::Select(index) if index < self.len && index != self.active => Rc::new(Self {
                active: index,
                len: self.len,
            }),
            TabAction::Select(_) => self,
        }
    }
}

/// FAQ list where at most one answer is expanded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaqAccordion {
    pub open: Option<usize>,
}

impl FaqAccordion {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

pub enum FaqAction {
    Toggle(usize),
}

impl Reducible for FaqAccordion {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            FaqAction::Toggle(index) if self.is_open(index) => None,
            FaqAction::Toggle(index) => Some(index),
        };
        Rc::new(Self { open })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModalVisibility {
    pub open: bool,
}

pub enum ModalAction {
    Open,
    Close,
}

impl Reducible for ModalVisibility {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = matches!(action, ModalAction::Open);
        if open == self.open {
            return self;
        }
        log::debug!("waitlist modal {}", if open { "opened" } else { "closed" });
        Rc::new(Self { open })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

/// Horizontal position of the carousel track.
///
/// `nudges` counts arrow presses so the view only issues a smooth scroll when
/// one happened, not when the native position is merely synced back in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarouselScroll {
    pub offset: f64,
    pub max_offset: f64,
    pub nudges: u32,
}

pub enum CarouselAction {
    Nudge(Direction),
    Sync { offset: f64, max_offset: f64 },
}

impl Reducible for CarouselScroll {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            CarouselAction::Nudge(direction) => {
                let delta = match direction {
                    Direction::Left => -CAROUSEL_STEP_PX,
                    Direction::Right => CAROUSEL_STEP_PX,
                };
                Rc::new(Self {
                    offset: (self.offset + delta).clamp(0.0, self.max_offset),
                    max_offset: self.max_offset,
                    nudges: self.nudges.wrapping_add(1),
                })
            }
            CarouselAction::Sync { offset, max_offset } => {
                let max_offset = max_offset.max(0.0);
                Rc::new(Self {
                    offset: offset.clamp(0.0, max_offset),
                    max_offset,
                    nudges: self.nudges,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn apply<R: Reducible>(state: R, actions: impl IntoIterator<Item = R::Action>) -> Rc<R> {
        actions
            .into_iter()
            .fold(Rc::new(state), |state, action| state.reduce(action))
    }

    #[test]
    fn tabs_start_on_first_and_follow_clicks() {
        let tabs = TabSelector::new(3);
        assert_eq!(tabs.active, 0);

        let tabs = apply(tabs, [TabAction::Select(2)]);
        assert_eq!(tabs.active, 2);
        let active: Vec<usize> = (0..3).filter(|i| tabs.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }

    #[test]
    fn tabs_ignore_out_of_range_index() {
        let tabs = apply(TabSelector::new(3), [TabAction::Select(1), TabAction::Select(7)]);
        assert_eq!(tabs.active, 1);
    }

    #[test]
    fn faq_opens_one_entry_at_a_time() {
        let faq = FaqAccordion::default();
        assert_eq!(faq.open, None);

        let faq = apply(faq, [FaqAction::Toggle(0)]);
        assert!(faq.is_open(0));

        let faq = apply((*faq).clone(), [FaqAction::Toggle(2)]);
        assert_eq!(faq.open, Some(2));
        assert!(!faq.is_open(0));
    }

    #[test]
    fn faq_toggling_open_entry_closes_it() {
        let faq = apply(
            FaqAccordion::default(),
            [FaqAction::Toggle(1), FaqAction::Toggle(1)],
        );
        assert_eq!(faq.open, None);
    }

    #[test]
    fn modal_close_always_ends_closed() {
        let modal = apply(ModalVisibility::default(), [ModalAction::Open]);
        assert!(modal.open);

        let modal = apply((*modal).clone(), [ModalAction::Close, ModalAction::Close]);
        assert!(!modal.open);
    }

    #[test]
    fn carousel_moves_by_fixed_step() {
        let carousel = apply(
            CarouselScroll::default(),
            [
                CarouselAction::Sync { offset: 0.0, max_offset: 1000.0 },
                CarouselAction::Nudge(Direction::Right),
            ],
        );
        assert_eq!(carousel.offset, CAROUSEL_STEP_PX);

        let carousel = apply(
            (*carousel).clone(),
            [CarouselAction::Nudge(Direction::Right), CarouselAction::Nudge(Direction::Left)],
        );
        assert_eq!(carousel.offset, CAROUSEL_STEP_PX);
        assert_eq!(carousel.nudges, 3);
    }

    #[test]
    fn carousel_clamps_to_scroll_extent() {
        let carousel = apply(
            CarouselScroll::default(),
            [
                CarouselAction::Sync { offset: 900.0, max_offset: 1000.0 },
                CarouselAction::Nudge(Direction::Right),
            ],
        );
        assert_eq!(carousel.offset, 1000.0);

        let carousel = apply(
            CarouselScroll::default(),
            [
                CarouselAction::Sync { offset: 120.0, max_offset: 1000.0 },
                CarouselAction::Nudge(Direction::Left),
            ],
        );
        assert_eq!(carousel.offset, 0.0);
    }

    #[test]
    fn carousel_sync_does_not_count_as_nudge() {
        let carousel = apply(
            CarouselScroll::default(),
            [CarouselAction::Sync { offset: 450.0, max_offset: -20.0 }],
        );
        assert_eq!(carousel.offset, 0.0);
        assert_eq!(carousel.max_offset, 0.0);
        assert_eq!(carousel.nudges, 0);
    }
}
