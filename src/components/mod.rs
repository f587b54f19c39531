pub mod charts;
pub mod recommendation_card;
pub mod severity_badge;
pub mod share_modal;
pub mod stat_card;
pub mod theme_toggle;
