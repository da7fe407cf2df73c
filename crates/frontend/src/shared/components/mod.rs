pub mod empty_state;
pub mod page_header;
pub mod stat_card;
pub mod status_filter;
pub mod ui;
