pub mod archive;
pub mod calendar;
pub mod code_copy;
pub mod comment_form;
pub mod comment_section;
pub mod comment_thread;
pub mod counter;
pub mod dashboard;
pub mod portfolio_counter;
pub mod recent_comments;
pub mod search_bar;
pub mod share_buttons;
