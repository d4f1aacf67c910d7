pub mod calendar;
pub mod comment;
pub mod counter;
pub mod markup;
pub mod newtypes;
pub mod post;
pub mod reply;
pub mod share;
pub mod submission;
