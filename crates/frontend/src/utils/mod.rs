pub mod antispam;
pub mod dom;
pub mod formatting;
