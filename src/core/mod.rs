pub mod paginator;
pub mod sanitizer;
