// Page widgets with client-side state: theme preference and timeline expanders.

pub mod handlers;
pub mod theme;
pub mod timeline;
