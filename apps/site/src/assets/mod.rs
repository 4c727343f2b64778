// Static assets: stylesheet minification for the served document.

pub mod handlers;
pub mod minify;
