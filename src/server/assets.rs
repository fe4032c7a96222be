//! The web page and its assets, compiled into the binary.

pub(super) const INDEX_HTML: &str = include_str!("../../static/index.html");
pub(super) const STYLE_CSS: &str = include_str!("../../static/css/style.css");
pub(super) const SCRIPT_JS: &str = include_str!("../../static/js/script.js");
