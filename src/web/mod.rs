//! HTML front end
//!
//! Askama templates live in `templates/` at the crate root. Tab links carry
//! `hx-get`, so htmx swaps `#tutorial-body` with the fragment the same route
//! returns for `HX-Request` requests.

pub mod handlers;
