//! HTTP building blocks
//!
//! Generic response builders shared by every route, decoupled from the
//! trip endpoint's business logic.

pub mod response;

pub use response::{
    build_404_response, build_405_response, build_html_response, build_options_response,
};
