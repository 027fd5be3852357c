#![allow(missing_docs)]

pub(crate) mod html;
pub(crate) mod http;
pub(crate) mod source;

pub(crate) use html::{assert_valid_html, must_get_text, parse_html_document, parse_html_fragment};
pub(crate) use http::{assert_content_type, assert_status_ok};
pub(crate) use source::{
    CountingSource, FailingSource, PendingSource, dashboard_response, raw_transaction,
};
