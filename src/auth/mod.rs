//! Authentication module
//!
//! Supports: hoyolab/miyoushe cookie authentication
//!
//! `Cookies` holds the account cookies and applies them to every request as a
//! `Cookie` header. Values are redacted from `Debug` output.

mod cookies;

pub use cookies::Cookies;
