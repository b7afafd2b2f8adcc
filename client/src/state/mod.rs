//! Client-side state, kept free of `web-sys` so it can be unit tested
//! natively.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule owns one widget's rules: `directory` (helpline view modes),
//! `banner` (quote rotation and daily tip), `footer` (newsletter and
//! back-to-top), `insights` (profile AI panel), and `support` (page motion).
//! The hydrate-only `components` apply these states to the DOM.

pub mod banner;
pub mod directory;
pub mod footer;
pub mod insights;
pub mod support;
