//! Frontend library entry point.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub mod api;
pub(crate) mod routes;
pub(crate) mod pages;
pub(crate) mod components;
