//! Async data-access client for the heroes API.
//!
//! # Overview
//! `HeroService` turns list/get/update/add/delete/search calls into HTTP
//! requests, records a `HeroService: ...` line in a shared `MessageLog` for
//! every attempt, and replaces any failure with a fallback value.
//!
//! # Design
//! - `HeroClient` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`.
//! - `Transport` is the only I/O seam; `UreqTransport` is the default.
//! - Collaborators are handed to `HeroService::new`; there are no globals.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod message;
pub mod service;
pub mod types;

pub use client::HeroClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use message::{MessageLog, MessageService};
pub use service::HeroService;
pub use types::{Ack, Hero, NewHero};
