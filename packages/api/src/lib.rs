//! # API crate — REST client for the storefront backend
//!
//! Every network call the web client makes goes through [`ApiClient`]. The
//! client is generic over a [`shop::TokenStore`] so the same code attaches the
//! `x-auth-token` header from the browser's `sessionStorage` in the web build
//! and from an in-memory store in tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] with one method per endpoint, and the request builders behind them |
//! | [`error`] | [`ApiError`], mapping transport failures and non-2xx statuses to user-facing messages |
//!
//! ## Endpoints
//!
//! | Method | Path | Token |
//! |--------|------|-------|
//! | `POST` | `/auth/signin` | none |
//! | `POST` | `/auth/signup` | none |
//! | `GET` | `/products` | required |
//! | `GET` | `/products/{id}` | sent when present |
//! | `GET` | `/products/categories` | sent when present |
//! | `POST` / `PUT` / `DELETE` | `/products`, `/products/{id}` | required |
//! | `GET` / `POST` | `/addresses` | required |
//!
//! "Required" endpoints fail with [`ApiError::MissingToken`] before any request
//! is sent when the store holds no token.

pub mod client;
pub mod error;

pub use client::{ApiClient, SignedIn, AUTH_HEADER};
pub use error::ApiError;
