//! Client-side preference state for the shopfront demo pages.
//!
//! This crate owns everything the browser pages and the native CLI session
//! share: the in-memory preference state (cart item counts and the selected
//! RGB color), the cookie string codec used to restore that state on load,
//! the fixed-key JSON payloads pushed to the server, and the linear color
//! transition used when the displayed color changes. It performs no I/O —
//! the `server` and `cli` crates wire it to HTTP and the filesystem.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`color`] | RGB triple and the strict `#RRGGBB` codec |
//! | [`cart`] | Fixed item set and non-negative item counts |
//! | [`cookie`] | Tolerant cookie-string parsing and lookup |
//! | [`store`] | [`store::PrefState`]: load, mutate, render |
//! | [`sync`] | Fixed-key payloads for the best-effort push |
//! | [`transition`] | Linear color interpolation over a fixed duration |

pub mod cart;
pub mod color;
pub mod cookie;
pub mod store;
pub mod sync;
pub mod transition;
