//! Motion primitives behind the site's animated overlays.
//!
//! Each effect is a small state machine that is fed events (scroll samples,
//! pointer moves, link clicks, route changes) and advanced by a [`clock::Clock`].
//! The Leptos components in `app` only translate DOM events into calls on
//! these types and write the results back to the page, so everything here
//! can be exercised with virtual time.

pub mod background;
pub mod clock;
pub mod cursor;
pub mod curtain;
pub mod easing;
pub mod frame;
pub mod globe;
pub mod loading;
pub mod parallax;
pub mod region;
pub mod scroll;
pub mod viewport;
