//! App-scoped state shared through the Dioxus context.
//!
//! Each value has a single writer; everything else only reads.

use dioxus::prelude::*;
use shared_types::UserDetail;

use crate::theme::{set_cached_theme_preference, Theme};

/// Save requests, as a counter. The playground header bumps it; the design
/// view saves whenever the value changes.
#[derive(Clone, Copy)]
pub struct SaveRequests(pub Signal<u64>);

impl SaveRequests {
    pub fn request(&mut self) {
        let next = self.0.peek().wrapping_add(1);
        self.0.set(next);
    }

    /// Current value; reading it inside an effect subscribes the effect.
    pub fn count(&self) -> u64 {
        *self.0.read()
    }

    pub fn peek_count(&self) -> u64 {
        *self.0.peek()
    }
}

/// Light/dark preference. The theme toggles are its only writers.
#[derive(Clone, Copy)]
pub struct ThemeState(pub Signal<Theme>);

impl ThemeState {
    pub fn current(&self) -> Theme {
        *self.0.read()
    }

    pub fn toggle(&mut self) {
        let next = self.0.peek().toggled();
        set_cached_theme_preference(next);
        self.0.set(next);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    /// Probe still running
    Unknown,
    SignedOut,
    SignedIn(UserDetail),
}

impl Identity {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Identity::SignedIn(_))
    }
}

/// Result of the identity probe run at startup.
#[derive(Clone, Copy)]
pub struct UserState(pub Signal<Identity>);

impl UserState {
    pub fn identity(&self) -> Identity {
        self.0.read().clone()
    }
}

/// Sign-in entry point of the identity provider in front of the app
pub const SIGN_IN_URL: &str = "/sign-in";
