// Copyright 2026 the Lowboy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The embedded content contract.

use peniko::Color;

use lowboy_anchor::PositionProvider;

/// Corner radius applied when the content does not override it.
pub const DEFAULT_CORNER_RADIUS: f64 = 10.0;

/// Visual parameters the content may override.
///
/// Only what the host needs to build the drawer chrome: everything else
/// about the drawer's look is the host's business.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrawerStyle {
    /// Opaque background for the drawer container. `None` asks the host
    /// for its default treatment (typically a blurred backdrop).
    pub background: Option<Color>,
    /// Corner radius of the drawer container.
    pub corner_radius: f64,
}

impl Default for DrawerStyle {
    fn default() -> Self {
        Self {
            background: None,
            corner_radius: DEFAULT_CORNER_RADIUS,
        }
    }
}

/// The capability contract for content embedded in a drawer.
///
/// The content supplies the stop coordinates (via [`PositionProvider`])
/// and, optionally, style overrides. The dismiss / pull-down / layout
/// flows the content participates in are explicit methods on the session
/// handle — the content holds no callbacks.
pub trait DrawerContent: PositionProvider {
    /// Style overrides for the drawer chrome.
    fn style(&self) -> DrawerStyle {
        DrawerStyle::default()
    }
}
