//! Widget contracts and their per-platform implementations
//!
//! Leaf actions return the line they display rather than writing it, so
//! callers decide where output goes.

use crate::factory::Platform;

/// Contract shared by every family's button
pub trait Button: Send + Sync {
    fn render(&self) -> &'static str;
    fn on_click(&self) -> &'static str;
    /// Family that produced this widget
    fn platform(&self) -> Platform;
}

/// Contract shared by every family's checkbox
pub trait Checkbox: Send + Sync {
    fn render(&self) -> &'static str;
    fn toggle(&self) -> &'static str;
    /// Family that produced this widget
    fn platform(&self) -> Platform;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsButton;

impl Button for WindowsButton {
    fn render(&self) -> &'static str {
        "Rendering windows button"
    }

    fn on_click(&self) -> &'static str {
        "Clicked on windows button"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsCheckbox;

impl Checkbox for WindowsCheckbox {
    fn render(&self) -> &'static str {
        "Rendering windows checkbox"
    }

    fn toggle(&self) -> &'static str {
        "Windows checkbox toggled"
    }

    fn platform(&self) -> Platform {
        Platform::Windows
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MacButton;

impl Button for MacButton {
    fn render(&self) -> &'static str {
        "Rendering Mac button"
    }

    fn on_click(&self) -> &'static str {
        "Mac button clicked"
    }

    fn platform(&self) -> Platform {
        Platform::Mac
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MacCheckbox;

impl Checkbox for MacCheckbox {
    fn render(&self) -> &'static str {
        "Rendering Mac checkbox"
    }

    fn toggle(&self) -> &'static str {
        "Mac checkbox toggled"
    }

    fn platform(&self) -> Platform {
        Platform::Mac
    }
}
