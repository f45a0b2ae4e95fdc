use crate::widgets::{Button, Checkbox, MacButton, MacCheckbox, WindowsButton, WindowsCheckbox};
use serde::Serialize;
use std::fmt;

/// Supported widget families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Mac,
}

impl Platform {
    /// Normalized key used for resolution
    pub fn as_key(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Mac => "mac",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

/// A button and checkbox created by the same factory
pub struct WidgetSet {
    pub button: Box<dyn Button>,
    pub checkbox: Box<dyn Checkbox>,
}

impl WidgetSet {
    /// The family both widgets belong to
    pub fn platform(&self) -> Platform {
        self.button.platform()
    }
}

impl fmt::Debug for WidgetSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetSet")
            .field("button", &self.button.platform())
            .field("checkbox", &self.checkbox.platform())
            .finish()
    }
}

/// Produces widgets of one family
///
/// Outputs of two different factories must not be mixed in one client.
/// [`WidgetFactory::create_widgets`] returns both widgets at once, which rules
/// that out; prefer it over calling the two create methods separately.
pub trait WidgetFactory: Send + Sync {
    fn platform(&self) -> Platform;

    fn create_button(&self) -> Box<dyn Button>;

    fn create_checkbox(&self) -> Box<dyn Checkbox>;

    fn create_widgets(&self) -> WidgetSet {
        WidgetSet {
            button: self.create_button(),
            checkbox: self.create_checkbox(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsFactory;

impl WidgetFactory for WindowsFactory {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WindowsButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WindowsCheckbox)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct MacFactory;

impl WidgetFactory for MacFactory {
    fn platform(&self) -> Platform {
        Platform::Mac
    }

    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}
