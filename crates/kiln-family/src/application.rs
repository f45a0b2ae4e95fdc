use crate::factory::{Platform, WidgetFactory, WidgetSet};

/// Client that works with one widget family without knowing which
pub struct Application {
    widgets: WidgetSet,
}

impl Application {
    /// Create the application's widgets from `factory`
    pub fn new(factory: &dyn WidgetFactory) -> Self {
        Self {
            widgets: factory.create_widgets(),
        }
    }

    /// Render the button, then the checkbox
    pub fn render(&self) -> Vec<&'static str> {
        vec![self.widgets.button.render(), self.widgets.checkbox.render()]
    }

    pub fn on_click(&self) -> &'static str {
        self.widgets.button.on_click()
    }

    pub fn on_toggle(&self) -> &'static str {
        self.widgets.checkbox.toggle()
    }

    pub fn platform(&self) -> Platform {
        self.widgets.platform()
    }
}
