//! # kiln-family
//!
//! Resolves a platform key to a widget family. Each family produces a button
//! and a checkbox that belong together.
//!
//! ```
//! use kiln_family::{detect_platform, resolve_family, Application};
//!
//! let key = detect_platform("Mac OS X");
//! let factory = resolve_family(key).unwrap();
//! let app = Application::new(factory.as_ref());
//!
//! assert_eq!(app.on_click(), "Mac button clicked");
//! ```

pub mod application;
pub mod detect;
pub mod error;
pub mod factory;
pub mod resolver;
pub mod widgets;

pub use application::Application;
pub use detect::{detect_platform, UNSUPPORTED_PLATFORM};
pub use error::{FamilyError, FamilyResult};
pub use factory::{MacFactory, Platform, WidgetFactory, WidgetSet, WindowsFactory};
pub use resolver::{resolve_family, supported_families};
pub use widgets::{Button, Checkbox, MacButton, MacCheckbox, WindowsButton, WindowsCheckbox};
