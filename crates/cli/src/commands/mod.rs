pub mod computer;
pub mod deliver;
pub mod gui;

pub use computer::ComputerArgs;
pub use deliver::DeliverArgs;
pub use gui::GuiArgs;
