pub mod launcher;
pub mod panel;

pub use launcher::Launcher;
pub use panel::ChatPanel;
