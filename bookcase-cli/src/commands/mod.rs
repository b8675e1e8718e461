//! CLI command implementations

mod browse;
mod options;
mod shell;
mod show;
mod theme;

pub use browse::{browse, search};
pub use options::options;
pub use shell::shell;
pub use show::show;
pub use theme::theme;
