//! Level decoration and line formatting.

pub mod level;
pub mod line;
pub mod style;

pub use level::*;
pub use line::*;
pub use style::*;
