pub mod batch;
pub mod casing;
pub mod cli;
pub mod config;
pub mod error;
pub mod num;
pub mod text;

pub use casing::{classify, set_casing, CasingStyle};
pub use config::Config;
pub use error::{CasingError, NumError};
pub use text::StrExt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub input: String,
    pub style: CasingStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub input: String,
    pub detected: CasingStyle,
    pub target: CasingStyle,
    pub output: String,
}
