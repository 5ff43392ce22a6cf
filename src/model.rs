pub use self::{record::*, stats::*};

pub mod constants;
mod record;
mod stats;
