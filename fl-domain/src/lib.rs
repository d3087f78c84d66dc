pub mod catalog;
pub mod fl_model;
pub mod infocard;

pub use catalog::*;
pub use fl_model::*;
pub use infocard::*;
