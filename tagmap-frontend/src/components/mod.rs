mod cloud;
mod lists;
mod modal;

pub use self::{cloud::*, lists::*, modal::*};
