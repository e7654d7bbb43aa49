mod legend;
mod navbar;

pub use self::{legend::*, navbar::*};
