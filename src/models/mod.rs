pub use catalog::*;
pub use feature::*;
pub use icon::*;
pub use icon_role::*;
pub use markup::*;

mod catalog;
mod feature;
mod icon;
mod icon_role;
mod markup;
