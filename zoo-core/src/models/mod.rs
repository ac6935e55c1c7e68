mod animal;
mod feeding;
mod food;
mod role;
mod species;
mod staff;

pub use animal::*;
pub use feeding::*;
pub use food::*;
pub use role::*;
pub use species::*;
pub use staff::*;
