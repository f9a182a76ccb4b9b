pub mod entities;
pub mod legacy;
pub mod repositories;
pub mod value_objects;

pub use entities::*;
pub use genie_bridge_errors::{BridgeError, BridgeResult};
pub use legacy::*;
pub use repositories::*;
pub use value_objects::*;
