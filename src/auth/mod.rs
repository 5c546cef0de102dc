mod authorize;
mod gate;

pub use authorize::*;
pub use gate::PermissionGate;
