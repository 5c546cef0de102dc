mod command;
mod dispatcher;
mod invocation;
mod registry;
mod validate_error;

pub use command::*;
pub use dispatcher::*;
pub use invocation::*;
pub use registry::CommandRegistry;
pub use validate_error::CommandValidateError;
