#[derive(Debug, PartialEq)]
pub enum CommandValidateError {
    EmptyName,
    MissingSelfTrigger,
}

impl std::fmt::Display for CommandValidateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CommandValidateError::EmptyName => write!(f, "command must have a non-empty name"),
            CommandValidateError::MissingSelfTrigger => {
                write!(f, "command triggers must start with the command name")
            }
        }
    }
}

impl std::error::Error for CommandValidateError {}
