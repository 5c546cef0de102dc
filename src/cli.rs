use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Prefix that marks a message as a command invocation
    #[arg(long, default_value = "!")]
    pub prefix: String,

    /// Name the bot answers to when mentioned as @name
    #[arg(long, default_value = "botd")]
    pub name: String,

    /// Invoker ids exempt from all permission and dev-only checks
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub developers: Vec<String>,

    /// Write dispatch log to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}
