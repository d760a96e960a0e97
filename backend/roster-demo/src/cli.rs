use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "roster-demo")]
#[command(about = "Store a user in the local roster database and report its row id")]
#[command(version)]
pub struct Cli {
    /// First name of the user to insert
    #[arg(long, default_value = "")]
    pub first: String,

    /// Last name of the user to insert
    #[arg(long, default_value = "")]
    pub last: String,

    /// Explicit uid (defaults to the low 32 bits of the current time in milliseconds)
    #[arg(long, allow_negative_numbers = true)]
    pub uid: Option<i32>,
}
