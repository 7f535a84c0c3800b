use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create an account and start a session
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Avatar URL
        #[arg(long)]
        photo: Option<String>,
    },

    /// Log in and start a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// End the session and clear persisted state
    Logout,

    /// Show the locally held identity
    Whoami,

    /// Update the display name and/or photo of the logged-in account
    UpdateProfile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        photo: Option<String>,
    },

    /// Re-fetch the identity from the server into the session
    Refresh,
}
