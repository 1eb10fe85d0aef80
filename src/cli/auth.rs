//! Auth CLI commands
//!
//! Sign-up, sign-in and sign-out against the configured backend. The
//! password comes from `--password`, `WEDDING_BELLS_PASSWORD`, or a hidden
//! prompt, and is wiped from memory once used.

use clap::Subcommand;
use zeroize::Zeroizing;

use crate::error::{WeddingError, WeddingResult};
use crate::session::{AuthState, Session};

/// Environment variable consulted for the password
pub const PASSWORD_ENV: &str = "WEDDING_BELLS_PASSWORD";

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign into it
    #[command(name = "sign-up", alias = "signup")]
    SignUp {
        /// Email address
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign into an existing account
    #[command(name = "sign-in", alias = "login")]
    SignIn {
        /// Email address
        email: String,
        /// Password (prompted for when omitted)
        #[arg(long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign out
    #[command(name = "sign-out", alias = "logout")]
    SignOut,

    /// Show who is signed in
    Status,
}

/// Handle an auth command
pub fn handle_auth_command(session: &mut Session, cmd: AuthCommands) -> WeddingResult<()> {
    match cmd {
        AuthCommands::SignUp { email, password } => {
            let password = match password {
                Some(password) => Zeroizing::new(password),
                None => prompt_new_password()?,
            };
            let user = session.sign_up(&email, &password)?;
            println!("Account created. Signed in as {}", user.email);
        }

        AuthCommands::SignIn { email, password } => {
            let password = match password {
                Some(password) => Zeroizing::new(password),
                None => prompt_password("Password: ")?,
            };
            let user = session.sign_in(&email, &password)?;
            println!("Signed in as {}", user.email);
        }

        AuthCommands::SignOut => {
            session.sync()?;
            if session.user().is_none() {
                println!("Not signed in.");
            } else {
                session.sign_out()?;
                println!("Signed out.");
            }
        }

        AuthCommands::Status => {
            session.sync()?;
            match session.state() {
                AuthState::SignedIn(user) => {
                    println!("Signed in as {}", user.email);
                    println!("  User ID: {}", user.id);
                }
                _ => {
                    println!("Not signed in.");
                    println!("Run 'wedding auth sign-in <email>' or 'wedding auth sign-up <email>'.");
                }
            }
        }
    }

    Ok(())
}

/// Prompt for a new password with confirmation
fn prompt_new_password() -> WeddingResult<Zeroizing<String>> {
    let first = prompt_password("Choose a password: ")?;
    let second = prompt_password("Confirm password: ")?;

    if *first != *second {
        return Err(WeddingError::Auth("Passwords do not match".into()));
    }
    Ok(first)
}

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> WeddingResult<Zeroizing<String>> {
    rpassword::prompt_password(prompt)
        .map(Zeroizing::new)
        .map_err(|e| WeddingError::Auth(format!("Failed to read password: {}", e)))
}
