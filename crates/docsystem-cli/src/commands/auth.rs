//! Authentication commands forwarded to the configured auth backend.

use clap::{Args, Subcommand};

use docsystem_auth::AuthController;
use docsystem_core::error::AppError;
use docsystem_entity::auth::{
    Credentials, RegisterRequest, ResetPasswordRequest, VerifyEmailRequest,
};

use crate::output::{self, OutputFormat};

/// Arguments for auth commands
#[derive(Debug, Args)]
pub struct AuthArgs {
    /// Auth subcommand
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands
#[derive(Debug, Subcommand)]
pub enum AuthCommand {
    /// Sign in and print the account
    Login {
        /// Account e-mail
        #[arg(short, long)]
        email: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account; a confirmation code is e-mailed
    Register {
        /// Account e-mail
        #[arg(short, long)]
        email: Option<String>,
        /// Display name
        #[arg(short, long)]
        name: Option<String>,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Confirm an e-mail address with the six-digit code
    Verify {
        /// Account e-mail
        #[arg(short, long)]
        email: Option<String>,
        /// Code from the e-mail
        #[arg(short, long)]
        code: Option<String>,
    },
    /// Request a reset code, or set a new password with `--code`
    Reset {
        /// Account e-mail
        #[arg(short, long)]
        email: Option<String>,
        /// Code from the reset e-mail
        #[arg(short, long)]
        code: Option<String>,
    },
}

/// Execute auth commands
pub async fn execute(
    args: &AuthArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let gateway = docsystem_auth::gateway_from_config(&config.auth)?;
    let controller = AuthController::new(gateway, &config.auth);

    match &args.command {
        AuthCommand::Login { email, password } => {
            let credentials = Credentials {
                email: email_or_prompt(email)?,
                password: match password {
                    Some(p) => p.clone(),
                    None => dialoguer::Password::new()
                        .with_prompt("Password")
                        .interact()
                        .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
                },
            };

            let user = controller.login(credentials).await?;
            match format {
                OutputFormat::Json => output::print_json(&user),
                OutputFormat::Table => {
                    output::print_success("Signed in");
                    output::print_kv("ID", &user.id.to_string());
                    output::print_kv("Email", &user.email);
                    output::print_kv("Name", user.name.as_deref().unwrap_or("—"));
                }
            }
        }
        AuthCommand::Register {
            email,
            name,
            password,
        } => {
            let request = RegisterRequest {
                email: email_or_prompt(email)?,
                password: new_password_or_prompt(password)?,
                name: name.clone(),
            };
            let message = controller.register(request).await?;
            output::print_success(&message.message);
        }
        AuthCommand::Verify { email, code } => {
            let request = VerifyEmailRequest {
                email: email_or_prompt(email)?,
                code: match code {
                    Some(c) => c.clone(),
                    None => dialoguer::Input::new()
                        .with_prompt("Code")
                        .interact_text()
                        .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
                },
            };
            let message = controller.verify_email(request).await?;
            output::print_success(&message.message);
        }
        AuthCommand::Reset { email, code } => {
            let email = email_or_prompt(email)?;
            let request = match code {
                Some(code) => ResetPasswordRequest {
                    email,
                    code: Some(code.clone()),
                    new_password: Some(new_password_or_prompt(&None)?),
                },
                None => ResetPasswordRequest {
                    email,
                    code: None,
                    new_password: None,
                },
            };
            let message = controller.reset_password(request).await?;
            output::print_success(&message.message);
        }
    }

    Ok(())
}

fn email_or_prompt(email: &Option<String>) -> Result<String, AppError> {
    match email {
        Some(e) => Ok(e.clone()),
        None => dialoguer::Input::new()
            .with_prompt("Email")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}

fn new_password_or_prompt(password: &Option<String>) -> Result<String, AppError> {
    match password {
        Some(p) => Ok(p.clone()),
        None => dialoguer::Password::new()
            .with_prompt("New password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
