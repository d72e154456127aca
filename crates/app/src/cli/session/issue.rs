use clap::Args;
use jiff::{SignedDuration, Timestamp};
use orderdesk_app::{
    auth::{ADMIN_ROLE, AdminIdentity},
    context::AuthSettings,
};
use zeroize::Zeroizing;

#[derive(Debug, Args)]
pub(crate) struct IssueSessionArgs {
    /// Username recorded in the session
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    username: String,

    /// HMAC key shared with the API server
    #[arg(long, env = "SESSION_SECRET", hide_env_values = true)]
    session_secret: String,

    /// Session lifetime in seconds
    #[arg(long, env = "SESSION_TTL_SECONDS", default_value_t = 86_400)]
    ttl_seconds: i64,
}

pub(crate) fn run(args: IssueSessionArgs) -> Result<(), String> {
    let settings = AuthSettings {
        admin_username: args.username.clone(),
        admin_password: Zeroizing::new(String::new()),
        session_secret: Zeroizing::new(args.session_secret),
        session_ttl: SignedDuration::from_secs(args.ttl_seconds),
    };

    let service = settings
        .build_service()
        .map_err(|error| format!("invalid session settings: {error}"))?;

    let issued = service
        .issue_session(
            AdminIdentity {
                id: args.username.clone(),
                username: args.username,
                role: ADMIN_ROLE.to_string(),
            },
            Timestamp::now(),
        )
        .map_err(|error| format!("failed to issue session: {error}"))?;

    println!("username: {}", issued.session.identity.username);
    println!("expires_at: {}", issued.session.expires_at);
    println!("session_token: {}", issued.token);

    Ok(())
}
