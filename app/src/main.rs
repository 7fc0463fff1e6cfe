//! Vertex Services walk-through
//!
//! Drives the screens the way a browser would: navigate, fill the signup
//! form (wrong first, then right), sign in, open the dashboard, sign out.
//!
//! ```text
//! vertex [--config forms.toml] [--json]
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vertex_forms::prelude::*;
use vertex_forms::view::SUCCESS_MESSAGE;

#[derive(Parser)]
#[command(name = "vertex", version, about = "Walk through the Vertex Services screens")]
struct Cli {
    /// TOML file with forms settings (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the dashboard as JSON instead of text
    #[arg(long)]
    json: bool,
}

/// Initialize a simple stdout tracing subscriber
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vertex_forms=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(path: Option<&PathBuf>) -> Result<FormsConfig> {
    let config = match path {
        Some(path) => FormsConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FormsConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

fn navigate(path: &str, session: &Session) -> Route {
    let navigation = Router::resolve(path, session);
    match navigation {
        Navigation::Render(route) => println!("GET {path} -> {}", route.path()),
        Navigation::Redirect(route) => println!("GET {path} -> redirect {}", route.path()),
    }
    navigation.route()
}

fn print_signup(view: &SignupView) {
    if let Some(error) = &view.error {
        println!("  [error]   {error}");
    }
    if let Some(success) = view.success {
        println!("  [success] {success}");
    }
    println!(
        "  [button]  {}{}",
        view.submit_label,
        if view.submit_enabled { "" } else { " (disabled)" }
    );
}

async fn signup_screen(config: FormsConfig) -> Result<()> {
    let mut form = SignupWorkflow::new(config);
    tracing::debug!(steps = ?form.schematic().labels(), "Signup pipeline ready");

    let attempts: [&[(&str, &str)]; 4] = [
        &[("email", "invalid-email")],
        &[("email", "john@example.com"), ("password", "short")],
        &[("password", "password123"), ("confirmPassword", "password456")],
        &[("confirmPassword", "password123")],
    ];
    for edits in attempts {
        for (field, value) in edits {
            form.update_field(FieldUpdate::parse(field, *value)?);
        }
        if let Err(e) = form.submit().await {
            tracing::debug!(error = %e, "Signup attempt rejected");
        }
        print_signup(&form.view());
    }

    for (field, value) in [
        ("name", "John Doe"),
        ("phone", "1234567890"),
        ("dob", "1990-01-01"),
        ("terms", "true"),
    ] {
        form.update_field(FieldUpdate::parse(field, value)?);
    }

    let mut live = form.subscribe();
    let watcher = tokio::spawn(async move {
        while live.changed().await.is_ok() {
            let view = SignupView::from_state(&live.borrow_and_update());
            if !view.submit_enabled {
                println!("  [button]  {} (disabled)", view.submit_label);
            }
        }
    });

    let receipt = form.submit().await?;
    drop(form);
    watcher.await?;

    println!("  [success] {SUCCESS_MESSAGE} ({})", receipt.email);
    Ok(())
}

fn dashboard_screen(json: bool) -> Result<()> {
    let data = DashboardData::load();
    if json {
        println!("{}", serde_json::to_string_pretty(&data)?);
        return Ok(());
    }

    println!("  {}", data.greeting());
    println!("  Last login: {}", data.profile.last_login.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "  Profile views: {} | Tasks completed: {} | Notifications: {}",
        data.stats.profile_views, data.stats.tasks_completed, data.stats.notifications
    );
    for activity in &data.recent_activity {
        println!("  {} {} ({})", activity.icon, activity.text, activity.time);
    }
    Ok(())
}

fn nav_bar(session: &Session) {
    let labels: Vec<_> = Router::nav_links(session)
        .into_iter()
        .map(|link| link.label)
        .collect();
    println!("[nav] {}", labels.join(" | "));
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    tracing::debug!(?config, "Starting walk-through");

    let mut session = Session::new();
    nav_bar(&session);
    navigate("/", &session);
    navigate("/dashboard", &session);

    if navigate("/signup", &session) == Route::Signup {
        signup_screen(config).await?;
    }

    let mut login = LoginForm::new();
    login.update(LoginField::Email, "john@example.com");
    if let Err(e) = login.submit(&mut session) {
        println!("  [login]   {e}");
    }
    login.update(LoginField::Password, "password123");
    login.submit(&mut session)?;
    nav_bar(&session);

    if navigate("/login", &session) == Route::Dashboard {
        dashboard_screen(cli.json)?;
    }

    session.logout();
    nav_bar(&session);
    navigate("/dashboard", &session);

    Ok(())
}
