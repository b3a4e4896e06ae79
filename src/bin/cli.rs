//! Campus Signup CLI
//!
//! Terminal client driving the same controller as the browser page:
//! - Show the roster
//! - Check who the server thinks is logged in
//! - Sign up a student
//! - Unregister a student (staff login required)

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use campus_signup::config::generate_default_config;
use campus_signup::{
    AppController, Chrome, Config, DispatchOutcome, Dispatcher, FormRef, HttpApi, LoggingConfig,
    NoopScheduler, NoticeKind, NoticeSurface, Notification, Page, Roster, UiEvent,
};

#[derive(Parser)]
#[command(name = "campus-signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and manage extracurricular activity signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Roster output format (text, html)
    #[arg(short, long, default_value = "text", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all activities and their participants
    Roster,

    /// Show the current session
    Whoami,

    /// Sign up an email for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
    },

    /// Remove an email from an activity (requires staff login)
    Unregister {
        /// Activity name
        activity: String,
        /// Student email
        email: String,
        /// Staff username
        #[arg(short, long)]
        username: String,
        /// Staff password
        #[arg(short, long)]
        password: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Page surface backed by the terminal.
///
/// Feedback prints immediately; the roster is held until the command ends
/// so only the final snapshot is shown.
#[derive(Clone, Default)]
struct TerminalPage {
    roster: Rc<RefCell<Option<Roster>>>,
}

impl TerminalPage {
    fn print_roster(&self, format: &str) -> anyhow::Result<()> {
        match self.roster.borrow().as_ref() {
            Some(roster) if format == "html" => {
                println!("{}", roster.to_html().context("rendering roster HTML")?)
            }
            Some(roster) => println!("{}", roster.to_text()),
            None => println!("No roster loaded."),
        }
        Ok(())
    }
}

impl NoticeSurface for TerminalPage {
    fn show_notification(&self, notification: &Notification) {
        match notification.kind {
            NoticeKind::Success => println!("✓ {}", notification.text),
            NoticeKind::Error => eprintln!("✕ {}", notification.text),
        }
    }

    fn hide_notification(&self) {}
}

impl Page for TerminalPage {
    fn apply_chrome(&self, chrome: &Chrome) {
        tracing::debug!(?chrome, "Chrome updated");
    }

    fn show_roster(&self, roster: &Roster) {
        *self.roster.borrow_mut() = Some(roster.clone());
    }

    fn set_activity_choices(&self, _names: &[String]) {}

    fn reset_form(&self, _form: &FormRef) {}

    fn set_login_form_open(&self, _open: bool) {}

    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }
    init_logging(&config.logging);

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let api = HttpApi::new(&config.api.base_url)?;
    let page = TerminalPage::default();
    let dispatcher = Dispatcher::with_notice_window(
        api,
        page.clone(),
        NoopScheduler,
        config.notifications.window(),
    );
    let controller = AppController::new(dispatcher);

    tracing::info!(api = %config.api.base_url, "Connecting");
    let session = controller.bootstrap().await;

    let outcome = match cli.command {
        Commands::Roster => None,
        Commands::Whoami => {
            match session.username() {
                Some(username) => println!("Signed in as {}", username),
                None => println!("Not signed in"),
            }
            return Ok(());
        }
        Commands::Signup { activity, email } => {
            let event = if session.is_authenticated() {
                UiEvent::CardSignup { activity, email }
            } else {
                UiEvent::MainSignup { activity, email }
            };
            controller.handle(event).await
        }
        Commands::Unregister {
            activity,
            email,
            username,
            password,
        } => unregister(&controller, activity, email, username, password).await,
        Commands::Config { .. } => None,
    };

    page.print_roster(&cli.format)?;

    match outcome {
        None | Some(DispatchOutcome::Applied) => Ok(()),
        Some(_) => std::process::exit(1),
    }
}

async fn unregister<A, S>(
    controller: &AppController<A, TerminalPage, S>,
    activity: String,
    email: String,
    username: String,
    password: String,
) -> Option<DispatchOutcome>
where
    A: campus_signup::ActivityApi,
    S: campus_signup::Scheduler,
{
    let was_signed_in = controller.dispatcher().session().is_authenticated();

    if !was_signed_in {
        let login = controller
            .handle(UiEvent::Login { username, password })
            .await;
        if login != Some(DispatchOutcome::Applied) {
            return login;
        }
    }

    let outcome = controller
        .handle(UiEvent::Unregister { activity, email })
        .await;

    if !was_signed_in {
        controller.handle(UiEvent::Logout).await;
    }

    outcome
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("campus_signup={}", logging.level).into());
    let json = logging.format == "json";

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
