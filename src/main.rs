use std::{path::PathBuf, process::ExitCode, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_session::{
  auth::{
    self,
    dto::{login_dto::LoginDto, signup_dto::SignupDto},
    password_strength::PasswordStrength,
    AuthError,
  },
  dashboard::{
    directory::{DummyJsonDirectory, UserDirectory},
    load_dashboard,
  },
  navigation::{self, Route},
  session::{LoginOutcome, SessionStore},
  shared::{config::Config, storage::FileStore, validation::field_errors},
  users::{self, FormError, ProfileField, SettingsForm},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Single-user admin dashboard",
  long_about = None
)]
struct Args {
  /// JSON file backing the persisted session and registered user
  /// (defaults to DASHBOARD_STORAGE_PATH, then .dashboard/storage.json)
  #[arg(long)]
  storage: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Register the (single) account, replacing any previous one
  Signup {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
  },
  Login {
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
  },
  Logout,
  /// Show the profile of the logged-in user
  Profile,
  /// Edit the profile; omitted fields keep their current value
  Settings {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    role: Option<String>,
    #[arg(long)]
    phone: Option<String>,
  },
  Dashboard {
    /// Skip the demo API and use the mock figures only
    #[arg(long)]
    offline: bool,
  },
}

impl Command {
  fn path(&self) -> &'static str {
    match self {
      Command::Signup { .. } => navigation::SIGNUP_PATH,
      Command::Login { .. } => navigation::LOGIN_PATH,
      Command::Logout | Command::Dashboard { .. } => navigation::DASHBOARD_PATH,
      Command::Profile => navigation::PROFILE_PATH,
      Command::Settings { .. } => navigation::SETTINGS_PATH,
    }
  }
}

#[actix_rt::main]
async fn main() -> ExitCode {
  let config = Config::from_env();
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .init();

  match run(Args::parse(), config).await {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(error) => {
      eprintln!("error: {error:#}");
      ExitCode::FAILURE
    }
  }
}

async fn run(args: Args, config: Config) -> anyhow::Result<bool> {
  let storage_path = args.storage.unwrap_or(config.storage_path.clone());
  let storage = FileStore::open(&storage_path).with_context(|| {
    format!("could not open storage at {}", storage_path.display())
  })?;
  let store = SessionStore::open(Arc::new(storage))?;
  store.wait_hydrated().await;
  info!(path = %storage_path.display(), "session ready");

  if let Route::Redirect(target) =
    navigation::guard_snapshot(&store.snapshot(), args.command.path())
  {
    // Logging out while signed out is harmless; everything else is redirected.
    if !matches!(args.command, Command::Logout) {
      println!("Redirecting to {target}");
      return Ok(false);
    }
  }

  match args.command {
    Command::Signup {
      name,
      email,
      password,
    } => {
      let strength = PasswordStrength::of(&password);
      match auth::signup(
        &store,
        SignupDto {
          name,
          email,
          password,
        },
      ) {
        Ok(()) => {
          println!("Account created (password strength: {})", strength.label());
          println!("Log in to continue.");
          Ok(true)
        }
        Err(AuthError::Invalid(errors)) => {
          print_field_errors(&errors);
          Ok(false)
        }
        Err(AuthError::Session(error)) => Err(error.into()),
      }
    }
    Command::Login { email, password } => {
      match auth::login(&store, LoginDto { email, password }) {
        Ok(LoginOutcome::Authenticated) => {
          println!("Logged in.");
          Ok(true)
        }
        Ok(LoginOutcome::InvalidCredentials) => {
          println!("Invalid email or password.");
          Ok(false)
        }
        Ok(LoginOutcome::NotRegistered) => {
          println!("No account found. Sign up first.");
          Ok(false)
        }
        Err(AuthError::Invalid(errors)) => {
          print_field_errors(&errors);
          Ok(false)
        }
        Err(AuthError::Session(error)) => Err(error.into()),
      }
    }
    Command::Logout => {
      auth::logout(&store)?;
      println!("Logged out.");
      Ok(true)
    }
    Command::Profile => {
      let Some(profile) = users::profile(&store) else {
        return Ok(false);
      };
      println!("{}", serde_json::to_string_pretty(&profile)?);
      Ok(true)
    }
    Command::Settings {
      name,
      email,
      role,
      phone,
    } => {
      let mut form = SettingsForm::new(store.user().as_ref());
      let edits = [
        (ProfileField::Name, name),
        (ProfileField::Email, email),
        (ProfileField::Role, role),
        (ProfileField::Phone, phone),
      ];
      for (field, value) in edits {
        if let Some(value) = value {
          form.set_field(field, value);
        }
      }
      if !form.is_changed() {
        println!("Nothing to change.");
        return Ok(true);
      }

      match form.submit(&store) {
        Ok(()) => {
          println!("Profile updated.");
          Ok(true)
        }
        Err(FormError::Invalid(_)) => {
          for (field, message) in form.errors() {
            println!("{field}: {message}");
          }
          Ok(false)
        }
        Err(error @ FormError::Save(_)) => {
          println!("{error}");
          Ok(false)
        }
      }
    }
    Command::Dashboard { offline } => {
      let Some(user) = store.user() else {
        return Ok(false);
      };
      let directory = DummyJsonDirectory::new(config.api_url.clone());
      let source: Option<&dyn UserDirectory> =
        (!offline).then_some(&directory as &dyn UserDirectory);
      let dashboard =
        load_dashboard(&user, source, config.api_users_limit).await;
      println!("{}", serde_json::to_string_pretty(&dashboard)?);
      Ok(true)
    }
  }
}

fn print_field_errors(errors: &validator::ValidationErrors) {
  for (field, message) in field_errors(errors) {
    println!("{field}: {message}");
  }
}
