use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use estate_contact::catalog::{render, BrowserSession, Catalog};
use estate_contact::config::{Config, Credentials, DEFAULT_CONFIG_PATH};
use estate_contact::infra::{build_submission_use_case, form_view::InMemoryFormView};
use estate_contact::observability::{self, metrics};
use estate_contact::types::{SubmissionInput, UiState, ValidationResult};
use estate_contact::validation::validate;

#[derive(Parser)]
#[command(name = "estate_contact")]
#[command(about = "Real-estate site contact pipeline and catalog tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FormArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    /// Optional 10-digit phone number
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long)]
    message: String,
}

impl From<FormArgs> for SubmissionInput {
    fn from(args: FormArgs) -> Self {
        SubmissionInput {
            name: args.name,
            email: args.email,
            phone: args.phone,
            message: args.message,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, verify and deliver a contact form submission
    Submit {
        #[command(flatten)]
        form: FormArgs,
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Print Prometheus metrics after the run
        #[arg(long)]
        metrics: bool,
    },
    /// Run local validation only; no network calls
    Validate {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Render catalog HTML fragments for a city
    Catalog {
        /// Path to the catalog JSON document
        #[arg(long, default_value = "projects.json")]
        data: PathBuf,
        #[arg(long)]
        city: String,
        /// Render this location's details
        #[arg(long)]
        location: Option<String>,
        /// Render this project's details modal (requires --location)
        #[arg(long, requires = "location")]
        project: Option<String>,
        /// Main image to show in the project modal
        #[arg(long, requires = "project")]
        image: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    observability::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit { form, config, metrics: print_metrics } => {
            if print_metrics {
                metrics::init().map_err(|e| anyhow::anyhow!("{}", e))?;
            }

            let config = Config::load_from(&config)
                .with_context(|| format!("loading {}", config.display()))?;
            let credentials = Credentials::from_env().context("reading provider credentials")?;

            let view = Arc::new(InMemoryFormView::new());
            let use_case = build_submission_use_case(&config, &credentials, view.clone())?;

            let state = use_case.submit(form.into()).await;

            if let Some(rendered) = metrics::render() {
                println!("{}", rendered);
            }

            match state {
                UiState::Success => {
                    info!("Submission completed");
                    println!("✅ {}", view.snapshot().success_text);
                }
                UiState::Error(message) => {
                    error!("Submission did not complete");
                    println!("❌ {}", message);
                    bail!("submission failed");
                }
                other => bail!("submission ended in unexpected state: {}", other.label()),
            }
        }
        Commands::Validate { form } => match validate(&form.into()) {
            ValidationResult::Valid(submission) => {
                println!("✅ valid");
                println!("   name: {}", submission.name());
                println!("   email: {}", submission.email());
                println!("   phone: {}", submission.phone().unwrap_or("(none)"));
            }
            ValidationResult::Invalid(reason) => {
                println!("❌ {}", reason);
                bail!("invalid input");
            }
        },
        Commands::Catalog { data, city, location, project, image } => {
            let catalog = Catalog::load(&data).with_context(|| format!("loading {}", data.display()))?;
            let mut session = BrowserSession::new(&catalog, &city)?;

            match (location, project) {
                (Some(location), Some(project)) => {
                    session.show_location(&location)?;
                    session.show_project(&location, &project)?;
                    if let Some(index) = image {
                        session.set_main_image(index)?;
                    }
                    println!("{}", render::render_project_details(&session)?);
                }
                (Some(location), None) => {
                    session.show_location(&location)?;
                    println!("{}", render::render_location_details(&session, &location)?);
                }
                _ => println!("{}", render::render_locations(&session)?),
            }
        }
    }
    Ok(())
}
