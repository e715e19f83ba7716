use clap::{Parser, Subcommand, ValueEnum};
use log::debug;

use travel_recommendation::{
    ContactForm, HtmlPresenter, OutputStyle, RequestFetcher, SearchConfig, SearchOutcome,
    SearchPipeline, TerminalPresenter,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search the recommendation dataset
    Search {
        /// Free-text search term, e.g. "beach" or "japan"
        term: String,
        #[arg(long, value_enum, default_value = "text")]
        format: Format,
        /// Override the configured dataset location
        #[arg(long)]
        dataset_url: Option<String>,
    },
    /// Validate and (pretend to) submit the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
    Html,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SearchConfig::load()?;
    debug!("{:?}", config);

    match cli.command {
        Command::Search {
            term,
            format,
            dataset_url,
        } => {
            if let Some(url) = dataset_url {
                config.dataset_url = url;
            }
            let fetcher = RequestFetcher::new(config.dataset_url.clone());

            match format {
                Format::Text | Format::Json => {
                    let style = match format {
                        Format::Json => OutputStyle::Json,
                        _ => OutputStyle::Text,
                    };
                    let pipeline = SearchPipeline::with_config(
                        fetcher,
                        TerminalPresenter::stdout(style),
                        &config,
                    );
                    if pipeline.submit(&term).await == SearchOutcome::Ignored {
                        return Err("Please provide a search term".into());
                    }
                }
                Format::Html => {
                    let pipeline =
                        SearchPipeline::with_config(fetcher, HtmlPresenter::new(), &config);
                    if pipeline.submit(&term).await == SearchOutcome::Ignored {
                        return Err("Please provide a search term".into());
                    }
                    print!("{}", pipeline.presenter().content());
                }
            }
        }
        Command::Contact {
            name,
            email,
            message,
        } => {
            let form = ContactForm::new(name, email, message);
            let receipt = form.submit(config.contact_submit_delay()).await?;
            println!("{}", receipt.message);
        }
    }

    Ok(())
}
