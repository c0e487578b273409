use anyhow::{anyhow, Result};
use chrono::Datelike;
use colored::*;
use pipeline_advisor::{
    core::{config::ExtractorConfig, init},
    form6::{taxonomy::DetailCategory, DetailReport, Extractor, Filing},
    valuation::{self, Assumptions, Weights},
};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "form6-cli", about = "Search and extract FERC Form 6 pipeline filings")]
struct Opt {
    /// Filings directory, overrides FORM6_FILINGS_DIR
    #[structopt(long, parse(from_os_str))]
    dir: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// List every filing in the directory
    List {
        #[structopt(long)]
        csv: bool,
    },
    /// Find filings by company name
    Search {
        term: String,
        #[structopt(long)]
        csv: bool,
    },
    /// Print the financial summary of a filing
    Summary { id: String },
    /// Print the detail report of a filing
    Details {
        id: String,
        #[structopt(long)]
        json: bool,
    },
    /// Value a filing with the cost, income and market approaches
    Value {
        id: String,
        #[structopt(long, default_value = "30")]
        cost_weight: f64,
        #[structopt(long, default_value = "50")]
        income_weight: f64,
        #[structopt(long, default_value = "20")]
        market_weight: f64,
    },
}

fn print_filings(filings: &[Filing], as_csv: bool) -> Result<()> {
    if as_csv {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(std::io::stdout());
        for filing in filings {
            writer.serialize(filing)?;
        }
        writer.flush()?;
        return Ok(());
    }

    if filings.is_empty() {
        println!("{}", "No filings found".yellow());
    }
    for filing in filings {
        println!("{}  {}", filing.company.bold(), filing.id.dimmed());
    }
    Ok(())
}

fn print_details(report: &DetailReport) {
    println!("{}", report.company_name.bold().underline());
    println!(
        "{} {:.1} ({:?})",
        "Total miles:".cyan(),
        report.total_miles(),
        report.mileage.mileage_source
    );
    if !report.states.is_empty() {
        println!("{} {}", "States:".cyan(), report.states.join(", "));
    }

    for pipeline in &report.pipelines {
        let miles = pipeline
            .miles
            .map(|m| format!("{:.1} mi", m))
            .unwrap_or_else(|| "-".to_string());
        println!("  {} [{}] {}", pipeline.name, pipeline.id, miles);
    }
    for segment in &report.pipeline_segments {
        println!("  {} -> {}", segment.start_point, segment.end_point);
    }

    if !report.company_info.is_empty() {
        println!("\n{}", "Company Information".green().bold());
        for (label, value) in &report.company_info {
            println!("  {:<40} {}", label, value);
        }
    }

    for category in DetailCategory::iter() {
        let values = report.category(category);
        if values.is_empty() {
            continue;
        }
        println!("\n{}", category.to_string().green().bold());
        for (label, value) in values {
            println!("  {:<40} {:>20.2}", label, value);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init::logging();

    let opt = Opt::from_args();
    let mut config = ExtractorConfig::from_env()?;
    if let Some(dir) = opt.dir {
        config = config.with_filings_dir(dir);
    }
    let extractor = Extractor::from_config(&config);

    match opt.cmd {
        Command::List { csv } => print_filings(&extractor.list(), csv)?,
        Command::Search { term, csv } => {
            let term = term.trim();
            if term.is_empty() {
                return Err(anyhow!("Search term cannot be empty"));
            }
            print_filings(&extractor.search(term), csv)?;
        }
        Command::Summary { id } => match extractor.summary(&id).await? {
            Some(summary) => println!("{}", serde_json::to_string_pretty(&summary)?),
            None => println!("{}", format!("No usable data in {}", id).yellow()),
        },
        Command::Details { id, json } => match extractor.details(&id).await? {
            Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
            Some(report) => print_details(&report),
            None => println!("{}", format!("No usable data in {}", id).yellow()),
        },
        Command::Value {
            id,
            cost_weight,
            income_weight,
            market_weight,
        } => {
            let summary = extractor
                .summary(&id)
                .await?
                .ok_or_else(|| anyhow!("No usable data in {}", id))?;
            let mut assumptions = Assumptions::from_summary(&summary, chrono::Utc::now().year());
            assumptions.weights = Weights {
                cost: cost_weight,
                income: income_weight,
                market: market_weight,
            };
            let valuation = valuation::valuate(&assumptions)?;
            println!("{}", serde_json::to_string_pretty(&valuation)?);
        }
    }

    Ok(())
}
