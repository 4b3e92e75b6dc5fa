mod postgres;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use course_catalog::{CatalogService, CategoryId, CourseDetailAggregator, CourseId};
use course_catalog_postgres::PgCatalogStore;
use serde_json::Value;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use postgres::ConnectArgs;

type Service = CatalogService<PgCatalogStore, PgCatalogStore>;

/// Runs one course catalog query and prints the result as JSON
#[derive(Parser, Debug)]
#[command(name = "catalog-query")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    connect: ConnectArgs,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every category
    Categories,
    /// Show one category
    Category {
        #[arg(allow_negative_numbers = true)]
        category_id: CategoryId,
    },
    /// List the courses, optionally of one category
    Courses {
        #[arg(long)]
        category: Option<CategoryId>,
    },
    /// Show the detail of one course
    Detail {
        #[arg(allow_negative_numbers = true)]
        course_id: CourseId,
    },
    /// Show the detail of every course of a category
    Details {
        #[arg(long, allow_negative_numbers = true)]
        category: CategoryId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let pool = postgres::connect(&cli.connect).await?;
    if cli.connect.setup_schema {
        course_catalog_postgres::setup(&pool).await?;
    }
    let store = PgCatalogStore::new(pool);
    let service = CatalogService::new(
        store.clone(),
        CourseDetailAggregator::new(store),
        tracing::info_span!("catalog"),
    );

    tokio::select! {
        output = run(&service, cli.command) => {
            println!("{}", serde_json::to_string_pretty(&output?)?);
        }
        _ = signal::ctrl_c() => info!("query cancelled"),
    }
    Ok(())
}

async fn run(service: &Service, command: Command) -> Result<Value> {
    let output = match command {
        Command::Categories => {
            serde_json::to_value(service.list_categories().await.map_err(public)?)?
        }
        Command::Category { category_id } => serde_json::to_value(
            service
                .get_category(category_id)
                .await
                .map_err(public)?
                .ok_or_else(|| anyhow!("no such category: {category_id}"))?,
        )?,
        Command::Courses { category } => {
            serde_json::to_value(service.list_courses(category).await.map_err(public)?)?
        }
        Command::Detail { course_id } => serde_json::to_value(
            service
                .get_course_detail(course_id)
                .await
                .map_err(public)?
                .ok_or_else(|| anyhow!("no such course: {course_id}"))?,
        )?,
        Command::Details { category } => serde_json::to_value(
            service
                .list_course_details(category)
                .await
                .map_err(public)?,
        )?,
    };
    Ok(output)
}

fn public(err: course_catalog::Error) -> anyhow::Error {
    anyhow!(err.public_message())
}
