//! Reset the configured database to the sample restaurants and pizzas.
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cfg = configs::AppConfig::load_and_validate()?;
    common::utils::logging::init_logging(cfg.logging.format);

    let db = service::runtime::prepare_database(&cfg.database).await?;
    let summary = service::seed::seed_sample_data(&db).await?;
    info!(
        service = "seed",
        event = "seeded",
        url = %cfg.database.url,
        restaurants = summary.restaurants,
        pizzas = summary.pizzas,
        restaurant_pizzas = summary.restaurant_pizzas,
        "sample data written"
    );
    Ok(())
}
