use portfolio_backend::configuration;
use portfolio_backend::startup::Application;
use portfolio_backend::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber =
        telemetry::get_subscriber("portfolio-backend".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
