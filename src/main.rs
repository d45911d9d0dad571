use littlebites_web::configuration::get_configuration;
use littlebites_web::startup::Application;
use littlebites_web::telemetry::{get_subscriber, init_subscriber};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber(
        "littlebites-web".into(),
        "littlebites_web=info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration)?;
    application.run_until_stopped().await?;
    Ok(())
}
