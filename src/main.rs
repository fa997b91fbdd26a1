use std::net::TcpListener;

use actix_web::web;
use env_logger::Env;
use probe::{configuration::get_configuration, services::Droid, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(address)?;

    // The chrome session itself is only created on the first scrape request.
    let droid = web::Data::new(Droid::new(configuration.webdriver));

    run(listener, droid)?.await
}
