use jotpad_web::configuration::CONFIGURATION;
use jotpad_web::startup::run;
use jotpad_web::telemetry::{get_subscriber, init_tracing};
use std::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber =
        get_subscriber(&CONFIGURATION).with(tracing_subscriber::fmt::Layer::default());
    init_tracing(subscriber);
    let address = format!("{}:{}", CONFIGURATION.host, CONFIGURATION.port);
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);
    let store = CONFIGURATION.get_note_store().await;
    run(listener, store, CONFIGURATION.debug)?.await
}
