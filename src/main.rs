mod actions;
mod config;
mod constants;
mod db;
mod error;
mod handlers;
mod models;
mod persistence;
mod ports;
mod scheduler;
mod server;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    if let Err(err) = server::run().await {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
