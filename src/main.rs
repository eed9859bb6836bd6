use std::process;
use std::sync::Arc;

use jdkdl::{ConsoleReporter, FetchConfig, VersionDriver};

#[tokio::main]
async fn main() {
    let config = match FetchConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let driver = match VersionDriver::new(config, Arc::new(ConsoleReporter::new())) {
        Ok(driver) => driver,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    driver.run_all().await;
}
