use log::{error, info};
use std::env;
use std::path::Path;

use galeri::configuration::config::Config;
use galeri::controller::controller_handler::Controller;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .init();

    println!(
        "
 ██████╗  █████╗ ██╗     ███████╗██████╗ ██╗
██╔════╝ ██╔══██╗██║     ██╔════╝██╔══██╗██║
██║  ███╗███████║██║     █████╗  ██████╔╝██║
██║   ██║██╔══██║██║     ██╔══╝  ██╔══██╗██║
╚██████╔╝██║  ██║███████╗███████╗██║  ██║██║
 ╚═════╝ ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝  ╚═╝╚═╝
=============================================
  Galeri Sahabat - simpan momen terbaikmu
=============================================
"
    );

    info!("Importing configuration");

    // A single non-flag argument is a TOML configuration file; otherwise the
    // configuration comes from flags and defaults.
    let args: Vec<String> = env::args().collect();
    let config = if args.len() == 2 && !args[1].starts_with('-') {
        Config::from_file(Path::new(args[1].as_str()))
    } else {
        Config::from_args()
    };

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Unable to import configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Configuration imported successfully");

    let controller = match Controller::new(config) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Unable to create a controller instance: {}, exiting...", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = controller.run().await {
        error!("Error occured in the controller process: {}, exiting...", e);
        std::process::exit(1);
    }
}
