use std::{env, process::ExitCode, sync::Arc};

use maas_directions::{
    services::request::DirectionsClient,
    structures::{Config, LatLng, RouteOptions, Waypoint},
    web::app::server,
};
use tracing::error;

const USAGE: &str =
    "usage: maas-directions <config.yml> [serve | url <from_lat> <from_lng> <to_lat> <to_lng>]";

fn print_url(config: &Config, coords: &[String]) -> Result<(), String> {
    let values = coords
        .iter()
        .map(|c| c.parse::<f64>().map_err(|e| format!("Invalid coordinate '{c}': {e}")))
        .collect::<Result<Vec<f64>, String>>()?;
    let [from_lat, from_lng, to_lat, to_lng] = values[..] else {
        return Err(USAGE.to_string());
    };

    let client = DirectionsClient::new(&config.api).map_err(|e| e.to_string())?;
    let mut options = RouteOptions::walking(vec![
        Waypoint::new(LatLng::new(from_lat, from_lng)),
        Waypoint::new(LatLng::new(to_lat, to_lng)),
    ]);
    options.walking = config.default_walking;

    let url = client.request_url(&options).map_err(|e| e.to_string())?;
    println!("{url}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config_path) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    let config = match Config::load(config_path) {
        Ok(c) => c,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match args.get(1).map(String::as_str) {
        None | Some("serve") => {
            if let Err(e) = server(Arc::new(config)).await {
                error!("Server failed: {e}");
                return ExitCode::FAILURE;
            }
        }
        Some("url") => {
            if let Err(e) = print_url(&config, &args[2..]) {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        }
        Some(other) => {
            eprintln!("Unknown command '{other}'\n{USAGE}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
