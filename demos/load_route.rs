//! Loads the data for one route from a running app and prints it.
//!
//! ```text
//! RUST_LOG=debug cargo run --example load_route -- \
//!     http://localhost:3000 /_remix/data routes/index /
//! ```

use remix_data::{
    AppData, DataLoader, EntryRoute, LoadOutcome, LoaderConfig, Location, RouteParams,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(origin), Some(loader_url), Some(route_id)) = (args.next(), args.next(), args.next())
    else {
        anyhow::bail!("usage: load_route <origin> <loader-url> <route-id> [path] [name=value...]");
    };
    let location = Location::parse(&args.next().unwrap_or_else(|| "/".to_string()));
    let params: RouteParams = args
        .filter_map(|kv| kv.split_once('=').map(|(k, v)| (k.to_string(), v.to_string())))
        .collect();

    let config = LoaderConfig::builder()
        .origin(&origin)?
        .user_agent("remix-data-demo/0.1")
        .build()?;
    let loader = DataLoader::new(config)?;
    let route = EntryRoute::new(route_id, Some(loader_url));

    match loader.load_route_data(&route, &location, &params, None).await? {
        LoadOutcome::NoData => println!("route has no loader"),
        LoadOutcome::Data(data) => print_data(&data)?,
        LoadOutcome::Redirect { location, data } => {
            println!("redirect -> {location}");
            print_data(&data)?;
        }
    }

    Ok(())
}

fn print_data(data: &AppData) -> anyhow::Result<()> {
    match data {
        AppData::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
        AppData::Text(text) => println!("{text}"),
    }
    Ok(())
}
