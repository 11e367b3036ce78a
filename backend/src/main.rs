use axum::{handler::HandlerWithoutStateExt, routing::get, Router};
use std::net::SocketAddr;
use tower_http::services::ServeDir;
use tracing::{error, info};

mod pages;
mod robots;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key).ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	tracing_subscriber::fmt().init();

	let port = dotenv_num!("SITE_PORT", 8080, u16);

	// The stylesheets, bridge art, and plain .htm pages all live on disk; the
	// server only renders the acknowledgement pages itself.
	let Some(asset_dir) = dotenv::var("ASSET_DIR").ok().and_then(|d| (!d.is_empty()).then_some(d)) else {
		error!("ASSET_DIR is not set in .env, and it is necessary to determine \
				where the site's stylesheets, artwork, and static pages live. \
				Please set it and retry.");
		return Ok(())
	};

	if !std::path::Path::new(&asset_dir).is_dir() {
		error!("ASSET_DIR ({asset_dir}) does not point to a valid directory");
		return Ok(())
	}

	info!("Read .env...");
	info!("Serving static assets from {asset_dir}");

	let static_site = ServeDir::new(&asset_dir)
		.not_found_service(pages::not_found.into_service());

	// The .php routes are the addresses the printed programme and the external
	// form handlers still point at; the bare names are for everyone else.
	let app = Router::new()
		.route("/feedback", get(pages::ack::feedback))
		.route("/feedback.php", get(pages::ack::feedback))
		.route("/reviewform", get(pages::ack::review))
		.route("/reviewform.php", get(pages::ack::review))
		.route("/fringeform", get(pages::ack::fringe_application))
		.route("/fringeform.php", get(pages::ack::fringe_application))
		.route("/info", get(pages::ack::info_request))
		.route("/info.php", get(pages::ack::info_request))
		.route("/robots.txt", get(robots::robots_txt))
		.fallback_service(static_site);

	let addr = SocketAddr::from(([127, 0, 0, 1], port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	info!("Serving axum on {addr}...");

	axum::serve(listener, app).await?;

	Ok(())
}
