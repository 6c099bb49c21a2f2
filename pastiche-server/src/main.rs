use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use pastiche_core::text::generator;
use pastiche_core::text::lexicon::{self, PhraseCategory};
use pastiche_core::text::request::GenerationRequest;

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one pastiche paragraph from the query parameters
/// (`sentences`, `width`) and returns it as a plain-text body.
/// Missing parameters take the defaults (1 sentence, 72 characters);
/// non-numeric parameters are rejected by the query extractor.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerationRequest>) -> impl Responder {
	HttpResponse::Ok().body(generator::generate(&query))
}

/// HTTP GET endpoint `/v1/categories`
///
/// Lists the phrase categories and how many fragments each one holds,
/// one `name: count` line per category.
#[get("/v1/categories")]
async fn get_categories() -> impl Responder {
	let listing = PhraseCategory::ALL
		.iter()
		.map(|category| format!("{}: {}", category.name(), lexicon::fragments(*category).len()))
		.collect::<Vec<_>>()
		.join("\n");

	HttpResponse::Ok().body(listing)
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server exposing paragraph generation. The
/// generator is stateless, so no shared state is needed; each request
/// works on its own shuffled pools.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - Log verbosity follows `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	log::info!("listening on 127.0.0.1:5000");

	HttpServer::new(|| {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.service(get_generated)
			.service(get_categories)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
