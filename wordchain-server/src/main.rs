use std::env;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use anyhow::Context;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use wordchain_core::io::read_corpus;
use wordchain_core::{CorpusIndex, GenerationInput, IndexerConfig, MarkovError, SAMPLE_CORPUS, SentenceGenerator};

const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Generator shared by every worker.
///
/// The index lives for the whole process, so the start candidates are
/// collected once instead of on every request.
type SharedGenerator = SentenceGenerator<'static>;

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	ending: Option<char>,
	max_length: Option<usize>,
	max_attempts: Option<usize>,
	seed: Option<u64>,
}

impl GenerateParams {
	/// Builds a validated `GenerationInput`, keeping defaults for missing values.
	fn generation_input(&self) -> Result<GenerationInput, MarkovError> {
		let mut input = GenerationInput::default();
		if let Some(max_length) = self.max_length {
			input.set_max_length(max_length)?;
		}
		if let Some(max_attempts) = self.max_attempts {
			input.set_max_attempts(max_attempts)?;
		}
		input.set_ending(self.ending)?;
		Ok(input)
	}
}

/// Maps a generation error to an HTTP response.
fn error_response(e: &MarkovError) -> HttpResponse {
	match e {
		MarkovError::InvalidConfig(_) | MarkovError::UnknownToken(_) => HttpResponse::BadRequest().body(e.to_string()),
		MarkovError::NoMatchingSentence { .. } | MarkovError::DegenerateCorpus(_) => {
			HttpResponse::UnprocessableEntity().body(e.to_string())
		}
		_ => {
			error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence from the shared generator. The index is read-only,
/// so requests run in parallel without locking; each request owns its random
/// source.
#[get("/v1/generate")]
async fn get_generated(generator: web::Data<SharedGenerator>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return error_response(&e),
	};

	let result = match query.seed {
		Some(seed) => generator.generate_ending_with(&input, &mut StdRng::seed_from_u64(seed)),
		None => generator.generate_ending_with(&input, &mut rand::rng()),
	};

	match result {
		Ok(sentence) => HttpResponse::Ok().body(sentence),
		Err(e) => error_response(&e),
	}
}

/// HTTP GET endpoint `/v1/stats`, returning corpus statistics as JSON.
#[get("/v1/stats")]
async fn get_stats(generator: web::Data<SharedGenerator>) -> impl Responder {
	HttpResponse::Ok().json(generator.index().stats())
}

/// Builds a generator over an index that is never freed.
fn shared_generator(index: CorpusIndex) -> SharedGenerator {
	SentenceGenerator::new(Box::leak(Box::new(index)))
}

/// Reads the corpus named by `WORDCHAIN_CORPUS`, or the built-in sample.
fn load_index() -> anyhow::Result<CorpusIndex> {
	let text = match env::var("WORDCHAIN_CORPUS") {
		Ok(path) => read_corpus(&path).with_context(|| format!("failed to read corpus {path}"))?,
		Err(_) => SAMPLE_CORPUS.to_owned(),
	};
	CorpusIndex::build(&text, &IndexerConfig::default()).context("failed to index corpus")
}

/// Main entry point for the server.
///
/// Indexes the corpus once, then serves it read-only from every worker.
///
/// # Notes
/// - `WORDCHAIN_CORPUS` selects the corpus file
/// - `WORDCHAIN_BIND` overrides the listening address (default 127.0.0.1:5000)
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let generator = web::Data::new(shared_generator(load_index()?));
	info!("corpus indexed: {:?}", generator.index().stats());

	let bind = env::var("WORDCHAIN_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_owned());
	info!("listening on {bind}");

	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(generator.clone())
			.service(get_generated)
			.service(get_stats)
	})
		.bind(&bind)
		.with_context(|| format!("failed to bind {bind}"))?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn data(text: &str) -> web::Data<SharedGenerator> {
		web::Data::new(shared_generator(CorpusIndex::build(text, &IndexerConfig::default()).unwrap()))
	}

	#[actix_web::test]
	async fn generate_with_ending() {
		let app = test::init_service(
			App::new().app_data(data("Hello world. Goodbye world!")).service(get_generated),
		)
		.await;
		let req = test::TestRequest::get().uri("/v1/generate?ending=.&seed=3").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
		assert_eq!(test::read_body(resp).await, web::Bytes::from_static(b"Hello world."));
	}

	#[actix_web::test]
	async fn invalid_parameters_are_bad_requests() {
		let app = test::init_service(App::new().app_data(data(SAMPLE_CORPUS)).service(get_generated)).await;
		for uri in ["/v1/generate?ending=x", "/v1/generate?max_length=1", "/v1/generate?max_attempts=0"] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn oversized_budgets_are_bad_requests() {
		let app = test::init_service(App::new().app_data(data("A b b")).service(get_generated)).await;
		for uri in [
			"/v1/generate?max_length=18446744073709551615",
			"/v1/generate?max_length=100001",
			"/v1/generate?max_attempts=18446744073709551615",
		] {
			let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn largest_budget_still_terminates() {
		let app = test::init_service(App::new().app_data(data("A b b")).service(get_generated)).await;
		let req = test::TestRequest::get().uri("/v1/generate?max_length=100000&seed=1").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);
		assert!(test::read_body(resp).await.len() < 100_000);
	}

	#[actix_web::test]
	async fn empty_corpus_is_unprocessable() {
		let app = test::init_service(App::new().app_data(data("")).service(get_generated)).await;
		let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/generate").to_request()).await;
		assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
	}

	#[actix_web::test]
	async fn stats_as_json() {
		let app = test::init_service(App::new().app_data(data("Hello world. Goodbye world!")).service(get_stats)).await;
		let req = test::TestRequest::get().uri("/v1/stats").to_request();
		let stats: serde_json::Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(stats["distinct"], 4);
		assert_eq!(stats["start_candidates"], 2);
	}
}
