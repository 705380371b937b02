use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};

use log::{error, info};
use serde::Deserialize;
use rs_wordgen_core::GenError;
use rs_wordgen_core::io::list_files;
use rs_wordgen_core::model::generation_input::{GenerationInput, StartSeed};
use rs_wordgen_core::model::generator::TextGenerator;
use rs_wordgen_core::model::uniform::RngSource;

const DATA_FOLDER: &str = "./data";

/// Largest number of words a single request may ask for.
const MAX_WORDS: usize = 100_000;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	words: Option<usize>,
	seed: Option<u64>,
	line_width: Option<usize>,
	restart_limit: Option<usize>,
	start: Option<String> // -> corpus, random or custom:first,second
}

#[derive(Deserialize)]
struct ModelQuery {
	names: Option<String>
}

struct SharedData {
	generator: TextGenerator
}

impl GenerateParams {
	/// Determines the starting seed strategy for generation.
	fn start_seed(&self) -> Result<StartSeed, String> {
		match &self.start {
			None => Ok(StartSeed::Corpus),
			Some(s) if s.to_lowercase() == "corpus" => Ok(StartSeed::Corpus),
			Some(s) if s.to_lowercase() == "random" => Ok(StartSeed::Random),
			Some(s) if s.to_lowercase().starts_with("custom:") => {
				let value = &s["custom:".len()..];
				match value.split_once(',') {
					Some((first, second)) if !first.trim().is_empty() && !second.trim().is_empty() => {
						Ok(StartSeed::Custom(first.trim().to_owned(), second.trim().to_owned()))
					}
					_ => Err("Custom start must be 'custom:first,second'".into()),
				}
			}
			Some(_) => Err("Start must be 'corpus', 'random' or 'custom:first,second'".into()),
		}
	}

	/// Builds the generation input, validating every setting.
	fn generation_input(&self) -> Result<GenerationInput, String> {
		let words = self.words.unwrap_or(100);
		if words > MAX_WORDS {
			return Err(format!("words must be at most {}, got {}", MAX_WORDS, words));
		}
		let mut input = GenerationInput::new(words);
		input.start_seed = self.start_seed()?;
		if let Some(line_width) = self.line_width {
			input.set_line_width(line_width).map_err(|e| e.to_string())?;
		}
		if let Some(restart_limit) = self.restart_limit {
			input.set_restart_limit(restart_limit).map_err(|e| e.to_string())?;
		}
		Ok(input)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates text from the loaded corpora based on query parameters.
/// Passing `seed` makes the response reproducible.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let input = match query.generation_input() {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let result = match query.seed {
		Some(seed) => shared_data.generator.generate_text(&input, &mut RngSource::seeded(seed)),
		None => shared_data.generator.generate_text(&input, &mut RngSource::from_os()),
	};

	match result {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e @ (GenError::InsufficientData(_) | GenError::ExhaustedModel { .. })) => {
			HttpResponse::Conflict().body(e.to_string())
		}
		Err(e @ GenError::InvalidArgument(_)) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => {
			error!("generation failed: {}", e);
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

#[get("/v1/models")]
async fn get_models() -> impl Responder {
	match list_files(DATA_FOLDER, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list models")
	}
}

#[get("/v1/loaded_models")]
async fn get_loaded_models(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.generator.corpus_names().join("\n"))
}

#[get("/v1/summary")]
async fn get_summary(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().json(shared_data.generator.summary())
}

#[put("/v1/load_models")]
async fn put_model(data: web::Data<Mutex<SharedData>>, query: web::Query<ModelQuery>) -> impl Responder {
	let query_names = match &query.names {
		Some(s) if !s.trim().is_empty() => s.trim(),
		_ => return HttpResponse::BadRequest().body("Missing or empty model name"),
	};

	let model_names: Vec<&str> = query_names
		.split(',')
		.map(|s| s.trim())
		.filter(|s| !s.is_empty())
		.collect();

	// Train outside the lock, then swap
	let mut generator = TextGenerator::new();
	for name in model_names {
		let corpus_path = format!("{}/{}.txt", DATA_FOLDER, name);
		if let Err(e) = generator.load_corpus(&corpus_path) {
			return HttpResponse::InternalServerError().body(format!("Failed to load model: {e}"));
		}
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.generator = generator;
	info!("loaded corpora: {}", shared_data.generator.corpus_names().join(", "));

	HttpResponse::Ok().body("Models loaded successfully")
}

/// Main entry point for the server.
///
/// Starts with an empty generator wrapped in a `Mutex`; corpora are loaded
/// through `/v1/load_models`. Binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		generator: TextGenerator::new(),
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	info!("listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		let cors = Cors::default()
			.allow_any_origin()
			.allowed_methods(vec!["GET", "PUT"]);
		App::new()
			.wrap(cors)
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_models)
			.service(put_model)
			.service(get_loaded_models)
			.service(get_summary)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
