use log::debug;
use rs_wordgen_core::io::wrap_words;
use rs_wordgen_core::model::corpus::Corpus;
use rs_wordgen_core::model::generation_input::StartSeed;
use rs_wordgen_core::model::generator::TextGenerator;
use rs_wordgen_core::model::uniform::RngSource;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Usage: rs-wordgen-exemple [corpus.txt] [word count] [seed] [random]
    let args: Vec<String> = std::env::args().collect();
    let corpus_path = args.get(1).map(String::as_str).unwrap_or("./data/dream.txt");
    let word_count: usize = match args.get(2) {
        Some(value) => value.parse()?,
        None => 400,
    };

    // Read the whole corpus once; the generator keeps its tokens to reseed
    let corpus = Corpus::from_file(corpus_path)?;
    println!("Finished reading data: {} tokens", corpus.len());

    let generator = TextGenerator::from_corpus(corpus);
    debug!("{}", generator.table());

    // A fixed seed replays the exact same text
    let mut source = match args.get(3) {
        Some(seed) => RngSource::seeded(seed.parse()?),
        None => RngSource::from_os(),
    };

    println!("\nTesting next words:");
    for (first, second) in [("i", "have"), ("let", "freedom")] {
        match generator.table().next_word(first, second, &mut source)? {
            Some(word) => println!("Next word after '{} {}': {}", first, second, word),
            None => println!("Next word after '{} {}': <dead end>", first, second),
        }
    }

    // Start from the first two words of the corpus unless asked for a random
    // pair of the corpus, 20 words per line
    let mut input = generator.make_generation_input(word_count);
    if args.get(4).is_some_and(|start| start == "random") {
        input.start_seed = StartSeed::Random;
    }
    input.set_line_width(20)?;

    let words = generator.generate(&input, &mut source)?;

    println!("\nGenerated text:");
    println!("----------------------------------------");
    println!("{}", wrap_words(&words, input.line_width()));
    println!("----------------------------------------");
    println!("\nTotal words generated: {}", words.len());

    Ok(())
}
