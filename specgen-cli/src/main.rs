//! Command-line driver for specgen
//!
//! Runs the full extraction cycle: load the previous aggregate, run every
//! extractor in the fixed declared order, land each output in its category
//! under the selected merge strategy, persist the result. One progress line
//! per extractor; any failure aborts with a diagnostic before anything is
//! persisted.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::{Arg, ArgAction, Command};

use specgen_config::{Loader, SpecgenConfig};
use specgen_core::combine::MergeStrategy;
use specgen_extract::extractors::{
    FunctionsExtractor, KeywordsExtractor, OperatorsExtractor, TypesExtractor, VariablesExtractor,
};
use specgen_extract::fetch::FetchSettings;
use specgen_extract::store::{load_spec, save_spec};
use specgen_extract::{CachedFetcher, Extractor};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("specgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate the HLSL language specification from Microsoft Learn documentation")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("merge")
                .long("merge")
                .help("Fold fresh records into the existing specification instead of replacing each category")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-cache")
                .long("no-cache")
                .help("Ignore cached documents and refetch everything")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("no-cache") {
        loader = loader
            .set_override("fetch.use_cache", false)
            .unwrap_or_else(|e| {
                eprintln!("Configuration error: {e}");
                process::exit(1);
            });
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {e}");
        process::exit(1);
    });

    let strategy = if matches.get_flag("merge") {
        MergeStrategy::FoldMerge
    } else {
        MergeStrategy::Replace
    };

    run_pipeline(&config, strategy);
}

/// Execute the extraction/merge/persist cycle.
fn run_pipeline(config: &SpecgenConfig, strategy: MergeStrategy) {
    let fetcher = CachedFetcher::new(FetchSettings {
        cache_dir: PathBuf::from(&config.fetch.cache_dir),
        ttl: Duration::from_secs(config.fetch.ttl_seconds),
        timeout: Duration::from_secs(config.fetch.timeout_seconds),
        user_agent: config.fetch.user_agent.clone(),
        use_cache: config.fetch.use_cache,
    })
    .unwrap_or_else(|e| {
        eprintln!("Fetcher error: {e}");
        process::exit(1);
    });

    // fixed declared run order
    let extractors: Vec<Box<dyn Extractor>> = vec![
        Box::new(KeywordsExtractor::new(
            config.sources.keywords.clone(),
            config.sources.reserved_words.clone(),
        )),
        Box::new(OperatorsExtractor::new()),
        Box::new(TypesExtractor::new(config.sources.scalars.clone())),
        Box::new(VariablesExtractor::new(
            config.sources.semantics.clone(),
            config.semantic_expansion.lo,
            config.semantic_expansion.hi,
        )),
        Box::new(FunctionsExtractor::new(config.sources.intrinsics.clone())),
    ];

    let spec_path = PathBuf::from(&config.output.spec_path);
    let mut spec = load_spec(&spec_path);

    for extractor in &extractors {
        println!("[run] {}", extractor.name());
        let records = extractor.run(&fetcher).unwrap_or_else(|e| {
            eprintln!("Extraction error: {e}");
            process::exit(1);
        });
        records.apply(&mut spec, strategy);
    }

    save_spec(&spec_path, &spec).unwrap_or_else(|e| {
        eprintln!("Write error: {e}");
        process::exit(1);
    });
    println!("[ok] wrote {}", spec_path.display());
}
