use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use social_analyze::logging::{init_tracing, TracingConfig};
use social_analyze::{analyze_corpus, load_corpus, AnalysisConfig, TextResources, TopicConfig};

#[derive(Parser, Debug)]
#[command(version, about = "Text analytics for social media posts", long_about = None)]
struct Args {
    #[clap(long, default_value = "data/raw/socialmediadataset.csv")]
    data_path: PathBuf,
    #[clap(long, default_value = "analysis_output")]
    output_dir: PathBuf,
    #[clap(long, default_value_t = 5)]
    num_topics: usize,
    #[clap(long, default_value_t = 42, help = "Seed for the topic model")]
    seed: u64,
    #[clap(long, default_value_t = 0.95, help = "Drop terms found in more than this fraction of documents")]
    max_df: f64,
    #[clap(long, default_value_t = 2, help = "Drop terms found in fewer documents than this")]
    min_df: usize,
    #[clap(long, default_value_t = 10)]
    max_iter: usize,
    #[clap(long, help = "Preprocess documents on all cores")]
    parallel: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(TracingConfig::default());

    let mut corpus = match load_corpus(&args.data_path) {
        Ok(corpus) => corpus,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let config = AnalysisConfig {
        topics: TopicConfig::default()
            .with_num_topics(args.num_topics)
            .with_seed(args.seed)
            .with_document_frequency(args.min_df, args.max_df)
            .with_max_iter(args.max_iter),
        parallel: args.parallel,
        ..Default::default()
    };

    let report = analyze_corpus(&mut corpus, &config, TextResources::english_shared());
    report.print_summary();

    if let Err(e) = report.write_json(&args.output_dir) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
