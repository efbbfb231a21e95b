use crate::args::Args;
use crate::error::Result;
pub use count_words_engine::config::{Config, ConfigBuilder, DEFAULT_CHUNK_SIZE};
use count_words_engine::input::Input;
use count_words_shared_kernel::{Metrics, OutputMode};

/// Engine settings and inputs built from the command line.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub inputs: Vec<Input>,
}

impl TryFrom<Args> for AppConfig {
    type Error = crate::error::AppError;

    fn try_from(args: Args) -> Result<Self> {
        let metrics = Metrics {
            lines: args.lines,
            words: args.words,
            chars: args.chars,
        }
        .or_all();

        let output_mode = if args.json {
            OutputMode::Json
        } else if args.parseable {
            OutputMode::Parseable
        } else {
            OutputMode::Human
        };

        let mut builder = ConfigBuilder::default();
        builder.metrics(metrics).output_mode(output_mode);
        if let Some(threads) = args.max_threads {
            builder.threads(threads);
        }
        if let Some(chunk_size) = args.chunk_size {
            builder.chunk_size(chunk_size);
        }
        let engine = builder
            .build()
            .map_err(count_words_engine::error::EngineError::from)?;

        let inputs = if args.files.is_empty() {
            vec![Input::Stdin]
        } else {
            args.files.into_iter().map(Input::from_arg).collect()
        };

        Ok(Self { engine, inputs })
    }
}
