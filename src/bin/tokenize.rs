// SPDX-License-Identifier: MIT OR Apache-2.0

//! Run `str:tokenize` over lines of text.
//!
//! Each input line becomes one event of `inputStream (str string)`; every
//! token the processor emits is printed on its own line, or as a JSON event
//! with `--json`.
//!
//! ```bash
//! printf 'Android,Windows8,iOS\n' | cargo run --bin tokenize -- --regex ,
//! ```

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use clap::Parser;

use eventflux_string::core::config::{
    load_toml_config, ConfigReader, EventFluxAppContext, EventFluxContext, EventFluxQueryContext,
};
use eventflux_string::core::event::event::{to_stream_event_chunk, Event};
use eventflux_string::core::event::stream::MetaStreamEvent;
use eventflux_string::core::event::value::AttributeValue;
use eventflux_string::core::exception::{EventFluxError, EventFluxResult};
use eventflux_string::core::executor::{ExpressionArgument, VariableExpressionExecutor};
use eventflux_string::core::query::processor::stream::function::TOKENIZE_QUALIFIED_NAME;
use eventflux_string::core::query::{CollectingProcessor, Processor};
use eventflux_string::core::StreamProcessorRuntime;
use eventflux_string::query_api::definition::{attribute::Type as AttrType, StreamDefinition};

#[derive(Parser, Debug)]
#[command(about = "Split lines of text into tokens with str:tokenize", author, version)]
struct Cli {
    /// Input file, one event per line. Reads stdin when omitted
    input: Option<PathBuf>,

    /// Delimiter regular expression (default: `regex` from the config, else ",")
    #[arg(long, short = 'r')]
    regex: Option<String>,

    /// Emit each distinct token of a line once
    #[arg(long, short = 'd')]
    distinct: bool,

    /// TOML configuration file with an [extensions."str:tokenize"] section
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Print emitted events as JSON instead of bare tokens
    #[arg(long)]
    json: bool,
}

fn main() {
    // Initialize logging from RUST_LOG environment variable
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> EventFluxResult<()> {
    let context = Arc::new(EventFluxContext::new());
    if let Some(ref config_path) = cli.config {
        context.set_extension_configs(load_toml_config(config_path)?);
    }

    let reader = context.get_config_reader(TOKENIZE_QUALIFIED_NAME);
    let regex = cli
        .regex
        .unwrap_or_else(|| reader.read_config("regex", ","));
    let distinct = cli.distinct
        || reader
            .read_config("distinct", "false")
            .parse::<bool>()
            .map_err(|e| EventFluxError::configuration(format!("Invalid 'distinct': {e}")))?;

    let app_ctx = Arc::new(EventFluxAppContext::new(context, "tokenize".to_string()));
    let query_ctx = Arc::new(EventFluxQueryContext::new(app_ctx, "query1".to_string()));

    let input_definition = Arc::new(
        StreamDefinition::new("inputStream".to_string())
            .attribute("str".to_string(), AttrType::STRING),
    );
    let input_meta = MetaStreamEvent::new_for_single_input(Arc::clone(&input_definition));
    let source = VariableExpressionExecutor::for_attribute(&input_meta, "str")
        .ok_or_else(|| EventFluxError::app_creation("inputStream has no attribute 'str'"))?;
    let arguments = vec![
        ExpressionArgument::dynamic(source),
        ExpressionArgument::constant(AttributeValue::from(regex), AttrType::STRING),
        ExpressionArgument::constant(AttributeValue::Bool(distinct), AttrType::BOOL),
    ];

    let mut runtime = StreamProcessorRuntime::for_extension(
        TOKENIZE_QUALIFIED_NAME,
        input_definition,
        arguments,
        Arc::clone(&query_ctx),
    )?;
    let collector =
        CollectingProcessor::new(query_ctx.get_eventflux_app_context(), Arc::clone(&query_ctx));
    let collected = collector.chunks_handle();
    runtime.set_next_processor(Some(Arc::new(Mutex::new(collector))));

    let text = match cli.input {
        Some(ref path) => fs::read_to_string(path).map_err(|e| {
            EventFluxError::runtime(format!("Failed to read {}: {e}", path.display()))
        })?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| EventFluxError::runtime(format!("Failed to read stdin: {e}")))?;
            buf
        }
    };
    let events: Vec<Event> = text
        .lines()
        .enumerate()
        .map(|(i, line)| Event::new_with_data(i as i64, vec![AttributeValue::from(line)]))
        .collect();

    runtime.start();
    runtime.process(to_stream_event_chunk(&events))?;
    runtime.stop();

    let chunks = collected
        .lock()
        .map_err(|_| EventFluxError::runtime("collector lock poisoned"))?;
    let mut out = BufWriter::new(io::stdout().lock());
    for event in chunks.iter().flatten() {
        let line = if cli.json {
            serde_json::to_string(event)
                .map_err(|e| EventFluxError::runtime(format!("Failed to encode event: {e}")))?
        } else {
            event
                .get_data()
                .last()
                .map(ToString::to_string)
                .unwrap_or_default()
        };
        writeln!(out, "{line}")
            .map_err(|e| EventFluxError::runtime(format!("Failed to write output: {e}")))?;
    }
    out.flush()
        .map_err(|e| EventFluxError::runtime(format!("Failed to write output: {e}")))
}
