// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tokenize Benchmark
//!
//! Measures the split iterator on its own and the full stream processor path
//! (clone, populate, forward) for short and long inputs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use eventflux_string::core::config::{EventFluxAppContext, EventFluxQueryContext};
use eventflux_string::core::event::event::{to_stream_event_chunk, Event};
use eventflux_string::core::event::value::AttributeValue;
use eventflux_string::core::executor::{ExpressionArgument, VariableExpressionExecutor};
use eventflux_string::core::query::processor::stream::Tokens;
use eventflux_string::core::query::{CollectingProcessor, Processor};
use eventflux_string::core::util::eventflux_constants::OUTPUT_DATA_INDEX;
use eventflux_string::core::StreamProcessorRuntime;
use eventflux_string::query_api::definition::attribute::Type as AttrType;
use eventflux_string::query_api::definition::StreamDefinition;
use regex::Regex;
use std::sync::{Arc, Mutex};

fn csv_line(tokens: usize) -> String {
    (0..tokens)
        .map(|i| format!("token{}", i % 17))
        .collect::<Vec<_>>()
        .join(",")
}

fn bench_split(c: &mut Criterion) {
    let regex = Regex::new(",").unwrap();
    let mut group = c.benchmark_group("tokens");
    for size in [8usize, 128, 2048] {
        let line = csv_line(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &line, |b, line| {
            b.iter(|| Tokens::new(&regex, black_box(line)).count())
        });
        group.bench_with_input(BenchmarkId::new("split_distinct", size), &line, |b, line| {
            b.iter(|| Tokens::new(&regex, black_box(line)).distinct().count())
        });
    }
    group.finish();
}

fn bench_processor(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();

    let app_ctx = Arc::new(EventFluxAppContext::default_for_testing());
    let query_ctx = Arc::new(EventFluxQueryContext::new(
        Arc::clone(&app_ctx),
        "bench".to_string(),
    ));
    let input = Arc::new(
        StreamDefinition::new("inputStream".to_string())
            .attribute("str".to_string(), AttrType::STRING),
    );
    let arguments = vec![
        ExpressionArgument::dynamic(VariableExpressionExecutor::new(
            [0, 0, OUTPUT_DATA_INDEX as i32, 0],
            AttrType::STRING,
            "str".to_string(),
        )),
        ExpressionArgument::constant(AttributeValue::from(","), AttrType::STRING),
    ];
    let mut runtime =
        StreamProcessorRuntime::for_extension("str:tokenize", input, arguments, Arc::clone(&query_ctx))
            .unwrap();
    let sink = CollectingProcessor::new(Arc::clone(&app_ctx), query_ctx);
    let collected = sink.chunks_handle();
    runtime.set_next_processor(Some(Arc::new(Mutex::new(sink))));

    let mut group = c.benchmark_group("str_tokenize");
    for size in [8usize, 128] {
        let events: Vec<Event> = (0..64)
            .map(|i| Event::new_with_data(i, vec![AttributeValue::from(csv_line(size))]))
            .collect();
        group.throughput(Throughput::Elements((64 * size) as u64));
        group.bench_with_input(BenchmarkId::new("chunk_of_64", size), &events, |b, events| {
            b.iter(|| {
                runtime.process(to_stream_event_chunk(black_box(events))).unwrap();
                collected.lock().unwrap().clear();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_split, bench_processor);
criterion_main!(benches);
