use criterion::{Criterion, Throughput};
use libconvo::agent::{
    AgentConfig, ApiConfig, AsrConfig, LlmConfig, ProtocolSettings, TtsConfig, build_join_body,
};
use std::hint::black_box;

fn bench_config() -> AgentConfig<'static> {
    AgentConfig {
        api: ApiConfig {
            base_url: "https://api.example.com/api/conversational-ai-agent/v2/projects",
            key: "key",
            secret: "secret",
        },
        name: "bench-agent",
        channel: "bench-channel",
        token: "",
        agent_rtc_uid: "1001",
        user_id: 12345,
        llm: LlmConfig {
            url: "https://llm.example.com/v1/chat/completions",
            api_key: "llm-key",
            model: "gpt-4o-mini",
            system_message: "You are a helpful voice assistant. Keep answers short.",
            greeting: "Hello, how can I help?",
            failure_message: "Please hold on a second.",
        },
        tts: TtsConfig {
            vendor: "microsoft",
            key: "tts-key",
            region: "eastus",
            voice_name: "en-US-AndrewMultilingualNeural",
        },
        asr: AsrConfig { language: "en-US" },
        protocol: ProtocolSettings::default(),
    }
}

pub fn bench_join_body(c: &mut Criterion) {
    let config = bench_config();
    let len = build_join_body(&config).expect("document fits").len();

    let mut group = c.benchmark_group("request");
    group.throughput(Throughput::Bytes(len as u64));
    group.bench_function("build_join_body", |b| {
        b.iter(|| build_join_body(black_box(&config)).expect("document fits"))
    });
    group.finish();
}
