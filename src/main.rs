use statecraft::{ConcreteState, Context};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut context = Context::new(ConcreteState::ConcreteStateA);
    context.request1();
    context.request2();

    for line in context.take_transcript() {
        println!("{line}");
    }
}
