use std::sync::{Arc, Mutex};

use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::sequence::prelude::*;

fn install() {
    // Another test may have installed it already.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Message(String);

impl tracing::field::Visit for Message {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

/// Keeps the message of every event it sees.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl <S: tracing::Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &tracing::Event<'_>, _: Context<'_, S>) {
        let mut message = Message::default();
        event.record(&mut message);
        self.0.lock().unwrap().push(message.0);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn operations_run_under_global_subscriber() -> anyhow::Result<()> {
    install();

    let sequence = Sequence::from_slice(&[1, 2, 3]);
    let error = sequence.nth(3).unwrap_err();
    assert_eq!(error.to_string(), crate::error::Error::OutOfBounds { operation: "nth", index: 3, length: 3 }.to_string());

    assert_eq!(sequence.render(|element: &i32| element.to_string()).await, "1, 2, 3");
    Ok(())
}

#[test]
fn rejected_arguments_are_logged() {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());

    tracing::subscriber::with_default(subscriber, || {
        let sequence = Sequence::from_slice(&[1, 2, 3]);
        assert!(sequence.nth(-1).is_err());
        assert!(sequence.subseq(2, 1).is_err());
        assert!(Sequence::tabulate(|i| i, -4).is_err());
        assert!(sequence.nth(1).is_ok());
    });

    let messages = recorder.0.lock().unwrap().clone();
    assert_eq!(messages, vec!["index out of bounds", "invalid range", "negative length"]);
}
