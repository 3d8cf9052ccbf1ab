use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
use std::time::Duration;

use crate::sequence::prelude::*;

fn expected(count: i32) -> String {
    (0..count).map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn render_is_ordered_under_random_delays() {
    let sequence: Sequence<i32> = (0..1000).collect();

    for _ in 0..3 {
        let rendered = sequence.render(|n: &i32| {
            let delay = rand::random::<u64>() % 500;
            std::thread::sleep(Duration::from_micros(delay));
            n.to_string()
        }).await;

        assert_eq!(rendered, expected(1000));
    }
}

#[tokio::test]
async fn render_empty_spawns_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let rendered = Sequence::<i32>::empty().render(move |n: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        n.to_string()
    }).await;

    assert_eq!(rendered, "");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn render_calls_converter_once_per_element() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let sequence = Sequence::from_slice(&["alpha", "beta", "gamma"]);
    let rendered = sequence.render(move |word: &&str| {
        counter.fetch_add(1, Ordering::SeqCst);
        word.to_uppercase()
    }).await;

    assert_eq!(rendered, "ALPHA, BETA, GAMMA");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn render_singleton_has_no_separator() {
    let rendered = Sequence::singleton(42).render(|n: &i32| n.to_string()).await;
    assert_eq!(rendered, "42");
}

#[tokio::test]
async fn render_with_separator() {
    let sequence = Sequence::from_slice(&[Tuple::new(1, 'a'), Tuple::new(2, 'b')]);
    let configuration = RenderConfiguration::default().with_separator(" | ");

    let rendered = sequence.render_with(|tuple: &Tuple<i32, char>| format!("({}, {})", tuple.a(), tuple.b()), &configuration).await;
    assert_eq!(rendered, "(1, a) | (2, b)");
}

#[tokio::test]
async fn render_outlives_the_sequence_handle() {
    let future = {
        let sequence: Sequence<i32> = (0..10).collect();
        sequence.render(|n: &i32| n.to_string())
    };

    assert_eq!(future.await, expected(10));
}

#[tokio::test]
#[should_panic(expected = "cannot render 7")]
async fn render_propagates_converter_panics() {
    let sequence: Sequence<i32> = (0..10).collect();
    let _ = sequence.render(|n: &i32| {
        if *n == 7 {
            panic!("cannot render {}", n);
        }
        n.to_string()
    }).await;
}

#[tokio::test]
async fn concurrent_renders_of_one_sequence() -> anyhow::Result<()> {
    let sequence: Sequence<i32> = (0..100).collect();

    let handles: Vec<_> = (0..8).map(|_| {
        let sequence = sequence.clone();
        tokio::spawn(async move {
            sequence.render(|n: &i32| {
                std::thread::sleep(Duration::from_micros(rand::random::<u64>() % 100));
                n.to_string()
            }).await
        })
    }).collect();

    let results = futures::future::join_all(handles).await;
    for result in results {
        assert_eq!(result?, expected(100));
    }

    Ok(())
}

#[test]
fn renderer_blocking() -> anyhow::Result<()> {
    let renderer = Renderer::new(RenderConfiguration::default().with_max_blocking_threads(16))?;
    let sequence: Sequence<i32> = (0..1000).collect();

    let rendered = renderer.render(&sequence, |n: &i32| {
        std::thread::sleep(Duration::from_micros(rand::random::<u64>() % 200));
        n.to_string()
    });

    assert_eq!(rendered, expected(1000));
    assert_eq!(renderer.render(&Sequence::<i32>::empty(), |n: &i32| n.to_string()), "");
    Ok(())
}
