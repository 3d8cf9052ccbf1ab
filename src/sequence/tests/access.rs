use crate::sequence::prelude::*;
use crate::error::Error;
use super::out_of_range;

#[test]
fn nth() -> anyhow::Result<()> {
    let sequence = Sequence::from_slice(&["a", "b", "c"]);
    assert_eq!(*sequence.nth(0)?, "a");
    assert_eq!(*sequence.nth(2)?, "c");
    Ok(())
}

#[test]
fn nth_out_of_bounds() {
    for length in 1..6isize {
        let sequence = Sequence::tabulate(|i| i, length).unwrap();

        let below = sequence.nth(-1).unwrap_err();
        assert_eq!(out_of_range(&below), &Error::OutOfBounds { operation: "nth", index: -1, length: length as usize });

        let above = sequence.nth(length).unwrap_err();
        assert_eq!(out_of_range(&above), &Error::OutOfBounds { operation: "nth", index: length, length: length as usize });
    }
}

#[test]
fn to_slice_is_independent() {
    let sequence = Sequence::from_slice(&[1, 2, 3]);
    let mut copy = sequence.to_slice();
    copy[1] = 20;
    copy.clear();

    assert_eq!(sequence.to_slice(), vec![1, 2, 3]);
}

#[test]
fn length_comparisons() {
    let short = Sequence::from_slice(&[1]);
    let long = Sequence::from_slice(&[1, 2]);

    assert!(!short.length_eq(&long));
    assert!(short.length_eq(&short.clone()));
    assert_eq!(short.length_cmp(&long), Some(std::cmp::Ordering::Less));
    assert_eq!(long.length_cmp(&short), Some(std::cmp::Ordering::Greater));
}

#[test]
fn slice_style_access() {
    let sequence: Sequence<char> = "abc".chars().collect();

    assert_eq!(sequence[1], 'b');
    assert_eq!(sequence.get(2), Some(&'c'));
    assert_eq!(sequence.get(3), None);
    assert_eq!(sequence.as_slice(), &['a', 'b', 'c']);
    assert_eq!((&sequence).into_iter().collect::<String>(), "abc");
    assert_eq!(sequence.iter().count(), 3);
    assert_eq!(format!("{:?}", sequence), "['a', 'b', 'c']");
}

#[tokio::test]
async fn concurrent_readers() -> anyhow::Result<()> {
    let sequence: Sequence<i32> = (0..1000).collect();

    let handles: Vec<_> = (0..10).map(|_| {
        let sequence = sequence.clone();
        tokio::spawn(async move {
            for _ in 0..100 {
                let index = (rand::random::<u32>() % 1000) as isize;
                let fetched = sequence.nth(index).expect("index within bounds");
                assert_eq!(*fetched as isize, index);
            }
        })
    }).collect();

    let results = futures::future::join_all(handles).await;
    for result in results {
        result?;
    }

    Ok(())
}
