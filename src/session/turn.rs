use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::{timeout_at, Instant},
};

use crate::models::normalize_submission;

/// Collect one player's submissions until `duration` elapses or the input closes.
///
/// Lines are trimmed and uppercased; blank lines are dropped. Lines queued
/// before the turn started are not counted.
pub async fn collect_submissions(
    source: &mut mpsc::Receiver<String>,
    duration: Duration,
) -> Vec<String> {
    let stale = drain_pending(source);
    if stale > 0 {
        tracing::debug!("Discarded {} lines typed before the turn started", stale);
    }

    // Durations past the clock's range mean the turn only ends when input closes
    let deadline = Instant::now().checked_add(duration);
    if deadline.is_none() {
        tracing::warn!("Turn of {}s has no reachable deadline", duration.as_secs());
    }
    let mut responses = Vec::new();

    loop {
        let next = match deadline {
            Some(deadline) => timeout_at(deadline, source.recv()).await,
            None => Ok(source.recv().await),
        };
        match next {
            Ok(Some(line)) => {
                if let Some(word) = normalize_submission(&line) {
                    responses.push(word);
                }
            }
            Ok(None) => {
                tracing::info!("Input closed before the turn ended");
                break;
            }
            Err(_) => break,
        }
    }

    tracing::info!("Turn over with {} submissions", responses.len());
    responses
}

/// Discard lines already waiting in the channel
pub fn drain_pending(source: &mut mpsc::Receiver<String>) -> usize {
    let mut drained = 0;
    while source.try_recv().is_ok() {
        drained += 1;
    }
    drained
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_collects_until_deadline() {
        let (tx, mut rx) = mpsc::channel(16);

        let feeder = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            tx.send(" cat ".to_string()).await.unwrap();
            tx.send("".to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
            tx.send("dog".to_string()).await.unwrap();
            tokio::time::sleep(Duration::from_secs(10)).await;
            // Too late for a 5 second turn
            let _ = tx.send("late".to_string()).await;
        });

        let words = collect_submissions(&mut rx, Duration::from_secs(5)).await;
        assert_eq!(words, vec!["CAT", "DOG"]);
        feeder.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_ends_turn_early() {
        let (tx, mut rx) = mpsc::channel(16);
        let started = Instant::now();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            tx.send("bird".to_string()).await.unwrap();
        });

        let words = collect_submissions(&mut rx, Duration::from_secs(60)).await;
        assert_eq!(words, vec!["BIRD"]);
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_duration_does_not_overflow() {
        let (tx, mut rx) = mpsc::channel(16);

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            tx.send("owl".to_string()).await.unwrap();
        });

        let duration = crate::session::setup::parse_turn_duration("9223372036854775807").unwrap();
        let words = collect_submissions(&mut rx, duration).await;
        assert_eq!(words, vec!["OWL"]);
    }

    #[test]
    fn test_stale_lines_discarded() {
        tokio_test::block_on(async {
            let (tx, mut rx) = mpsc::channel(16);
            tx.send("early".to_string()).await.unwrap();
            tx.send("typing".to_string()).await.unwrap();
            drop(tx);

            let words = collect_submissions(&mut rx, Duration::from_millis(10)).await;
            assert!(words.is_empty());
        });
    }
}
