use std::time::Duration;

use thiserror::Error;

use super::input::Console;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("{0:?} is not a whole number of seconds")]
    NotANumber(String),
    #[error("enter a positive number of seconds")]
    NotPositive,
}

pub fn parse_turn_duration(input: &str) -> Result<Duration, SetupError> {
    let input = input.trim();
    let seconds: i64 = input
        .parse()
        .map_err(|_| SetupError::NotANumber(input.to_string()))?;
    if seconds <= 0 {
        return Err(SetupError::NotPositive);
    }
    Ok(Duration::from_secs(seconds as u64))
}

pub fn is_ready(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("READY")
}

/// Ask until a valid turn length is entered; `None` if input closes first
pub async fn ask_turn_duration(console: &mut Console) -> Option<Duration> {
    loop {
        let line = console
            .prompt("How many seconds do you want each turn to last? ")
            .await?;
        match parse_turn_duration(&line) {
            Ok(duration) => return Some(duration),
            Err(e) => {
                tracing::warn!("Rejected turn duration: {}", e);
                println!("Invalid input: {e}");
            }
        }
    }
}

/// Readiness handshake: players are asked in order until both have typed READY.
///
/// Returns `false` if input closes before both are ready.
pub async fn await_ready(console: &mut Console, names: [&str; 2]) -> bool {
    let mut ready = [false; 2];

    while !ready.iter().all(|r| *r) {
        for (slot, name) in names.iter().enumerate() {
            if ready[slot] {
                continue;
            }
            let Some(line) = console
                .prompt(&format!("{name}, type 'READY' when you are ready: "))
                .await
            else {
                return false;
            };
            if is_ready(&line) {
                ready[slot] = true;
            } else {
                println!("{name} is not ready");
            }
        }
    }

    tracing::info!("Both players ready");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn console_with(lines: &[&str]) -> Console {
        let (tx, rx) = mpsc::channel(lines.len().max(1));
        for line in lines {
            tx.try_send(line.to_string()).unwrap();
        }
        Console::from_channel(rx)
    }

    #[test]
    fn test_parse_turn_duration() {
        assert_eq!(parse_turn_duration(" 30 "), Ok(Duration::from_secs(30)));
        assert_eq!(parse_turn_duration("0"), Err(SetupError::NotPositive));
        assert_eq!(parse_turn_duration("-5"), Err(SetupError::NotPositive));
        assert_eq!(
            parse_turn_duration("soon"),
            Err(SetupError::NotANumber("soon".to_string()))
        );
    }

    #[test]
    fn test_is_ready() {
        assert!(is_ready("READY"));
        assert!(is_ready(" ready\n"));
        assert!(!is_ready("not yet"));
    }

    #[tokio::test]
    async fn test_ask_turn_duration_reprompts() {
        let mut console = console_with(&["abc", "0", "45"]);
        assert_eq!(
            ask_turn_duration(&mut console).await,
            Some(Duration::from_secs(45))
        );
    }

    #[tokio::test]
    async fn test_ask_turn_duration_closed_input() {
        let mut console = console_with(&["abc"]);
        assert_eq!(ask_turn_duration(&mut console).await, None);
    }

    #[tokio::test]
    async fn test_ready_handshake_only_reasks_unready_player() {
        // P1 ready, P2 not; then only P2 is asked again
        let mut console = console_with(&["ready", "nope", "READY"]);
        assert!(await_ready(&mut console, ["P1", "P2"]).await);
        assert!(console.lines().try_recv().is_err());
    }

    #[tokio::test]
    async fn test_ready_handshake_closed_input() {
        let mut console = console_with(&["ready"]);
        assert!(!await_ready(&mut console, ["P1", "P2"]).await);
    }
}
