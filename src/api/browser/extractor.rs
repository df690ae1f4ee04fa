use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::driver::PageDriver;
use super::ExtractionError;
use crate::config::BrowserConfig;

/// Label searched for on staking pages
pub const APR_LABEL: &str = "APR";

/// Call `probe` until it yields a value or `timeout` elapses
///
/// `probe` runs at least once, then every `poll_interval`. The last sleep is
/// cut short at the deadline so the wait never overshoots `timeout` by more
/// than one probe. A `timeout` too large to represent as a deadline waits
/// indefinitely.
pub fn wait_for<T, F>(mut probe: F, timeout: Duration, poll_interval: Duration) -> Result<T, ExtractionError>
where
    F: FnMut() -> Option<T>,
{
    let deadline = Instant::now().checked_add(timeout);

    loop {
        if let Some(value) = probe() {
            return Ok(value);
        }

        let pause = match deadline {
            Some(deadline) => {
                let now = Instant::now();
                if now >= deadline {
                    return Err(ExtractionError::TimedOut(timeout));
                }
                poll_interval.min(deadline - now)
            }
            None => poll_interval,
        };
        thread::sleep(pause);
    }
}

/// Parse text such as `"12.5%"` into `12.5`
pub fn parse_apr_text(text: &str) -> Result<f64, ExtractionError> {
    let trimmed = text.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    number
        .parse::<f64>()
        .map_err(|_| ExtractionError::Parse(text.to_string()))
}

/// Open `url` and read the APR shown next to the "APR" label
///
/// Placeholders rendered before the figure (`--`, `…`, empty text) keep the
/// wait going. If the wait runs out after some text was seen, the last text
/// is reported as a `Parse` error; if nothing was ever rendered, `TimedOut`.
pub fn extract_apr<D>(driver: &mut D, url: &str, config: &BrowserConfig) -> Result<f64, ExtractionError>
where
    D: PageDriver + ?Sized,
{
    driver.open(url)?;

    let mut last_seen: Option<String> = None;
    let result = wait_for(
        || {
            let text = driver.text_after_label(APR_LABEL)?;
            let apr = parse_apr_text(&text).ok();
            last_seen = Some(text);
            apr
        },
        config.wait_timeout,
        config.poll_interval,
    );

    match (result, last_seen) {
        (Ok(apr), _) => {
            debug!("Extracted APR {}% from {}", apr, url);
            Ok(apr)
        }
        (Err(ExtractionError::TimedOut(_)), Some(text)) => Err(ExtractionError::Parse(text)),
        (Err(e), _) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakePage {
        opened: Option<String>,
        /// Number of polls before the element appears
        render_after: usize,
        polls: Cell<usize>,
        text: String,
    }

    impl FakePage {
        fn new(render_after: usize, text: &str) -> Self {
            Self {
                opened: None,
                render_after,
                polls: Cell::new(0),
                text: text.to_string(),
            }
        }
    }

    impl PageDriver for FakePage {
        fn open(&mut self, url: &str) -> Result<(), ExtractionError> {
            self.opened = Some(url.to_string());
            Ok(())
        }

        fn text_after_label(&self, label: &str) -> Option<String> {
            assert_eq!(label, APR_LABEL);
            let n = self.polls.get();
            self.polls.set(n + 1);
            (n >= self.render_after).then(|| self.text.clone())
        }
    }

    fn fast_config() -> BrowserConfig {
        BrowserConfig {
            wait_timeout: Duration::from_millis(200),
            poll_interval: Duration::from_millis(5),
        }
    }

    #[test]
    fn test_parse_apr_text() {
        assert_eq!(parse_apr_text("12.5%").unwrap(), 12.5);
        assert_eq!(parse_apr_text(" 7 % ").unwrap(), 7.0);
        assert_eq!(parse_apr_text("100").unwrap(), 100.0);
        assert!(parse_apr_text("N/A").is_err());
        assert!(parse_apr_text("12.5%%").is_err());
        assert!(parse_apr_text("").is_err());
    }

    #[test]
    fn test_wait_for_returns_once_condition_holds() {
        let mut calls = 0;
        let result = wait_for(
            || {
                calls += 1;
                (calls == 3).then_some("ready")
            },
            Duration::from_secs(1),
            Duration::from_millis(1),
        );
        assert_eq!(result.unwrap(), "ready");
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_wait_for_times_out() {
        let started = Instant::now();
        let result: Result<(), _> = wait_for(|| None, Duration::from_millis(30), Duration::from_millis(5));
        assert!(matches!(result, Err(ExtractionError::TimedOut(_))));
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_wait_for_probes_once_with_zero_timeout() {
        let mut calls = 0;
        let result = wait_for(
            || {
                calls += 1;
                Some(calls)
            },
            Duration::ZERO,
            Duration::from_millis(5),
        );
        assert_eq!(result.unwrap(), 1);
    }

    #[test]
    fn test_extract_apr_after_late_render() {
        let mut page = FakePage::new(3, "84.21%");
        let apr = extract_apr(&mut page, "https://example.org/stake", &fast_config()).unwrap();

        assert_eq!(apr, 84.21);
        assert_eq!(page.opened.as_deref(), Some("https://example.org/stake"));
        assert_eq!(page.polls.get(), 4);
    }

    #[test]
    fn test_extract_apr_missing_element() {
        let mut page = FakePage::new(usize::MAX, "unused");
        let err = extract_apr(&mut page, "https://example.org/stake", &fast_config()).unwrap_err();
        assert!(matches!(err, ExtractionError::TimedOut(t) if t == Duration::from_millis(200)));
    }

    #[test]
    fn test_extract_apr_unparseable_text() {
        let mut page = FakePage::new(0, "coming soon");
        let err = extract_apr(&mut page, "https://example.org/stake", &fast_config()).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(text) if text == "coming soon"));
        assert!(page.polls.get() > 1);
    }

    /// Shows `placeholder` for the first `placeholder_polls` polls, then `text`
    struct PlaceholderPage {
        placeholder: &'static str,
        placeholder_polls: usize,
        polls: Cell<usize>,
        text: &'static str,
    }

    impl PageDriver for PlaceholderPage {
        fn open(&mut self, _url: &str) -> Result<(), ExtractionError> {
            Ok(())
        }

        fn text_after_label(&self, _label: &str) -> Option<String> {
            let n = self.polls.get();
            self.polls.set(n + 1);
            let shown = if n < self.placeholder_polls { self.placeholder } else { self.text };
            Some(shown.to_string())
        }
    }

    #[test]
    fn test_extract_apr_waits_past_placeholders() {
        for placeholder in ["--", "…", ""] {
            let mut page = PlaceholderPage {
                placeholder,
                placeholder_polls: 2,
                polls: Cell::new(0),
                text: "84.21%",
            };
            let apr = extract_apr(&mut page, "https://example.org/stake", &fast_config()).unwrap();

            assert_eq!(apr, 84.21);
            assert_eq!(page.polls.get(), 3);
        }
    }

    #[test]
    fn test_wait_for_unrepresentable_timeout_keeps_polling() {
        let mut calls = 0;
        let result = wait_for(
            || {
                calls += 1;
                (calls == 2).then_some(calls)
            },
            Duration::from_secs(u64::MAX),
            Duration::from_millis(1),
        );
        assert_eq!(result.unwrap(), 2);
    }
}
