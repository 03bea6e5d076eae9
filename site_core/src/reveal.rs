//! # Scroll Reveal
//!
//! One-shot reveal for `[data-aos]` elements. Once an element has been seen
//! it stays revealed, whatever the viewport does afterwards.

/// Attribute marking an element for reveal
pub const REVEAL_ATTRIBUTE: &str = "data-aos";

/// Attribute holding the stagger delay in milliseconds
pub const DELAY_ATTRIBUTE: &str = "data-delay";

/// Read a `data-delay` value in milliseconds, fractions allowed.
/// Missing, unparseable, negative or non-finite means no delay.
///
/// ```
/// use site_core::reveal::parse_delay;
///
/// assert_eq!(parse_delay(Some("200")), 200.0);
/// assert_eq!(parse_delay(Some("150.5")), 150.5);
/// assert_eq!(parse_delay(Some("soon")), 0.0);
/// assert_eq!(parse_delay(None), 0.0);
/// ```
pub fn parse_delay(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|delay| delay.is_finite() && *delay >= 0.0)
        .unwrap_or(0.0)
}

/// What to do to an element on its reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealAction {
    /// `transition-delay` value, only when non-zero
    pub transition_delay: Option<String>,
}

/// Reveal state of one observed element
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: bool,
    delay_ms: f64,
}

impl RevealState {
    pub fn new(delay_ms: f64) -> Self {
        RevealState {
            revealed: false,
            delay_ms,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one intersection report.
    ///
    /// Returns an action the first time the element intersects and `None`
    /// on every later report, intersecting or not.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<RevealAction> {
        if self.revealed || !is_intersecting {
            return None;
        }
        self.revealed = true;
        Some(RevealAction {
            transition_delay: (self.delay_ms > 0.0).then(|| format!("{}ms", self.delay_ms)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_revealed_until_intersecting() {
        let mut state = RevealState::new(0.0);
        assert_eq!(state.on_intersection(false), None);
        assert!(!state.is_revealed());
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut state = RevealState::new(0.0);
        assert_eq!(
            state.on_intersection(true),
            Some(RevealAction { transition_delay: None })
        );
        assert!(state.is_revealed());
        // Scrolling away does not un-reveal
        assert_eq!(state.on_intersection(false), None);
        assert!(state.is_revealed());
        assert_eq!(state.on_intersection(true), None);
    }

    #[test]
    fn test_delay_applied() {
        let mut state = RevealState::new(parse_delay(Some("300")));
        let action = state.on_intersection(true).unwrap();
        assert_eq!(action.transition_delay.as_deref(), Some("300ms"));
    }

    #[test]
    fn test_parse_delay_whitespace() {
        assert_eq!(parse_delay(Some(" 150 ")), 150.0);
        assert_eq!(parse_delay(Some("-5")), 0.0);
        assert_eq!(parse_delay(Some("inf")), 0.0);
        assert_eq!(parse_delay(Some("NaN")), 0.0);
    }

    #[test]
    fn test_fractional_delay_kept() {
        let mut state = RevealState::new(parse_delay(Some("150.5")));
        let action = state.on_intersection(true).unwrap();
        assert_eq!(action.transition_delay.as_deref(), Some("150.5ms"));
    }
}
