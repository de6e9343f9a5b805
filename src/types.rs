// Request/response shapes for the site's intake and status endpoints
// None of these outlive a single request.

use serde::Serialize;

/// Sentiment reactions accepted by the feedback widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Love,
    Confused,
    Sad,
}

impl Reaction {
    /// Parse a reaction from its widget symbol
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "⚡" => Some(Self::Love),
            "😕" => Some(Self::Confused),
            "😟" => Some(Self::Sad),
            _ => None,
        }
    }

    /// The symbol rendered in the widget
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Love => "⚡",
            Self::Confused => "😕",
            Self::Sad => "😟",
        }
    }
}

/// Body of `POST /api/feedback` after validation
#[derive(Debug, Clone)]
pub struct FeedbackSubmission {
    pub reaction: Reaction,
    pub comment: Option<String>,
}

/// Acknowledgement returned for accepted feedback
#[derive(Debug, Serialize)]
pub struct FeedbackAck {
    pub success: bool,
    pub message: String,
    pub reaction: String,
}

/// Fields of `POST /quote` after validation
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: Option<String>,
}

/// Dispatch board snapshot rendered by `GET /api/dispatch-status`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispatchStatusSnapshot {
    pub technicians_available: u32,
    pub avg_response_time_hours: f64,
    pub current_calls: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reaction_symbols_round_trip() {
        for reaction in [Reaction::Love, Reaction::Confused, Reaction::Sad] {
            assert_eq!(Reaction::from_symbol(reaction.symbol()), Some(reaction));
        }
    }

    #[test]
    fn test_unknown_symbol_rejected() {
        assert_eq!(Reaction::from_symbol("👍"), None);
        assert_eq!(Reaction::from_symbol(""), None);
        assert_eq!(Reaction::from_symbol("love"), None);
    }
}
