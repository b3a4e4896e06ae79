//! Activity Renderer
//!
//! Pure function from (activities, session) to a typed roster view. The view
//! is rebuilt from scratch on every refresh and carries no hidden state, so
//! identical inputs always produce identical output. Hosts draw it: the
//! browser with Leptos components, the terminal as text or through the
//! askama roster template.

use askama::Template;
use std::fmt::Write as _;

use crate::model::{Activity, ActivityCollection};
use crate::session::Session;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// One activity as it should appear on the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Negative when the server over-filled the roster
    pub spots_left: i64,
    /// Registered emails in server order
    pub participants: Vec<String>,
    /// Each participant gets a removal button
    pub can_remove: bool,
    /// The card carries its own signup form
    pub show_card_form: bool,
}

impl ActivityCard {
    fn new(name: &str, activity: &Activity, authenticated: bool) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity.participants.clone(),
            can_remove: authenticated,
            show_card_form: authenticated,
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

/// Contents of the roster container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Roster {
    Cards(Vec<ActivityCard>),
    /// The roster could not be fetched or decoded
    LoadFailed,
}

impl Roster {
    /// Cards in collection order; none when loading failed
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            Roster::Cards(cards) => cards,
            Roster::LoadFailed => &[],
        }
    }

    pub fn is_load_failed(&self) -> bool {
        matches!(self, Roster::LoadFailed)
    }

    /// Serialise through the roster template (auto-escaped)
    pub fn to_html(&self) -> Result<String, askama::Error> {
        RosterTemplate {
            cards: self.cards(),
            load_failed: self.is_load_failed(),
            load_failed_text: LOAD_FAILED_TEXT,
            no_participants_text: NO_PARTICIPANTS_TEXT,
        }
        .render()
    }

    /// Plain-text outline for terminals. Interactive affordances are skipped.
    pub fn to_text(&self) -> String {
        let cards = match self {
            Roster::Cards(cards) => cards,
            Roster::LoadFailed => return LOAD_FAILED_TEXT.to_string(),
        };

        let mut out = String::new();
        for card in cards {
            let _ = writeln!(out, "== {}", card.name);
            if !card.description.is_empty() {
                let _ = writeln!(out, "{}", card.description);
            }
            let _ = writeln!(out, "Schedule: {}", card.schedule);
            let _ = writeln!(out, "Availability: {}", card.availability());
            if card.has_participants() {
                let _ = writeln!(out, "Participants:");
                for email in &card.participants {
                    let _ = writeln!(out, "  - {}", email);
                }
            } else {
                let _ = writeln!(out, "{}", NO_PARTICIPANTS_TEXT);
            }
        }
        out.trim_end().to_string()
    }

    #[cfg(test)]
    pub(crate) fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }

    /// Removal buttons across all cards
    #[cfg(test)]
    pub(crate) fn removal_buttons(&self) -> usize {
        self.cards()
            .iter()
            .filter(|card| card.can_remove)
            .map(|card| card.participants.len())
            .sum()
    }
}

#[derive(Template)]
#[template(path = "roster.html")]
struct RosterTemplate<'a> {
    cards: &'a [ActivityCard],
    load_failed: bool,
    load_failed_text: &'a str,
    no_participants_text: &'a str,
}

/// Build the roster view for the given session
pub fn render(activities: &ActivityCollection, session: &Session) -> Roster {
    let authenticated = session.is_authenticated();
    Roster::Cards(
        activities
            .iter()
            .map(|(name, activity)| ActivityCard::new(name, activity, authenticated))
            .collect(),
    )
}
