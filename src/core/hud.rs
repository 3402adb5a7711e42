//! HUD state over the 3D view: overlays, notices and score-event handling.
use crate::core::scores::{format_listing, ScoreEvent};

/// How long a notice stays on screen, in seconds.
pub const NOTICE_SECONDS: f32 = 3.0;
/// Listing lines drawn at most (header plus top entries); a longer
/// leaderboard would run off the bottom of the window.
pub const MAX_LISTING_LINES: usize = 11;

/// What sits on top of the 3D view, if anything.
#[derive(Debug, Default)]
pub enum Overlay {
    #[default]
    None,
    /// Typing a name for a high-score submission.
    NameEntry(String),
    /// Fetched high-score listing, dismissed with H.
    Listing(String),
}

/// Overlay and notice state, fed by input from the loop and by score-event
/// completions. A listing that arrives while the name prompt is open is
/// held back until the prompt closes, so it never eats typed input.
#[derive(Default)]
pub struct Hud {
    pub overlay: Overlay,
    pub notice: Option<(String, f32)>,
    pending_listing: Option<String>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_prompt(&mut self) {
        self.overlay = Overlay::NameEntry(String::new());
    }

    /// Closes the current overlay; a listing held back during name entry
    /// is shown now.
    pub fn close_overlay(&mut self) {
        self.overlay = match self.pending_listing.take() {
            Some(listing) => Overlay::Listing(listing),
            None => Overlay::None,
        };
    }

    pub fn handle_event(&mut self, event: ScoreEvent) {
        match event {
            ScoreEvent::Submitted(Ok(())) => {
                self.set_notice("High score submitted!".into());
            }
            ScoreEvent::Submitted(Err(err)) => {
                self.set_notice(format!("Submission failed: {err}"));
            }
            ScoreEvent::Fetched(Ok(entries)) => {
                let listing = format_listing(&entries);
                if matches!(self.overlay, Overlay::NameEntry(_)) {
                    self.pending_listing = Some(listing);
                } else {
                    self.overlay = Overlay::Listing(listing);
                }
            }
            ScoreEvent::Fetched(Err(err)) => {
                self.set_notice(format!("Fetch failed: {err}"));
            }
        }
    }

    fn set_notice(&mut self, text: String) {
        self.notice = Some((text, NOTICE_SECONDS));
    }

    /// Ages the notice; expired notices disappear.
    pub fn tick(&mut self, dt: f32) {
        if let Some((_, left)) = &mut self.notice {
            *left -= dt;
            if *left <= 0.0 {
                self.notice = None;
            }
        }
    }
}

/// The lines of a listing that fit the window.
pub fn visible_lines(listing: &str) -> impl Iterator<Item = &str> {
    listing.lines().take(MAX_LISTING_LINES)
}
