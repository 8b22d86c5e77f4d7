use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// The play request was refused, e.g. by the autoplay policy.
    #[error("play request rejected: {0}")]
    Rejected(String),
    /// The media element could not start at all.
    #[error("audio unavailable: {0}")]
    Unavailable(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
}

/// Play/pause state of the background track.
///
/// Pausing is applied immediately and cannot fail. Playing is only recorded
/// once the asynchronous start settles successfully.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Playback {
    playing: bool,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn toggle(&mut self) -> ToggleAction {
        if self.playing {
            self.playing = false;
            ToggleAction::Pause
        } else {
            ToggleAction::Play
        }
    }

    pub fn settle_play(&mut self, result: Result<(), PlaybackError>) {
        match result {
            Ok(()) => self.playing = true,
            Err(e) => {
                log::error!("[audio] playback error: {}", e);
                self.playing = false;
            }
        }
    }

    /// Button tooltip for the current state.
    pub fn button_title(&self) -> &'static str {
        if self.playing {
            "Pause music"
        } else {
            "Play music"
        }
    }
}
