//! Library-level model of the client capture-and-submit flow: one tagged
//! state instead of a pile of independent boolean flags, so impossible
//! combinations (saving and saved at once) cannot be represented. The
//! rendering surface drives transitions and issues the HTTP calls; nothing
//! in the server depends on this module.

use std::time::Duration;

use crate::data_uri::DataUri;
use crate::entities::photo::SavePhotoRequest;

/// Characters stripped from names before submission. Transport-layer
/// normalization, not a store invariant.
const UNSAFE_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// How long the UI shows the saved confirmation before auto-resetting.
pub const SAVED_RESET_DELAY: Duration = Duration::from_secs(2);

const NOT_AN_IMAGE: &str = "Please upload a valid image file.";

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureState {
    /// No file selected.
    Idle,
    /// A file is selected and previewed; the name defaults to the file stem.
    Previewing { preview: DataUri, name: String },
    /// The user is editing the name.
    Naming { preview: DataUri, name: String },
    /// Name confirmed, save available.
    ReadyToSave { preview: DataUri, name: String },
    /// Submission in flight. No cancellation; the outcome decides the
    /// next state.
    Saving { preview: DataUri, name: String },
    /// Terminal success; the UI resets to Idle after [`SAVED_RESET_DELAY`].
    Saved,
    /// The error is surfaced verbatim. The preview is retained when the
    /// failure happened during a save so the user can retry.
    Failed {
        error: String,
        retained: Option<(DataUri, String)>,
    },
}

#[derive(Debug)]
pub struct CaptureFlow {
    state: CaptureState,
}

impl CaptureFlow {
    pub fn new() -> Self {
        CaptureFlow {
            state: CaptureState::Idle,
        }
    }

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    /// File selection or camera capture. Only sources reporting an image
    /// content type are accepted; anything else fails the flow.
    pub fn select_file(&mut self, file_name: &str, content_type: &str, bytes: Vec<u8>) {
        let preview = DataUri::new(content_type, bytes);
        if !preview.is_image() {
            self.state = CaptureState::Failed {
                error: NOT_AN_IMAGE.to_string(),
                retained: None,
            };
            return;
        }

        self.state = CaptureState::Previewing {
            preview,
            name: file_stem(file_name).to_string(),
        };
    }

    /// Name edits move the flow into `Naming`. Ignored outside the
    /// previewing/naming states.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state = match self.take_state() {
            CaptureState::Previewing { preview, .. }
            | CaptureState::Naming { preview, .. }
            | CaptureState::ReadyToSave { preview, .. } => CaptureState::Naming {
                preview,
                name: name.into(),
            },
            other => other,
        };
    }

    /// Confirms the pending name. No transition when the name is blank.
    pub fn confirm_name(&mut self) {
        self.state = match self.take_state() {
            CaptureState::Previewing { preview, name }
            | CaptureState::Naming { preview, name }
                if !name.trim().is_empty() =>
            {
                CaptureState::ReadyToSave { preview, name }
            }
            other => other,
        };
    }

    /// Starts the save and yields the request to submit, with the name
    /// sanitized for transport. `None` when no save is possible from the
    /// current state.
    pub fn begin_save(&mut self) -> Option<SavePhotoRequest> {
        match self.take_state() {
            CaptureState::ReadyToSave { preview, name } => {
                let request = SavePhotoRequest {
                    photo_data_uri: preview.encode(),
                    new_name: sanitize_name(&name),
                };
                self.state = CaptureState::Saving { preview, name };
                Some(request)
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    pub fn save_succeeded(&mut self) {
        if matches!(self.state, CaptureState::Saving { .. }) {
            self.state = CaptureState::Saved;
        }
    }

    /// Records a handler rejection or thrown transport error, keeping the
    /// selection around for a retry.
    pub fn save_failed(&mut self, error: impl Into<String>) {
        self.state = match self.take_state() {
            CaptureState::Saving { preview, name } => CaptureState::Failed {
                error: error.into(),
                retained: Some((preview, name)),
            },
            other => other,
        };
    }

    /// User-initiated retry after a failed save.
    pub fn retry(&mut self) {
        self.state = match self.take_state() {
            CaptureState::Failed {
                retained: Some((preview, name)),
                ..
            } => CaptureState::ReadyToSave { preview, name },
            other => other,
        };
    }

    fn take_state(&mut self) -> CaptureState {
        std::mem::replace(&mut self.state, CaptureState::Idle)
    }

    /// Explicit cancel or the post-save timer. Dropping the state releases
    /// the held preview on every exit path back to Idle.
    pub fn reset(&mut self) {
        self.state = CaptureState::Idle;
    }
}

impl Default for CaptureFlow {
    fn default() -> Self {
        CaptureFlow::new()
    }
}

/// Replaces runs of filesystem-unsafe characters (`< > : " / \ | ? *`)
/// with a single underscore.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if UNSAFE_NAME_CHARS.contains(&c) {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// The portion of a file name before the last dot, matching how the UI
/// derives the default photo name.
fn file_stem(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(0) | None => file_name,
        Some(idx) => &file_name[..idx],
    }
}
