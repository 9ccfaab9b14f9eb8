pub const KONAMI_SEQUENCE: &str =
    "ArrowUpArrowUpArrowDownArrowDownArrowLeftArrowRightArrowLeftArrowRightKeyBKeyA";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Next,
    Previous,
}

/// Maps a `KeyboardEvent.key` value to a section move.
pub fn key_intent(key: &str) -> Option<KeyIntent> {
    match key {
        "ArrowDown" | " " => Some(KeyIntent::Next),
        "ArrowUp" => Some(KeyIntent::Previous),
        _ => None,
    }
}

/// Rolling buffer of recent `KeyboardEvent.code` values, capped at the
/// length of [`KONAMI_SEQUENCE`].
#[derive(Debug, Default, Clone)]
pub struct KeyBuffer {
    recent: String,
}

impl KeyBuffer {
    /// Appends `code` and reports whether the buffer now spells the
    /// sequence. A match clears the buffer.
    pub fn push(&mut self, code: &str) -> bool {
        self.recent.push_str(code);

        let limit = KONAMI_SEQUENCE.len();
        if self.recent.len() > limit {
            let mut cut = self.recent.len() - limit;
            while !self.recent.is_char_boundary(cut) {
                cut += 1;
            }
            self.recent.drain(..cut);
        }

        if self.recent == KONAMI_SEQUENCE {
            self.recent.clear();
            return true;
        }
        false
    }
}
