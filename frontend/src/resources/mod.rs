//! Per-resource wiring for the generic resource manager: one module per
//! admin-managed collection, each defining the typed draft behind its form
//! and the `ManagedResource` implementation on the contract model.

pub mod banner;
pub mod booking;
pub mod contact;
pub mod practice_area;
pub mod team;
pub mod term;
pub mod vacancy;

use crate::components::manager::ResourceDraft;

/// Draft for read-only collections (contact messages, bookings): the
/// manager never opens a form for them, but the trait still needs a shape.
#[derive(Clone, PartialEq, Default)]
pub struct NoDraft;

impl ResourceDraft for NoDraft {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    fn body(&self) -> serde_json::Value {
        serde_json::json!({})
    }
}

/// Shortens long text for a list cell.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (count, ch) in text.chars().enumerate() {
        if count >= max_chars {
            out.push('…');
            break;
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::excerpt;

    #[test]
    fn excerpt_truncates_on_char_boundaries() {
        assert_eq!(excerpt("short", 10), "short");
        assert_eq!(excerpt("abcdef", 3), "abc…");
        assert_eq!(excerpt("héllo wörld", 5), "héllo…");
    }
}
