use std::sync::OnceLock;

use rand::Rng;
use regex::{Captures, Regex};
use tracing::debug;

use super::catalog::fake_text;

/// Renders faker-style templates such as `{{name.firstName}} {{name.lastName}}`.
///
/// Each placeholder is replaced by fresh fake text drawn from `rng`, so two
/// renders of the same template normally differ. Placeholders that name an
/// unknown id are left verbatim.
pub struct FakeText;

impl FakeText {
    pub fn render<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
        let Some(pattern) = placeholder_pattern() else {
            return template.to_string();
        };
        pattern
            .replace_all(template, |caps: &Captures<'_>| {
                match fake_text(&caps[1], &caps[2], &mut *rng) {
                    Some(text) => text,
                    None => {
                        debug!(placeholder = &caps[0], "unknown template placeholder");
                        caps[0].to_string()
                    }
                }
            })
            .into_owned()
    }

    pub fn list_ids() -> &'static [&'static str] {
        super::ALL_IDS
    }
}

fn placeholder_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| {
            Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").ok()
        })
        .as_ref()
}
