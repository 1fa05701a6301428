//! JSON scene loading.
//!
//! Scene files are plain JSON plus whole-line comments: any line whose first
//! non-blank characters are `//` or `#` is ignored. Comments are blanked
//! with spaces rather than removed so parse errors keep accurate line and
//! column numbers.

use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::{Scene, SceneResult};

fn comment_regex() -> &'static Regex {
    static COMMENT: OnceLock<Regex> = OnceLock::new();
    COMMENT.get_or_init(|| Regex::new(r"(?m)^[ \t]*(//|#).*$").expect("comment pattern is valid"))
}

/// Replace every whole-line comment with spaces of the same length.
pub fn filter_comments(raw: &str) -> Cow<'_, str> {
    comment_regex().replace_all(raw, |caps: &regex::Captures<'_>| " ".repeat(caps[0].len()))
}

/// Load a scene file. The returned scene still needs `initialize`.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let scene = load_scene_from_str(&raw)?;
    log::info!(
        "Loaded {}: {} planes, {} boxes, {} lights",
        path.display(),
        scene.planes.len(),
        scene.boxes.len(),
        scene.lights.len()
    );
    Ok(scene)
}

/// Parse a scene from JSON text.
pub fn load_scene_from_str(raw: &str) -> SceneResult<Scene> {
    let filtered = filter_comments(raw);
    Ok(serde_json::from_str(&filtered)?)
}
