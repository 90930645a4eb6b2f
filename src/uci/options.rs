use log::{debug, warn};

use crate::engine::{EngineController, EngineOptions, MAX_DEPTH, MIN_DEPTH};

pub const ENGINE_NAME: &str = "chessbot";
pub const ENGINE_AUTHOR: &str = "the chessbot developers";

/// Reply to `uci`: identification, supported options, then `uciok`.
pub fn print_uci_info(options: &EngineOptions) {
    println!("id name {ENGINE_NAME}");
    println!("id author {ENGINE_AUTHOR}");
    println!(
        "option name Depth type spin default {} min {MIN_DEPTH} max {MAX_DEPTH}",
        options.depth
    );
    println!("uciok");
}

/// Apply a `setoption` command. Unknown options and unparsable values are
/// logged and ignored.
pub fn apply_setoption(controller: &mut EngineController, name: &str, value: Option<&str>) {
    let normalized = name.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "depth" => match value.and_then(|v| v.trim().parse::<u32>().ok()) {
            Some(depth) => {
                controller.set_depth(depth);
            }
            None => warn!("invalid value {value:?} for option Depth"),
        },
        _ => debug!("ignoring unknown option '{name}'"),
    }
}
