use crate::RenderMode;
use log::info;

pub fn parse_render_mode(s: &str) -> RenderMode {
    match s.to_lowercase().as_str() {
        "b" | "binary" | "mono" => RenderMode::Binary,
        "a" | "aa" | "antialiased" | "antialias" | "gray" => RenderMode::Antialiased,
        other => {
            info!("Unknown render mode '{}', defaulting to `binary`..!", other);
            RenderMode::Binary
        }
    }
}
