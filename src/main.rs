use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use text2midi::{
    Args, FONT_SIZE_PX, Options, TrueTypeFont, generate_midi, parse_render_mode, render_events,
};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = Options {
        font_path: args.font.clone(),
        render_mode: parse_render_mode(&args.render_mode),
    };

    debug!("Options: {:?}", options);

    if args.dry_run {
        let font = TrueTypeFont::load(&options.font_path, FONT_SIZE_PX)?;
        let events = render_events(&args.text, &font, options.render_mode)?;

        let notes = events.iter().filter(|ev| ev.is_note_on()).count();
        info!(
            "Previewing at most {} of {} events ({} notes)..!",
            args.dry_run_max,
            events.len(),
            notes
        );
        for (i, ev) in events.iter().take(args.dry_run_max).enumerate() {
            info!("Event {}: {:?}", i, ev);
        }

        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    info!("Rendering '{}'...", args.text);
    generate_midi(&args.text, &args.out_file, &options)
        .with_context(|| format!("Failed to write {}", args.out_file.display()))?;
    info!("Done, exiting..!");

    Ok(())
}
