use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use vectorpad::input::EditorState;
use vectorpad::{Config, script, snapshot};

#[derive(Parser, Debug)]
#[command(name = "vectorpad")]
#[command(version, about = "Pointer-driven 2D vector drawing surface")]
struct Cli {
    /// Gesture script to replay (toolbar commands plus pointer events)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output PNG path (defaults to a timestamped file in the working directory)
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Skip the background fill and write a transparent PNG
    #[arg(long, action = ArgAction::SetTrue)]
    transparent: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script else {
        // No flags: show the script format
        println!("vectorpad: pointer-driven 2D vector drawing surface");
        println!();
        println!("Usage:");
        println!("  vectorpad --script FILE [--output FILE]   Replay a gesture script to a PNG");
        println!("  vectorpad --help                          Show all options");
        println!();
        println!("Script format (one command per line, '#' for comments):");
        println!("  tool <rectangle|ellipse|circle|line|polygon|text|select>");
        println!("  color <name|#rrggbb>      stroke color for new shapes");
        println!("  width <pixels>            stroke width for new shapes");
        println!("  size <10-200>             resize the selected shape");
        println!("  text <content>            text for the next text commit");
        println!("  fontsize <points>         font size for the next text commit");
        println!("  sides <count>             polygon side count");
        println!("  down|move|up <x> <y>      pointer events in canvas coordinates");
        println!("  clear                     remove every committed shape");
        return Ok(());
    };

    let config = Config::load()?;

    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    let background = (!cli.transparent).then(|| config.canvas.background.to_color());

    let mut editor = EditorState::from_config(&config);

    let source = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script from {}", script_path.display()))?;

    script::run(&source, &mut editor)
        .with_context(|| format!("Failed to replay {}", script_path.display()))?;

    log::info!(
        "Replayed {}: {} shapes committed",
        script_path.display(),
        editor.scene().len()
    );

    // A gesture left open at end-of-script still shows its preview, exactly
    // as the live canvas would mid-drag
    let preview = editor.preview_shape();
    let surface =
        snapshot::render_to_surface(editor.scene(), preview.as_ref(), width, height, background)
            .context("Failed to render scene")?;

    let output = cli.output.unwrap_or_else(snapshot::default_output_path);
    snapshot::write_png(&surface, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("Saved {}", output.display());

    Ok(())
}
