use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use postframe::{
    ColorField, ControlEvent, EditorPatch, EditorState, EditorStore, Exporter, FontFamily,
    ImageSlot, OVERLAY_DIRECTIONS, OVERLAY_PRESETS, OverlayDirection, OverlayPreset,
    SvgRasterizer, SystemClock, TEMPLATES, TemplateKind, TextField, build_overlay_gradient,
    submit_upload_file, to_svg,
};

#[derive(Parser, Debug)]
#[command(name = "postframe", version, about = "Render square social-media posts")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the active template and export a PNG.
    Render(RenderArgs),
    /// Print the resulting editor state as JSON.
    State(EditArgs),
    /// Print the CSS overlay gradient for the resulting state.
    Gradient(EditArgs),
    /// Print the template, preset, direction and font tables.
    List,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    edit: EditArgs,

    /// Directory that receives `post-<unix-ms>.png`.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Exact output path (overrides --out-dir and the generated name).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Device scale.
    #[arg(long, default_value_t = postframe::EXPORT_SCALE)]
    scale: f32,

    /// Also write the lowered SVG here.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Extra directory of .ttf/.otf/.ttc fonts.
    #[arg(long)]
    fonts_dir: Option<PathBuf>,
}

/// Inputs that build the editor state, applied in the order listed.
#[derive(Args, Debug)]
struct EditArgs {
    /// Full editor state JSON to start from (defaults otherwise).
    #[arg(long)]
    state: Option<PathBuf>,

    /// Patch JSON files applied in order.
    #[arg(long = "patch")]
    patches: Vec<PathBuf>,

    /// Template id.
    #[arg(long, value_parser = parse_template)]
    template: Option<TemplateKind>,

    /// Overlay preset id (applied before --overlay-color/--opacity).
    #[arg(long, value_parser = parse_preset)]
    preset: Option<&'static OverlayPreset>,

    /// Overlay color.
    #[arg(long)]
    overlay_color: Option<String>,

    /// Overlay opacity (clamped to 0..=1).
    #[arg(long)]
    opacity: Option<f64>,

    /// Overlay direction id.
    #[arg(long, value_parser = parse_direction)]
    direction: Option<&'static OverlayDirection>,

    /// Headline text.
    #[arg(long)]
    headline: Option<String>,

    /// Body text.
    #[arg(long)]
    body: Option<String>,

    /// Footer/brand text.
    #[arg(long)]
    footer: Option<String>,

    /// Headline color.
    #[arg(long)]
    headline_color: Option<String>,

    /// Body color.
    #[arg(long)]
    body_color: Option<String>,

    /// Footer color.
    #[arg(long)]
    footer_color: Option<String>,

    /// Accent color.
    #[arg(long)]
    accent_color: Option<String>,

    /// Headline font name (e.g. "Bebas Neue").
    #[arg(long, value_parser = parse_font)]
    headline_font: Option<FontFamily>,

    /// Body font name.
    #[arg(long, value_parser = parse_font)]
    body_font: Option<FontFamily>,

    /// Footer font name.
    #[arg(long, value_parser = parse_font)]
    footer_font: Option<FontFamily>,

    /// Date badge text.
    #[arg(long)]
    date: Option<String>,

    /// Photo file to upload.
    #[arg(long, conflicts_with = "no_photo")]
    photo: Option<PathBuf>,

    /// Logo file to upload.
    #[arg(long, conflicts_with = "no_logo")]
    logo: Option<PathBuf>,

    /// Remove the photo.
    #[arg(long)]
    no_photo: bool,

    /// Remove the logo.
    #[arg(long)]
    no_logo: bool,
}

impl EditArgs {
    fn events(&self) -> Vec<ControlEvent> {
        let mut events = Vec::new();

        if let Some(kind) = self.template {
            events.push(ControlEvent::SelectTemplate(kind));
        }
        if let Some(preset) = self.preset {
            events.push(ControlEvent::ApplyPreset(preset));
        }
        if let Some(color) = &self.overlay_color {
            events.push(ControlEvent::PickOverlayColor(color.clone()));
        }
        if let Some(opacity) = self.opacity {
            events.push(ControlEvent::SetOverlayOpacity(opacity));
        }
        if let Some(dir) = self.direction {
            events.push(ControlEvent::SetOverlayDirection(dir));
        }

        for (field, value) in [
            (TextField::Headline, &self.headline),
            (TextField::Body, &self.body),
            (TextField::Footer, &self.footer),
        ] {
            if let Some(value) = value {
                events.push(ControlEvent::EditText {
                    field,
                    value: value.clone(),
                });
            }
        }
        for (field, value) in [
            (ColorField::Headline, &self.headline_color),
            (ColorField::Body, &self.body_color),
            (ColorField::Footer, &self.footer_color),
            (ColorField::Accent, &self.accent_color),
        ] {
            if let Some(value) = value {
                events.push(ControlEvent::PickColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        for (field, font) in [
            (TextField::Headline, self.headline_font),
            (TextField::Body, self.body_font),
            (TextField::Footer, self.footer_font),
        ] {
            if let Some(font) = font {
                events.push(ControlEvent::PickFont { field, font });
            }
        }

        if let Some(date) = &self.date {
            events.push(ControlEvent::EditDateBadge(date.clone()));
        }
        if self.no_photo {
            events.push(ControlEvent::ClearImage(ImageSlot::Photo));
        }
        if self.no_logo {
            events.push(ControlEvent::ClearImage(ImageSlot::Logo));
        }
        events
    }
}

fn parse_template(s: &str) -> Result<TemplateKind, String> {
    TemplateKind::from_id(s).ok_or_else(|| {
        let ids: Vec<_> = TEMPLATES.iter().map(|t| t.id).collect();
        format!("expected one of: {}", ids.join(", "))
    })
}

fn parse_preset(s: &str) -> Result<&'static OverlayPreset, String> {
    OverlayPreset::find(s).ok_or_else(|| {
        let ids: Vec<_> = OVERLAY_PRESETS.iter().map(|p| p.id).collect();
        format!("expected one of: {}", ids.join(", "))
    })
}

fn parse_direction(s: &str) -> Result<&'static OverlayDirection, String> {
    OverlayDirection::find(s).ok_or_else(|| {
        let ids: Vec<_> = OVERLAY_DIRECTIONS.iter().map(|d| d.id).collect();
        format!("expected one of: {}", ids.join(", "))
    })
}

fn parse_font(s: &str) -> Result<FontFamily, String> {
    FontFamily::from_label(s).ok_or_else(|| {
        let labels: Vec<_> = FontFamily::ALL.iter().map(|f| f.label()).collect();
        format!("expected one of: {}", labels.join(", "))
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::State(args) => cmd_state(&args),
        Command::Gradient(args) => cmd_gradient(&args),
        Command::List => {
            cmd_list();
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    let value = serde_json::from_reader(r)
        .with_context(|| format!("parse {what} JSON '{}'", path.display()))?;
    Ok(value)
}

fn build_store(args: &EditArgs) -> anyhow::Result<EditorStore> {
    let initial = match &args.state {
        Some(path) => read_json::<EditorState>(path, "state")?,
        None => EditorState::new(&SystemClock),
    };
    let mut store = EditorStore::new(initial);

    for path in &args.patches {
        let patch: EditorPatch = read_json(path, "patch")?;
        store.apply(&patch);
    }

    // Uploads encode in the background while the flag edits are applied.
    let mut uploads = Vec::new();
    for (slot, path) in [(ImageSlot::Photo, &args.photo), (ImageSlot::Logo, &args.logo)] {
        if let Some(path) = path {
            uploads.push(submit_upload_file(slot, path.clone())?);
        }
    }

    for event in args.events() {
        store.dispatch(event);
    }

    for upload in uploads {
        let slot = upload.slot();
        let patch = upload.wait().with_context(|| format!("encode {slot:?} upload"))?;
        store.apply(&patch);
    }

    tracing::info!(
        template = %store.state().active_template,
        revision = store.revision(),
        "editor state ready"
    );
    Ok(store)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let store = build_store(&args.edit)?;
    let comp = store.preview();

    if let Some(svg_path) = &args.svg {
        std::fs::write(svg_path, to_svg(&comp))
            .with_context(|| format!("write svg '{}'", svg_path.display()))?;
    }

    let rasterizer = match &args.fonts_dir {
        Some(dir) => SvgRasterizer::with_fonts_dir(dir),
        None => SvgRasterizer::new(),
    };
    let exporter = Exporter::new(rasterizer).with_scale(args.scale);
    let image = exporter.export(&comp, &SystemClock)?;

    let path = match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            image.write_to(out)?;
            out.clone()
        }
        None => image.write_to_dir(&args.out_dir)?,
    };

    eprintln!("wrote {} ({}x{})", path.display(), image.width, image.height);
    Ok(())
}

fn cmd_state(args: &EditArgs) -> anyhow::Result<()> {
    let store = build_store(args)?;
    let json = serde_json::to_string_pretty(store.state()).context("serialize state")?;
    println!("{json}");
    Ok(())
}

fn cmd_gradient(args: &EditArgs) -> anyhow::Result<()> {
    let store = build_store(args)?;
    println!("{}", build_overlay_gradient(store.state()).to_css());
    Ok(())
}

fn cmd_list() {
    println!("templates:");
    for t in &TEMPLATES {
        println!("  {:<16} {}", t.id, t.label);
    }
    println!("presets:");
    for p in &OVERLAY_PRESETS {
        println!("  {:<16} {} {} {}", p.id, p.label, p.color, p.opacity);
    }
    println!("directions:");
    for d in &OVERLAY_DIRECTIONS {
        println!("  {:<16} {}", d.id, d.label);
    }
    println!("fonts:");
    for f in FontFamily::ALL {
        println!("  {:<16} {}", f.label(), f.descriptor());
    }
}
