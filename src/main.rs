//! subtheme's main application entry point and orchestration logic.
//! Handles command-line argument parsing, source resolution, and the
//! scaffold pipeline invocation.

use subtheme::{
    archive::FormatExtractorFactory,
    cli::{get_args, Args},
    config::Settings,
    constants::STARTERKIT_DIR,
    error::{default_error_handler, Result},
    generator::Generator,
    naming::machine_name,
    pipeline::{scaffold, ScaffoldRequest},
    prompt::{DialoguerPrompter, Prompter},
    renderer::{MiniJinjaRenderer, TemplateRenderer},
    source::SourceLocation,
    theme::{FilesystemThemeResolver, ThemePathResolver},
};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Loads optional site-level settings
/// 2. Builds the scaffold request (machine name, source, destination)
/// 3. Confirms before writing into an existing theme directory
/// 4. Runs the scaffold pipeline
fn run(args: Args) -> Result<()> {
    let settings = Settings::load(&args.root)?;
    let renderer = MiniJinjaRenderer::new();
    let prompter = DialoguerPrompter::new();

    let request = build_request(&args, &settings, &renderer)?;
    println!("Using starter kit from the {}", request.source);

    if request.destination.exists() {
        let overwrite = prompter.confirm(
            args.force,
            format!(
                "Theme directory '{}' already exists. Overwrite its files?",
                request.destination.display()
            ),
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let factory = FormatExtractorFactory;
    let generator = Generator::new(&renderer, settings.tokens());
    scaffold(&request, &factory, &generator)?;

    println!(
        "Theme '{}' generated in '{}'.",
        request.label,
        request.destination.display()
    );
    Ok(())
}

/// Resolves the scaffold request from arguments, settings and defaults.
///
/// The destination pattern is rendered against the scaffold context; the
/// source falls back to the base theme's bundled starter kit when neither
/// the command line nor the settings name one.
fn build_request(
    args: &Args,
    settings: &Settings,
    renderer: &dyn TemplateRenderer,
) -> Result<ScaffoldRequest> {
    let machine = machine_name(&args.name);
    let context = serde_json::json!({
        "name": args.name,
        "machine_name": machine,
    });
    let relative = renderer.render(settings.destination(), &context)?;
    let destination = args.root.join(relative);

    let source = match args.source.clone().or_else(|| settings.source.clone()) {
        Some(location) => SourceLocation::from_string(&location),
        None => {
            let base = args.base.as_deref().unwrap_or_else(|| settings.base_theme());
            let resolver = FilesystemThemeResolver::new(&args.root);
            let kit = resolver.resolve(base)?.join(STARTERKIT_DIR);
            SourceLocation::Local(kit)
        }
    };

    Ok(ScaffoldRequest::new(args.name.clone(), source, destination))
}
