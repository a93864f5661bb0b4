use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, Command};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show what would be done without making changes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .help("Path to project root directory")
                .default_value("."),
        )
        .get_matches();

    let mut logger = env_logger::Builder::from_default_env();
    if matches.get_flag("verbose") {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let project_root = matches
        .get_one::<String>("project-root")
        .expect("project-root has a default");

    let dry_run = matches.get_flag("dry-run");

    opruim::api::run(project_root, dry_run)?;

    Ok(())
}
