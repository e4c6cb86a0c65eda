use weekgrid::core::cli::CliArgs;
use weekgrid::core::context::AppContext;
use weekgrid::logging::LogTarget;

fn main() {
    let cli = match CliArgs::from_env() {
        Ok(cli) => cli,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };
    let paths = cli.paths.clone();
    let mut ctx =
        match AppContext::new_with_paths(paths.config_path, paths.store_path, paths.logs_dir) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };

    if let Err(err) = weekgrid::run(&mut ctx, &cli) {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
