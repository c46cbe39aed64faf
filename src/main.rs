use miette::Result;

/// Main entry point for the teleporting-turtle CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    // Verbosity is controlled through RUST_LOG
    env_logger::init();

    teleporting_turtle::run()
}
