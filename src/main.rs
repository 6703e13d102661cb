use glsl2h::utils::{logger, validation::Validate};
use glsl2h::{CliConfig, HeaderEngine, Invocation, LocalStorage, ShaderPipeline, USAGE};

fn main() {
    let config = match CliConfig::from_args(std::env::args_os()) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Usage) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => e.exit(),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let pipeline = ShaderPipeline::new(LocalStorage::default(), config);
    let engine = HeaderEngine::new(pipeline);

    if let Err(e) = engine.run() {
        tracing::error!("Conversion failed: {} (Category: {:?})", e, e.category());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
}
