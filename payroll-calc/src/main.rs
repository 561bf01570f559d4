use payroll_calc::{Config, Console, InertApproval, PayrollSession, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. .env before anything reads the environment
    dotenv::dotenv().ok();

    // 2. Configuration and logging
    let config = Config::from_env();
    setup_environment(&config);

    print_banner();
    tracing::info!(environment = %config.environment, "Payroll calculator starting");

    // 3. Session seeded with the configured rates
    let session = PayrollSession::from_config(&config);
    let mut console = Console::new(session, InertApproval);

    // 4. Interactive loop over stdin/stdout
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = console.run(stdin.lock(), stdout.lock()) {
        tracing::error!(code = %e.code, "Console error: {}", e);
        return Err(e.into());
    }

    tracing::info!(
        shifts = console.session().shifts().len(),
        "Payroll calculator stopped"
    );
    Ok(())
}
