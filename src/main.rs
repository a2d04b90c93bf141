use clap::Parser;
use kundli_milan::config::cli::{Command, MatchArgs};
use kundli_milan::core::matcher::validate_profiles;
use kundli_milan::core::{AuthService, MatchReport};
use kundli_milan::domain::model::{LoginRequest, RegisterRequest};
use kundli_milan::utils::error::ErrorSeverity;
use kundli_milan::utils::{logger, validation::Validate};
use kundli_milan::{
    estimate_by_name, AuthApiClient, CliConfig, ContentApiClient, MatchEngine, Result, Session,
    TomlConfig, ZodiacSign,
};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, config.log_level(), cli.log_format(&config));

    tracing::info!("Starting kundli-milan");

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli.command, &config).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: &Command, config: &TomlConfig) -> Result<()> {
    match command {
        Command::Signs => {
            print_signs();
            Ok(())
        }
        Command::Score { sign1, sign2 } => {
            let score = estimate_by_name(sign1, sign2)?;
            println!(
                "{} · {}: {} ({}%, {})",
                sign1,
                sign2,
                score,
                score.percentage(),
                score.recommendation()
            );
            Ok(())
        }
        Command::Match(args) => run_match(args, config).await,
        Command::Login(args) => {
            let auth = AuthApiClient::new(config)?;
            let session = auth.login(&LoginRequest::from(args)).await?;
            print_session(&session);
            Ok(())
        }
        Command::Register(args) => {
            let auth = AuthApiClient::new(config)?;
            let session = auth.register(&RegisterRequest::from(args)).await?;
            print_session(&session);
            Ok(())
        }
    }
}

async fn run_match(args: &MatchArgs, config: &TomlConfig) -> Result<()> {
    let (person1, person2) = args.profiles();
    // 登入前先檢查，避免無效輸入打到 auth API
    validate_profiles(&person1, &person2)?;

    let session = match args.login_request()? {
        Some(request) => AuthApiClient::new(config)?.login(&request).await?,
        None => Session::anonymous(),
    };

    let engine = MatchEngine::new(ContentApiClient::new(config)?);

    // 先顯示本地估算分數，即使 AI 服務失敗也不會遺失
    let score = engine.estimate(&person1, &person2);
    println!(
        "♥ {} {} · {} {}: {} ({}%)",
        person1.name,
        person1.moon_sign.symbol(),
        person2.name,
        person2.moon_sign.symbol(),
        score,
        score.percentage()
    );

    let result = engine.analyze(&session, &person1, &person2).await;
    let _ = session.end();
    let report = result?;
    print_report(&report);
    Ok(())
}

fn print_signs() {
    for sign in ZodiacSign::ALL {
        println!(
            "{:>2}. {} {:<10} {:<12} ruler: {:<8} {:<6} {}",
            sign.index() + 1,
            sign.symbol(),
            sign.name(),
            sign.english(),
            sign.ruler(),
            sign.element(),
            sign.quality()
        );
    }
}

fn print_session(session: &Session) {
    match session.user() {
        Some(user) => {
            println!("✅ Signed in as {} <{}>", user.username, user.email);
            if !user.full_name.is_empty() {
                println!("   {}", user.full_name);
            }
            println!("   role: {}, verified: {}", user.role, user.is_verified);
        }
        None => println!("Not signed in"),
    }
}

fn print_report(report: &MatchReport) {
    let reading = &report.reading;
    let verdict = reading
        .verdict()
        .map(|v| v.label().to_string())
        .unwrap_or_else(|| reading.verdict.clone());

    println!();
    println!("{} — {}", report.score, verdict);
    if !reading.verdict_detail.is_empty() {
        println!("{}", reading.verdict_detail);
    }

    for (label, text) in [
        ("Overall", &reading.overall),
        ("Emotional", &reading.emotional),
        ("Physical", &reading.physical),
        ("Intellectual", &reading.intellectual),
        ("Spiritual", &reading.spiritual),
        ("Life together", &reading.life_together),
    ] {
        if !text.is_empty() {
            println!("\n{}:\n  {}", label, text);
        }
    }

    print_list("Strengths", &reading.strengths);
    print_list("Areas to nurture", &reading.nurture);

    if let Some(timing) = &reading.auspicious_timing {
        println!("\nAuspicious timing:\n  {}", timing);
    }

    if !reading.remedies.is_empty() {
        println!("\nRemedies:");
        for remedy in &reading.remedies {
            println!("  ✿ {}: {}", remedy.title, remedy.description);
        }
    }
}

fn print_list(label: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    println!("\n{}:", label);
    for item in items {
        println!("  • {}", item);
    }
}

